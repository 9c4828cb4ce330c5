// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary helpers between dashboard endpoints and `wildview_axis`.
//!
//! This crate provides:
//! - decoding of the `{ "status": "success", "data": [...] }` payloads served by
//!   the dashboard endpoints into [`wildview_axis::DataPoint`]s, and
//! - [`SourceFallback`], an ordered list of sources tried in turn with a bounded
//!   attempt count.
//!
//! Fetching is left to the caller: both pieces operate on data (or closures)
//! the caller supplies.

#![no_std]

extern crate alloc;

mod error;
mod fallback;
mod record;

pub use error::{FallbackError, FeedError};
pub use fallback::{Loaded, SourceFallback};
pub use record::{Envelope, LabelField, Record, decode_points, points_or_empty};
