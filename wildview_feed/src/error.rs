// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

use crate::record::LabelField;

/// Errors returned when decoding an endpoint payload.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The payload is not valid JSON or does not have the envelope shape.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The endpoint answered with a non-`success` status.
    #[error("endpoint reported status {status:?}")]
    Status {
        /// The reported status.
        status: String,
        /// The accompanying message, if any.
        message: Option<String>,
    },
    /// A record lacks the field used as the axis label.
    #[error("record {index} has no `{field}` label")]
    MissingLabel {
        /// Position of the record in `data`.
        index: usize,
        /// The expected label field.
        field: LabelField,
    },
    /// A record count is NaN or infinite.
    #[error("record {index} has a non-finite count")]
    NonFiniteCount {
        /// Position of the record in `data`.
        index: usize,
    },
}

/// Errors returned by [`crate::SourceFallback::load`].
#[derive(Debug, Error)]
pub enum FallbackError<E> {
    /// The fallback list is empty.
    #[error("no sources configured")]
    NoSources,
    /// Every attempted source failed.
    #[error("all {attempts} source attempts failed")]
    Exhausted {
        /// Number of sources tried.
        attempts: usize,
        /// The error from the last source tried.
        #[source]
        last: E,
    },
}
