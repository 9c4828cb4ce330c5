// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive category-axis planning for WildView dashboards.
//!
//! Dashboard charts plot detection counts against category labels (dates,
//! reserve locations, species names). This crate decides how such an axis should
//! be laid out for a given container width:
//! - **Interval**: how many labels to skip between rendered labels.
//! - **Label transforms**: date reformatting, truncation and two-line splitting.
//! - **Rotation**: `0°`, `30°`, `45°` or `90°`, from estimated label widths.
//! - **Zoom window**: the initially visible percentage range for long series.
//! - **Grouping**: merging daily points into coarser month buckets.
//!
//! Every operation is a pure function of its inputs. The output is a
//! [`LayoutDirective`] (or a full [`AxisPlan`]) that a charting frontend applies
//! to its own axis configuration; rendering is out of scope.
//!
//! Malformed input never produces an error here: the planner degrades to a safe
//! default (pass-through label, no rotation, no zoom window).

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
#[cfg(not(feature = "std"))]
mod float;
mod group;
mod interval;
mod label;
mod measure;
mod plan;
mod point;
mod responsive;
mod rotation;
mod zoom;

pub use config::{Breakpoints, LabelStyle, LabelStyles, PlannerConfig, TruncateLimits};
pub use group::{GroupKey, LabelGroup, group_by};
pub use interval::{interval_for_scaled_count, select_interval};
pub use label::{
    ELLIPSIS, LabelFormat, LabelKind, format_date, format_label, split_lines, truncate,
};
pub use measure::{FixedWidthMeasurer, LabelMeasurer, rotated_extent};
pub use plan::{AxisPlan, AxisPlanner, PlanStrategy, Tooltip};
pub use point::DataPoint;
pub use responsive::{
    DeviceClass, LayoutContext, LayoutDirective, plan_for_viewport, plan_for_viewport_as,
};
pub use rotation::{Rotation, calculate_rotation, calculate_rotation_with};
pub use zoom::{ZoomConfig, ZoomStyle, ZoomWindow, zoom_config, zoom_window};
