// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label rotation.

use tracing::trace;

use crate::measure::{FixedWidthMeasurer, LabelMeasurer};

/// One of the four label angles the dashboards use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    /// `0°`: labels fit side by side.
    #[default]
    Horizontal,
    /// `30°`: labels overflow the container by up to 50%.
    Slight,
    /// `45°`: labels overflow the container by up to 100%.
    Steep,
    /// `90°`: labels are drawn vertically.
    Vertical,
}

impl Rotation {
    /// Returns the angle in whole degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Self::Horizontal => 0,
            Self::Slight => 30,
            Self::Steep => 45,
            Self::Vertical => 90,
        }
    }

    /// Returns the angle in degrees, as consumed by axis `labelAngle`/`rotate` options.
    pub fn angle(self) -> f64 {
        f64::from(self.degrees())
    }

    fn for_overflow(total_width: f64, container_width_px: f64) -> Self {
        if total_width <= container_width_px {
            Self::Horizontal
        } else if total_width <= container_width_px * 1.5 {
            Self::Slight
        } else if total_width <= container_width_px * 2.0 {
            Self::Steep
        } else {
            Self::Vertical
        }
    }
}

/// Picks a rotation for `labels` laid out side by side in `container_width_px`.
///
/// The estimated label row width is `mean(chars) × 12px × count`. An empty label
/// list or a non-finite width yields [`Rotation::Horizontal`].
pub fn calculate_rotation<S: AsRef<str>>(labels: &[S], container_width_px: f64) -> Rotation {
    calculate_rotation_with(labels, container_width_px, &FixedWidthMeasurer::default())
}

/// Like [`calculate_rotation`], but measures labels with `measurer`.
///
/// The mean label width times the label count is simply the summed label width,
/// so that sum is compared against the container.
pub fn calculate_rotation_with<S: AsRef<str>>(
    labels: &[S],
    container_width_px: f64,
    measurer: &dyn LabelMeasurer,
) -> Rotation {
    if labels.is_empty() {
        return Rotation::Horizontal;
    }
    if !container_width_px.is_finite() {
        trace!(container_width_px, "non-finite container width, not rotating");
        return Rotation::Horizontal;
    }
    let total_width: f64 = labels
        .iter()
        .map(|label| measurer.measure(label.as_ref()).width)
        .sum();
    if !total_width.is_finite() {
        trace!(total_width, "non-finite label width estimate, not rotating");
        return Rotation::Horizontal;
    }
    Rotation::for_overflow(total_width, container_width_px)
}
