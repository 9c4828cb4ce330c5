// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive axis layout.
//!
//! Narrow viewports show fewer labels and rotate them eagerly; desktops keep
//! labels horizontal until they overflow the container.

extern crate alloc;

use alloc::string::String;

use crate::config::{LabelStyle, PlannerConfig, TruncateLimits};
use crate::interval::interval_for_scaled_count;
use crate::label::{LabelFormat, LabelKind};
use crate::measure::{FixedWidthMeasurer, LabelMeasurer, rotated_extent};
use crate::rotation::{Rotation, calculate_rotation_with};
use crate::zoom::ZoomWindow;

/// Viewport size class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Narrower than 768px.
    Mobile,
    /// At least 768px and narrower than 1024px.
    Tablet,
    /// 1024px and wider.
    Desktop,
}

impl DeviceClass {
    /// Multiplier applied to the label count before picking an interval.
    ///
    /// Smaller screens behave as if there were more labels, so more are skipped.
    pub fn density_scale(self) -> f64 {
        match self {
            Self::Mobile => 2.0,
            Self::Tablet => 1.5,
            Self::Desktop => 1.0,
        }
    }
}

/// Per-render layout inputs derived from the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutContext {
    /// Measured container width in CSS pixels.
    pub container_width_px: f64,
    /// Device class for that width.
    pub device_class: DeviceClass,
}

impl LayoutContext {
    /// Classifies `container_width_px` with the default breakpoints.
    pub fn from_width(container_width_px: f64) -> Self {
        Self::from_width_with(container_width_px, &PlannerConfig::default())
    }

    pub(crate) fn from_width_with(container_width_px: f64, config: &PlannerConfig) -> Self {
        Self {
            container_width_px,
            device_class: config.breakpoints.classify(container_width_px),
        }
    }
}

/// Axis layout decisions for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutDirective {
    /// Labels skipped between two rendered labels.
    pub interval: usize,
    /// Label rotation.
    pub rotation: Rotation,
    /// Label text transform.
    pub label_format: LabelFormat,
    /// Truncation limits used by [`LabelFormat::Kind`].
    pub truncate: TruncateLimits,
    /// Initially visible axis range, if the series is long enough to need one.
    pub zoom: Option<ZoomWindow>,
    /// Tick label style.
    pub label_style: LabelStyle,
}

impl LayoutDirective {
    /// Applies the directive's label transform to `text`.
    pub fn format_label(&self, text: &str) -> String {
        self.label_format.apply(text, &self.truncate)
    }

    /// Returns whether the label at `index` is rendered under this interval.
    pub fn is_label_visible(&self, index: usize) -> bool {
        index % (self.interval + 1) == 0
    }

    /// Estimates the thickness a horizontal axis needs for its rotated labels.
    ///
    /// Only visible labels are measured, after the label transform.
    pub fn label_band_height<S: AsRef<str>>(
        &self,
        labels: &[S],
        measurer: &dyn LabelMeasurer,
    ) -> f64 {
        labels
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_label_visible(*i))
            .map(|(_, label)| {
                let size = measurer.measure(&self.format_label(label.as_ref()));
                rotated_extent(size, self.rotation.angle()).height
            })
            .fold(0.0, f64::max)
    }
}

/// Plans an axis for `labels` in a container of `container_width_px`.
///
/// Labels are formatted as dates. See [`plan_for_viewport_as`] to pick another format.
pub fn plan_for_viewport<S: AsRef<str>>(labels: &[S], container_width_px: f64) -> LayoutDirective {
    plan_for_viewport_as(
        labels,
        container_width_px,
        LabelFormat::Kind(LabelKind::Date),
    )
}

/// Plans an axis for `labels` with an explicit label transform.
pub fn plan_for_viewport_as<S: AsRef<str>>(
    labels: &[S],
    container_width_px: f64,
    label_format: LabelFormat,
) -> LayoutDirective {
    plan_for_viewport_with(
        labels,
        container_width_px,
        label_format,
        &PlannerConfig::default(),
    )
}

pub(crate) fn plan_for_viewport_with<S: AsRef<str>>(
    labels: &[S],
    container_width_px: f64,
    label_format: LabelFormat,
    config: &PlannerConfig,
) -> LayoutDirective {
    let ctx = LayoutContext::from_width_with(container_width_px, config);
    let scaled = labels.len() as f64 * ctx.device_class.density_scale();
    let rotation = match ctx.device_class {
        DeviceClass::Mobile => Rotation::Vertical,
        DeviceClass::Tablet => Rotation::Steep,
        DeviceClass::Desktop => calculate_rotation_with(
            labels,
            container_width_px,
            &FixedWidthMeasurer::new(config.char_width_px),
        ),
    };
    LayoutDirective {
        interval: interval_for_scaled_count(scaled),
        rotation,
        label_format,
        truncate: config.truncate,
        zoom: None,
        label_style: config.label_styles.for_device(ctx.device_class),
    }
}
