// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot axis planning.
//!
//! [`AxisPlanner::plan`] picks a strategy from the series length and bundles
//! everything a chart needs for its category axis: the [`LayoutDirective`], the
//! zoom controls and a tooltip lookup that restores full labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::trace;

use crate::config::PlannerConfig;
use crate::label::{LabelFormat, LabelKind, format_label_with};
use crate::point::DataPoint;
use crate::responsive::{DeviceClass, LayoutContext, LayoutDirective, plan_for_viewport_with};
use crate::rotation::Rotation;
use crate::zoom::{ZoomConfig, ZoomWindow, zoom_window_with};

/// Series up to this length are plotted with plain labels.
const SIMPLE_MAX_POINTS: usize = 10;

/// Series longer than this get zoom controls.
const ZOOM_MIN_POINTS: usize = 20;

/// Which layout strategy an [`AxisPlan`] uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanStrategy {
    /// Few points: all labels, unrotated and untransformed.
    Simple,
    /// Medium series: responsive interval, rotation and date formatting.
    Responsive,
    /// Long series: responsive layout plus zoom controls.
    ResponsiveZoom,
}

impl PlanStrategy {
    /// Chooses a strategy for a series of `n` points.
    pub fn for_len(n: usize) -> Self {
        if n > ZOOM_MIN_POINTS {
            Self::ResponsiveZoom
        } else if n > SIMPLE_MAX_POINTS {
            Self::Responsive
        } else {
            Self::Simple
        }
    }
}

/// Hover content for one axis position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// The full, untransformed label.
    pub label: String,
    /// The point's value.
    pub value: f64,
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// A complete category-axis plan.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisPlan {
    /// The strategy that produced this plan.
    ///
    /// [`PlanStrategy::ResponsiveZoom`] is only reported when [`AxisPlan::zoom`] is set.
    pub strategy: PlanStrategy,
    /// Interval, rotation, label transform and style.
    pub directive: LayoutDirective,
    /// Slider and inside zoom controls, for long series.
    pub zoom: Option<ZoomConfig>,
}

impl AxisPlan {
    /// Returns the rendered text for each label, or `None` where the interval skips it.
    pub fn tick_labels<S: AsRef<str>>(&self, labels: &[S]) -> Vec<Option<String>> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                self.directive
                    .is_label_visible(i)
                    .then(|| self.directive.format_label(label.as_ref()))
            })
            .collect()
    }

    /// Returns the tooltip for the point at `index`.
    ///
    /// Tooltips always carry the untransformed label so truncated or reformatted
    /// ticks stay identifiable.
    pub fn tooltip(&self, points: &[DataPoint], index: usize) -> Option<Tooltip> {
        points.get(index).map(|p| Tooltip {
            label: p.label.clone(),
            value: p.value,
        })
    }
}

/// Axis planner carrying a [`PlannerConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisPlanner {
    config: PlannerConfig,
}

impl AxisPlanner {
    /// Creates a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Returns the planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans the category axis for `points` in a container of `container_width_px`.
    ///
    /// Point labels are treated as dates.
    pub fn plan(&self, points: &[DataPoint], container_width_px: f64) -> AxisPlan {
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        self.plan_labels(
            &labels,
            container_width_px,
            LabelFormat::Kind(LabelKind::Date),
        )
    }

    /// Plans the category axis for `labels` with an explicit label transform.
    ///
    /// `label_format` is ignored by the [`PlanStrategy::Simple`] strategy, which
    /// renders labels unchanged.
    pub fn plan_labels<S: AsRef<str>>(
        &self,
        labels: &[S],
        container_width_px: f64,
        label_format: LabelFormat,
    ) -> AxisPlan {
        let strategy = PlanStrategy::for_len(labels.len());
        let plan = match strategy {
            PlanStrategy::Simple => AxisPlan {
                strategy,
                directive: LayoutDirective {
                    interval: 0,
                    rotation: Rotation::Horizontal,
                    label_format: LabelFormat::Raw,
                    truncate: self.config.truncate,
                    zoom: None,
                    label_style: self.config.label_styles.for_device(DeviceClass::Desktop),
                },
                zoom: None,
            },
            PlanStrategy::Responsive => AxisPlan {
                strategy,
                directive: self.plan_for_viewport_as(labels, container_width_px, label_format),
                zoom: None,
            },
            PlanStrategy::ResponsiveZoom => {
                let mut directive =
                    self.plan_for_viewport_as(labels, container_width_px, label_format);
                let window = self.zoom_window(labels.len());
                directive.zoom = window;
                AxisPlan {
                    // A configured zoom threshold can leave a long series without a window.
                    strategy: match window {
                        Some(_) => strategy,
                        None => PlanStrategy::Responsive,
                    },
                    directive,
                    zoom: window.map(ZoomConfig::pair),
                }
            }
        };
        trace!(
            labels = labels.len(),
            container_width_px,
            strategy = ?plan.strategy,
            interval = plan.directive.interval,
            rotation = plan.directive.rotation.degrees(),
            "planned category axis"
        );
        plan
    }

    /// Classifies a container width with this planner's breakpoints.
    pub fn context(&self, container_width_px: f64) -> LayoutContext {
        LayoutContext::from_width_with(container_width_px, &self.config)
    }

    /// Responsive directive with this planner's configuration; see [`crate::plan_for_viewport`].
    pub fn plan_for_viewport_as<S: AsRef<str>>(
        &self,
        labels: &[S],
        container_width_px: f64,
        label_format: LabelFormat,
    ) -> LayoutDirective {
        plan_for_viewport_with(labels, container_width_px, label_format, &self.config)
    }

    /// Zoom window with this planner's threshold and span; see [`crate::zoom_window`].
    pub fn zoom_window(&self, n: usize) -> Option<ZoomWindow> {
        zoom_window_with(n, self.config.zoom_threshold, self.config.zoom_span)
    }

    /// Formats a label with this planner's truncation limits.
    pub fn format_label(&self, text: &str, kind: LabelKind) -> String {
        format_label_with(text, kind, &self.config.truncate)
    }

    /// A two-line transform using this planner's line length.
    pub fn multi_line(&self) -> LabelFormat {
        LabelFormat::MultiLine {
            max_line_len: self.config.multi_line_len,
        }
    }
}
