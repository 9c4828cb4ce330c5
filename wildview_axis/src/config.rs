// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planner configuration.
//!
//! The free functions of this crate use the dashboard defaults directly. An
//! [`crate::AxisPlanner`] carries a [`PlannerConfig`] so embedders can tune the
//! thresholds (e.g. for a different font size) without forking the heuristics.

use peniko::Color;

use crate::responsive::DeviceClass;

/// Viewport widths (in CSS pixels) at which the device class changes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Breakpoints {
    /// Smallest width treated as a tablet.
    pub tablet_min_px: f64,
    /// Smallest width treated as a desktop.
    pub desktop_min_px: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet_min_px: 768.0,
            desktop_min_px: 1024.0,
        }
    }
}

impl Breakpoints {
    /// Classifies a container width.
    ///
    /// Non-finite widths fall through to [`DeviceClass::Desktop`].
    pub fn classify(&self, width_px: f64) -> DeviceClass {
        if width_px < self.tablet_min_px {
            DeviceClass::Mobile
        } else if width_px < self.desktop_min_px {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Maximum label lengths (in characters) before truncation, per label kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TruncateLimits {
    /// Location names.
    pub location: usize,
    /// Species names.
    pub animal: usize,
    /// Every other non-date label.
    pub other: usize,
}

impl Default for TruncateLimits {
    fn default() -> Self {
        Self {
            location: 6,
            animal: 4,
            other: 8,
        }
    }
}

/// Tick label font size and paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size in CSS pixels.
    pub font_size: f64,
    /// Label fill color.
    pub fill: Color,
}

impl LabelStyle {
    /// The dashboard accent blue (`#1890ff`).
    pub const ACCENT: Color = Color::from_rgba8(0x18, 0x90, 0xff, 0xff);

    /// Creates an accent-colored style with the given font size.
    pub fn accent(font_size: f64) -> Self {
        Self {
            font_size,
            fill: Self::ACCENT,
        }
    }
}

/// Label styles per [`DeviceClass`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyles {
    /// Style on phones.
    pub mobile: LabelStyle,
    /// Style on tablets.
    pub tablet: LabelStyle,
    /// Style on desktops.
    pub desktop: LabelStyle,
}

impl Default for LabelStyles {
    fn default() -> Self {
        Self {
            mobile: LabelStyle::accent(10.0),
            tablet: LabelStyle::accent(11.0),
            desktop: LabelStyle::accent(12.0),
        }
    }
}

impl LabelStyles {
    /// Returns the style for a device class.
    pub fn for_device(&self, device: DeviceClass) -> LabelStyle {
        match device {
            DeviceClass::Mobile => self.mobile,
            DeviceClass::Tablet => self.tablet,
            DeviceClass::Desktop => self.desktop,
        }
    }
}

/// Tunables for [`crate::AxisPlanner`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Device-class breakpoints.
    pub breakpoints: Breakpoints,
    /// Estimated advance width of one label character, in pixels.
    pub char_width_px: f64,
    /// Truncation limits for non-date labels.
    pub truncate: TruncateLimits,
    /// First-line length used by [`crate::LabelFormat::MultiLine`].
    pub multi_line_len: usize,
    /// Series with at most this many points get no zoom window.
    pub zoom_threshold: usize,
    /// Zoom span constant: the initial window covers `span / n` percent.
    pub zoom_span: f64,
    /// Tick label styles per device class.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub label_styles: LabelStyles,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            char_width_px: 12.0,
            truncate: TruncateLimits::default(),
            multi_line_len: 6,
            zoom_threshold: 10,
            zoom_span: 1000.0,
            label_styles: LabelStyles::default(),
        }
    }
}

impl PlannerConfig {
    /// Set the device-class breakpoints.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the estimated per-character label width.
    pub fn with_char_width(mut self, char_width_px: f64) -> Self {
        self.char_width_px = char_width_px;
        self
    }

    /// Set the truncation limits.
    pub fn with_truncate_limits(mut self, truncate: TruncateLimits) -> Self {
        self.truncate = truncate;
        self
    }

    /// Set the first-line length for multi-line labels.
    pub fn with_multi_line_len(mut self, multi_line_len: usize) -> Self {
        self.multi_line_len = multi_line_len;
        self
    }

    /// Set the zoom threshold and span.
    pub fn with_zoom(mut self, threshold: usize, span: f64) -> Self {
        self.zoom_threshold = threshold;
        self.zoom_span = span;
        self
    }

    /// Set the per-device label styles.
    pub fn with_label_styles(mut self, label_styles: LabelStyles) -> Self {
        self.label_styles = label_styles;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn breakpoints_split_at_768_and_1024() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(0.0), DeviceClass::Mobile);
        assert_eq!(bp.classify(767.9), DeviceClass::Mobile);
        assert_eq!(bp.classify(768.0), DeviceClass::Tablet);
        assert_eq!(bp.classify(1023.0), DeviceClass::Tablet);
        assert_eq!(bp.classify(1024.0), DeviceClass::Desktop);
        assert_eq!(bp.classify(f64::NAN), DeviceClass::Desktop);
    }

    #[test]
    fn label_styles_grow_with_the_viewport() {
        let styles = LabelStyles::default();
        assert_eq!(styles.for_device(DeviceClass::Mobile).font_size, 10.0);
        assert_eq!(styles.for_device(DeviceClass::Tablet).font_size, 11.0);
        assert_eq!(styles.for_device(DeviceClass::Desktop).font_size, 12.0);
        assert_eq!(styles.desktop.fill, LabelStyle::ACCENT);
    }
}
