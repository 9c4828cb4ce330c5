// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for label layout.
//!
//! The planner never shapes text. Rotation and axis-thickness estimates go
//! through a [`LabelMeasurer`], so callers with real metrics (e.g. a canvas
//! `measureText` bridge) can plug them in, while the defaults stay on the
//! fixed-width estimate the dashboards were tuned against.

use kurbo::Size;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A minimal label measurement interface.
pub trait LabelMeasurer {
    /// Returns the unrotated bounding size of `text`.
    ///
    /// `text` may contain `\n`; implementations should stack lines vertically.
    fn measure(&self, text: &str) -> Size;
}

/// Fixed advance per character, one line height per line.
///
/// CJK glyphs are roughly square at the dashboards' 12px font size, so the
/// default of 12px per character slightly overestimates Latin text. That bias
/// rotates early rather than late.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedWidthMeasurer {
    /// Advance width of one character.
    pub char_width: f64,
    /// Height of one line.
    pub line_height: f64,
}

impl Default for FixedWidthMeasurer {
    fn default() -> Self {
        Self::new(12.0)
    }
}

impl FixedWidthMeasurer {
    /// Creates a measurer with the given per-character width and a matching line height.
    pub fn new(char_width: f64) -> Self {
        Self {
            char_width,
            line_height: char_width,
        }
    }
}

impl LabelMeasurer for FixedWidthMeasurer {
    fn measure(&self, text: &str) -> Size {
        let mut lines = 0_usize;
        let mut widest = 0_usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        Size::new(
            self.char_width * widest as f64,
            self.line_height * lines as f64,
        )
    }
}

/// Returns the axis-aligned bounds of a `size` box rotated by `angle_deg`.
pub fn rotated_extent(size: Size, angle_deg: f64) -> Size {
    let theta = angle_deg.to_radians();
    let sin = theta.sin().abs();
    let cos = theta.cos().abs();
    Size::new(
        cos * size.width + sin * size.height,
        sin * size.width + cos * size.height,
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9
    }

    #[test]
    fn fixed_width_counts_characters_not_bytes() {
        let m = FixedWidthMeasurer::default();
        assert_eq!(m.measure("老虎"), Size::new(24.0, 12.0));
        assert_eq!(m.measure("ab"), Size::new(24.0, 12.0));
        assert_eq!(m.measure(""), Size::new(0.0, 12.0));
    }

    #[test]
    fn fixed_width_stacks_lines() {
        let m = FixedWidthMeasurer::new(10.0);
        assert_eq!(m.measure("2023年\n1季度"), Size::new(50.0, 20.0));
    }

    #[test]
    fn rotation_swaps_extent_at_right_angles() {
        let s = Size::new(60.0, 12.0);
        let flat = rotated_extent(s, 0.0);
        assert!(close(flat.width, 60.0) && close(flat.height, 12.0));
        let upright = rotated_extent(s, 90.0);
        assert!(close(upright.width, 12.0) && close(upright.height, 60.0));
        let tilted = rotated_extent(s, 45.0);
        assert!(tilted.height > 12.0 && tilted.height < 60.0);
    }
}
