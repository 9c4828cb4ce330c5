// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial zoom window sizing for long series.

use smallvec::SmallVec;

/// Series with at most this many points are shown in full.
const ZOOM_THRESHOLD: usize = 10;

/// The initial window covers `ZOOM_SPAN / n` percent of the axis.
const ZOOM_SPAN: f64 = 1000.0;

/// A percentage range of the full axis that is initially visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomWindow {
    /// Start of the visible range, in percent of the full axis.
    pub start_pct: f64,
    /// End of the visible range, in percent of the full axis.
    pub end_pct: f64,
}

impl ZoomWindow {
    /// Returns the window width in percent.
    pub fn span_pct(&self) -> f64 {
        self.end_pct - self.start_pct
    }
}

/// How a zoom window is manipulated by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomStyle {
    /// A slider control drawn below the plot.
    Slider,
    /// Wheel/drag zoom inside the plot area.
    Inside,
}

/// The zoom controls for one axis: each style paired with its initial window.
///
/// All entries share the same window so the slider and the inside zoom stay in sync.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Zoom controls, in installation order.
    pub controls: SmallVec<[(ZoomStyle, ZoomWindow); 2]>,
}

impl ZoomConfig {
    /// Builds the slider + inside pair for `window`.
    pub fn pair(window: ZoomWindow) -> Self {
        let mut controls = SmallVec::new();
        controls.push((ZoomStyle::Slider, window));
        controls.push((ZoomStyle::Inside, window));
        Self { controls }
    }

    /// Returns the shared window, if any control is installed.
    pub fn window(&self) -> Option<ZoomWindow> {
        self.controls.first().map(|&(_, w)| w)
    }
}

/// Returns the initial zoom window for an axis with `n` points.
///
/// Short series (`n ≤ 10`) need no zoom and yield `None`. Longer series keep the
/// most recent `1000 / n` percent visible: `start = max(0, 100 − 1000/n)`, `end = 100`.
pub fn zoom_window(n: usize) -> Option<ZoomWindow> {
    zoom_window_with(n, ZOOM_THRESHOLD, ZOOM_SPAN)
}

/// Returns the slider + inside zoom controls for an axis with `n` points.
pub fn zoom_config(n: usize) -> Option<ZoomConfig> {
    zoom_window(n).map(ZoomConfig::pair)
}

pub(crate) fn zoom_window_with(n: usize, threshold: usize, span: f64) -> Option<ZoomWindow> {
    if n <= threshold {
        return None;
    }
    let start_pct = (100.0 - span / n as f64).max(0.0);
    if !start_pct.is_finite() {
        return None;
    }
    Some(ZoomWindow {
        start_pct,
        end_pct: 100.0,
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn short_series_have_no_zoom() {
        assert_eq!(zoom_window(0), None);
        assert_eq!(zoom_window(10), None);
        assert!(zoom_config(10).is_none());
    }

    #[test]
    fn long_series_show_the_tail() {
        assert_eq!(
            zoom_window(100),
            Some(ZoomWindow {
                start_pct: 90.0,
                end_pct: 100.0,
            })
        );
        let w = zoom_window(1000).unwrap();
        assert_eq!(w.start_pct, 99.0);
        assert_eq!(w.span_pct(), 1.0);
    }

    #[test]
    fn start_is_clamped_at_zero() {
        let w = zoom_window(20).unwrap();
        assert_eq!(w.start_pct, 50.0);
        let wide = zoom_window_with(11, 10, 5000.0).unwrap();
        assert_eq!(wide.start_pct, 0.0);
        assert_eq!(wide.end_pct, 100.0);
    }

    #[test]
    fn slider_and_inside_share_the_window() {
        let cfg = zoom_config(200).unwrap();
        assert_eq!(cfg.controls.len(), 2);
        assert_eq!(cfg.controls[0].0, ZoomStyle::Slider);
        assert_eq!(cfg.controls[1].0, ZoomStyle::Inside);
        assert_eq!(cfg.controls[0].1, cfg.controls[1].1);
        assert_eq!(cfg.window().unwrap().start_pct, 95.0);
    }
}
