// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label interval selection.
//!
//! The interval is the number of consecutive labels skipped between two rendered
//! labels, matching the `interval` option of category axes in common charting
//! libraries: with interval `k`, labels `0, k + 1, 2(k + 1), ...` are shown.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Returns the label interval for an axis with `n` labels.
///
/// The policy is a monotone step function: up to 5 labels are all shown, then
/// every other label (up to 10), every third (up to 20), every fifth (up to 50),
/// and beyond that roughly ten labels in total.
pub fn select_interval(n: usize) -> usize {
    match n {
        0..=5 => 0,
        6..=10 => 1,
        11..=20 => 2,
        21..=50 => 4,
        _ => n / 10,
    }
}

/// Applies the [`select_interval`] policy to a density-scaled label count.
///
/// Responsive layouts scale the real label count up on narrow viewports (e.g.
/// `n × 1.5` on tablets), which can produce a fractional count. Non-finite or
/// negative counts yield `0`.
pub fn interval_for_scaled_count(count: f64) -> usize {
    if !count.is_finite() || count <= 0.0 {
        return 0;
    }
    if count <= 5.0 {
        0
    } else if count <= 10.0 {
        1
    } else if count <= 20.0 {
        2
    } else if count <= 50.0 {
        4
    } else {
        let steps = (count / 10.0).floor().min(usize::MAX as f64);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "value is finite, non-negative and clamped to the usize range"
        )]
        {
            steps as usize
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn interval_matches_documented_steps() {
        assert_eq!(select_interval(0), 0);
        assert_eq!(select_interval(5), 0);
        assert_eq!(select_interval(6), 1);
        assert_eq!(select_interval(10), 1);
        assert_eq!(select_interval(11), 2);
        assert_eq!(select_interval(20), 2);
        assert_eq!(select_interval(21), 4);
        assert_eq!(select_interval(50), 4);
        assert_eq!(select_interval(51), 5);
        assert_eq!(select_interval(100), 10);
    }

    #[test]
    fn interval_is_non_decreasing() {
        let mut prev = 0;
        for n in 0..2_000 {
            let cur = select_interval(n);
            assert!(cur >= prev, "interval dropped at n={n}: {prev} -> {cur}");
            prev = cur;
        }
    }

    #[test]
    fn scaled_count_agrees_with_integer_policy() {
        for n in 0..500 {
            assert_eq!(
                interval_for_scaled_count(n as f64),
                select_interval(n),
                "mismatch at n={n}"
            );
        }
    }

    #[test]
    fn scaled_count_handles_fractions_and_garbage() {
        // 7 labels on a tablet: 10.5 is past the "every other label" step.
        assert_eq!(interval_for_scaled_count(10.5), 2);
        assert_eq!(interval_for_scaled_count(75.5), 7);
        assert_eq!(interval_for_scaled_count(f64::NAN), 0);
        assert_eq!(interval_for_scaled_count(f64::INFINITY), 0);
        assert_eq!(interval_for_scaled_count(-3.0), 0);
    }
}
