// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis label text transforms.
//!
//! Labels come straight from the data endpoints: compact dates (`20230105`),
//! quarter names (`2023年1季度`), reserve names and species names. The
//! transforms here shorten them for tick display. All of them count
//! **characters**, not bytes, so CJK labels are cut on character boundaries.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::config::TruncateLimits;

/// Marker appended to truncated labels.
pub const ELLIPSIS: &str = "...";

/// Break tokens for [`split_lines`], in priority order.
const BREAK_TOKENS: [&str; 7] = ["年", "月", "日", "季度", "-", "_", " "];

/// What a category label denotes; selects the default text transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelKind {
    /// A calendar date or quarter; reformatted with [`format_date`].
    #[default]
    Date,
    /// A location name; truncated to [`TruncateLimits::location`] characters.
    Location,
    /// A species name; truncated to [`TruncateLimits::animal`] characters.
    Animal,
    /// Anything else; truncated to [`TruncateLimits::other`] characters.
    Default,
}

/// The label transform carried by a [`crate::LayoutDirective`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelFormat {
    /// Render labels unchanged.
    Raw,
    /// Apply the transform for a [`LabelKind`].
    Kind(LabelKind),
    /// Split long labels over two lines (see [`split_lines`]).
    MultiLine {
        /// Maximum number of characters on the first line.
        max_line_len: usize,
    },
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::Kind(LabelKind::Date)
    }
}

impl LabelFormat {
    /// Applies this transform to a single label.
    pub fn apply(&self, text: &str, limits: &TruncateLimits) -> String {
        match *self {
            Self::Raw => String::from(text),
            Self::Kind(kind) => format_label_with(text, kind, limits),
            Self::MultiLine { max_line_len } => split_lines(text, max_line_len),
        }
    }
}

/// Shortens `text` to at most `max_len` characters followed by [`ELLIPSIS`].
///
/// Text of `max_len` characters or fewer is returned unchanged, so applying the
/// same truncation twice gives the same result as applying it once.
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => String::from(text),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&text[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
    }
}

/// Reformats date-like labels into a compact tick form.
///
/// - `YYYYMMDD` (exactly eight ASCII digits) becomes `MM/DD`.
/// - `YYYY年Q季度` becomes `YYQq`, e.g. `2023年1季度` → `23Q1`.
///
/// Any other text is returned unchanged.
pub fn format_date(text: &str) -> String {
    compact_day(text)
        .or_else(|| compact_quarter(text))
        .unwrap_or_else(|| String::from(text))
}

fn compact_day(text: &str) -> Option<String> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}/{}", &text[4..6], &text[6..8]))
}

fn compact_quarter(text: &str) -> Option<String> {
    let (year, rest) = text.split_once('年')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let marker = rest.find("季度")?;
    let quarter = rest[..marker].chars().next_back()?;
    if !quarter.is_ascii_digit() {
        return None;
    }
    Some(format!("{}Q{quarter}", &year[2..]))
}

/// Splits `text` over two lines when it is longer than `max_line_len` characters.
///
/// The first break token (`年`, `月`, `日`, `季度`, `-`, `_`, space, in that order)
/// whose first occurrence starts strictly inside the first line is used, and the
/// line break goes right after the token's first character, so the first line
/// never exceeds `max_line_len`. Without a usable token the text is broken at
/// exactly `max_line_len` characters.
pub fn split_lines(text: &str, max_line_len: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_line_len) else {
        return String::from(text);
    };

    for token in BREAK_TOKENS {
        let Some(at) = text.find(token) else {
            continue;
        };
        let pos = text[..at].chars().count();
        if pos > 0 && pos < max_line_len {
            let end = at + token.chars().next().map_or(0, char::len_utf8);
            return format!("{}\n{}", &text[..end], &text[end..]);
        }
    }

    format!("{}\n{}", &text[..cut], &text[cut..])
}

/// Formats a label for its [`LabelKind`] using the default truncation limits.
pub fn format_label(text: &str, kind: LabelKind) -> String {
    format_label_with(text, kind, &TruncateLimits::default())
}

pub(crate) fn format_label_with(text: &str, kind: LabelKind, limits: &TruncateLimits) -> String {
    match kind {
        LabelKind::Date => format_date(text),
        LabelKind::Location => truncate(text, limits.location),
        LabelKind::Animal => truncate(text, limits.animal),
        LabelKind::Default => truncate(text, limits.other),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn truncate_keeps_short_labels() {
        assert_eq!(truncate("老虎", 4), "老虎");
        assert_eq!(truncate("tiger", 5), "tiger");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn truncate_cuts_on_characters() {
        assert_eq!(truncate("国家级自然保护区", 6), "国家级自然保...");
        assert_eq!(truncate("snow leopard", 4), "snow...");
    }

    #[test]
    fn truncate_with_zero_limit_yields_marker_only() {
        assert_eq!(truncate("abc", 0), ELLIPSIS);
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn truncate_is_idempotent() {
        for text in ["国家级自然保护区", "snow leopard", "a", "", "abcdefghijk"] {
            for max_len in 0..10 {
                let once = truncate(text, max_len);
                assert_eq!(truncate(&once, max_len), once, "{text:?} / {max_len}");
            }
        }
    }

    #[test]
    fn date_compacts_days_and_quarters() {
        assert_eq!(format_date("20230105"), "01/05");
        assert_eq!(format_date("2023年1季度"), "23Q1");
        assert_eq!(format_date("2024年4季度"), "24Q4");
        assert_eq!(format_date("unrelated"), "unrelated");
    }

    #[test]
    fn date_passes_malformed_input_through() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2023-1-5"), "2023-1-5");
        assert_eq!(format_date("abcdefgh"), "abcdefgh");
        assert_eq!(format_date("2023年季度"), "2023年季度");
        assert_eq!(format_date("23年1季度"), "23年1季度");
    }

    #[test]
    fn split_prefers_break_tokens() {
        assert_eq!(split_lines("2023年1季度", 6), "2023年\n1季度");
        assert_eq!(split_lines("ab-cdefgh", 6), "ab-\ncdefgh");
        assert_eq!(split_lines("red deer herd", 6), "red \ndeer herd");
    }

    #[test]
    fn split_first_line_stays_within_limit() {
        let split = split_lines("abcde季度xyz", 6);
        assert_eq!(split, "abcde季\n度xyz");
        let (first, _) = split.split_once('\n').unwrap();
        assert!(first.chars().count() <= 6);
        assert_eq!(split_lines("1季度abcdefg", 6), "1季\n度abcdefg");
    }

    #[test]
    fn split_forces_break_without_tokens() {
        assert_eq!(split_lines("abcdefghij", 6), "abcdef\nghij");
        assert_eq!(split_lines("国家级自然保护区", 6), "国家级自然保\n护区");
    }

    #[test]
    fn split_ignores_tokens_outside_first_line() {
        // `-` sits at position 0 and position 7; neither is a usable break.
        assert_eq!(split_lines("-abcdef-gh", 6), "-abcde\nf-gh");
    }

    #[test]
    fn split_keeps_short_labels() {
        assert_eq!(split_lines("abc", 6), "abc");
        assert_eq!(split_lines("", 6), "");
    }

    #[test]
    fn label_kind_dispatch() {
        assert_eq!(format_label("20230105", LabelKind::Date), "01/05");
        assert_eq!(format_label("国家级自然保护区", LabelKind::Location), "国家级自然保...");
        assert_eq!(format_label("东北虎豹", LabelKind::Animal), "东北虎豹");
        assert_eq!(format_label("东北虎豹幼崽", LabelKind::Animal), "东北虎豹...");
        assert_eq!(format_label("camera-trap-01", LabelKind::Default), "camera-t...");
    }

    #[test]
    fn raw_format_is_identity() {
        let limits = TruncateLimits::default();
        assert_eq!(LabelFormat::Raw.apply("20230105", &limits), "20230105");
        assert_eq!(
            LabelFormat::MultiLine { max_line_len: 4 }.apply("2023年1季度", &limits),
            "2023\n年1季度"
        );
    }
}
