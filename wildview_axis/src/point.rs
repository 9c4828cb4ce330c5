// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;

/// One labeled detection count, as served by a dashboard endpoint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint {
    /// Axis label (a date, location or species name).
    pub label: String,
    /// Detection count.
    pub value: f64,
    /// Mean detection confidence, if reported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub confidence: Option<f64>,
    /// Share of all detections, in percent, if reported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub percentage: Option<f64>,
}

impl DataPoint {
    /// Creates a point without confidence or percentage.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            confidence: None,
            percentage: None,
        }
    }

    /// Set the mean detection confidence.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Set the percentage share.
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = Some(percentage);
        self
    }
}
