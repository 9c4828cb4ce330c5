// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Endpoint payload decoding.
//!
//! The dashboard endpoints wrap their rows in an envelope:
//!
//! ```json
//! { "status": "success", "data": [{ "date": "20230105", "count": 10, "confidence": 0.95 }] }
//! ```
//!
//! Depending on the endpoint, the label lives under `date`, `location` or
//! `animal`. `confidence` and `percentage` are only served by the time-series
//! endpoint.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wildview_axis::DataPoint;

use crate::error::FeedError;

/// Status value of a successful response.
const STATUS_SUCCESS: &str = "success";

/// Which record field supplies the axis label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelField {
    /// Time-series rows (`date`).
    Date,
    /// Per-location rows (`location`).
    Location,
    /// Per-species rows (`animal`).
    Animal,
}

impl LabelField {
    /// Returns the JSON key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Location => "location",
            Self::Animal => "animal",
        }
    }
}

impl fmt::Display for LabelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One row of an endpoint response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Date label of time-series rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Location label of per-location rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Species label of per-species rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal: Option<String>,
    /// Detection count.
    pub count: f64,
    /// Mean detection confidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Share of detections, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl Record {
    /// Converts this row into a [`DataPoint`] labeled by `field`.
    ///
    /// `index` is the row position, used for error reporting.
    pub fn into_point(self, index: usize, field: LabelField) -> Result<DataPoint, FeedError> {
        let label = match field {
            LabelField::Date => self.date,
            LabelField::Location => self.location,
            LabelField::Animal => self.animal,
        }
        .ok_or(FeedError::MissingLabel { index, field })?;
        if !self.count.is_finite() {
            return Err(FeedError::NonFiniteCount { index });
        }
        Ok(DataPoint {
            label,
            value: self.count,
            confidence: self.confidence,
            percentage: self.percentage,
        })
    }
}

/// The response envelope shared by the dashboard endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// `"success"` or an error status.
    pub status: String,
    /// Response rows; absent on errors.
    #[serde(default)]
    pub data: Vec<Record>,
    /// Error detail, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// Converts all rows into points, failing on the first bad row.
    pub fn into_points(self, field: LabelField) -> Result<Vec<DataPoint>, FeedError> {
        if self.status != STATUS_SUCCESS {
            return Err(FeedError::Status {
                status: self.status,
                message: self.message,
            });
        }
        self.data
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_point(index, field))
            .collect()
    }
}

/// Decodes a JSON payload into points labeled by `field`.
pub fn decode_points(json: &str, field: LabelField) -> Result<Vec<DataPoint>, FeedError> {
    let envelope: Envelope = serde_json::from_str(json)?;
    envelope.into_points(field)
}

/// Decodes a JSON payload, treating any malformed payload as an empty data set.
///
/// The failure is logged at `warn` level; axis planning then proceeds on no data.
pub fn points_or_empty(json: &str, field: LabelField) -> Vec<DataPoint> {
    match decode_points(json, field) {
        Ok(points) => {
            debug!(records = points.len(), %field, "decoded payload");
            points
        }
        Err(err) => {
            warn!(%err, %field, "discarding malformed payload");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    const TIMESERIES: &str = r#"{
        "status": "success",
        "data": [
            {"date": "20230101", "count": 5, "confidence": 0.95, "percentage": 85.5},
            {"date": "20230115", "count": 3},
            {"date": "20230201", "count": 2, "confidence": 0.8}
        ]
    }"#;

    #[test]
    fn decodes_time_series_rows() {
        let points = decode_points(TIMESERIES, LabelField::Date).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(
            points[0],
            DataPoint::new("20230101", 5.0)
                .with_confidence(0.95)
                .with_percentage(85.5)
        );
        assert_eq!(points[1], DataPoint::new("20230115", 3.0));
        assert_eq!(points[2].confidence, Some(0.8));
        assert_eq!(points[2].percentage, None);
    }

    #[test]
    fn decodes_location_and_animal_rows() {
        let json = r#"{"status":"success","data":[{"location":"北京","count":15}]}"#;
        let points = decode_points(json, LabelField::Location).unwrap();
        assert_eq!(points, [DataPoint::new("北京", 15.0)]);

        let json = r#"{"status":"success","data":[{"animal":"狮子","count":25}]}"#;
        let points = decode_points(json, LabelField::Animal).unwrap();
        assert_eq!(points[0].label, "狮子");
    }

    #[test]
    fn empty_data_is_not_an_error() {
        let json = r#"{"status":"success","data":[]}"#;
        assert!(decode_points(json, LabelField::Date).unwrap().is_empty());
    }

    #[test]
    fn error_status_is_reported() {
        let json = r#"{"status":"error","message":"db offline"}"#;
        let err = decode_points(json, LabelField::Date).unwrap_err();
        match err {
            FeedError::Status { status, message } => {
                assert_eq!(status, "error");
                assert_eq!(message.as_deref(), Some("db offline"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wrong_label_field_is_reported_with_its_row() {
        let err = decode_points(TIMESERIES, LabelField::Animal).unwrap_err();
        assert!(matches!(
            err,
            FeedError::MissingLabel {
                index: 0,
                field: LabelField::Animal
            }
        ));
        assert_eq!(err.to_string(), "record 0 has no `animal` label");
    }

    #[test]
    fn non_finite_counts_are_rejected() {
        let record = Record {
            date: Some("20230101".into()),
            location: None,
            animal: None,
            count: f64::NAN,
            confidence: None,
            percentage: None,
        };
        assert!(matches!(
            record.into_point(7, LabelField::Date),
            Err(FeedError::NonFiniteCount { index: 7 })
        ));
    }

    #[test]
    fn malformed_payloads_degrade_to_empty() {
        assert!(points_or_empty("not json", LabelField::Date).is_empty());
        assert!(points_or_empty(r#"{"data":[]}"#, LabelField::Date).is_empty());
        assert!(
            points_or_empty(r#"{"status":"success","data":[{"date":"x"}]}"#, LabelField::Date)
                .is_empty()
        );
        assert!(points_or_empty(TIMESERIES, LabelField::Location).is_empty());
        assert_eq!(points_or_empty(TIMESERIES, LabelField::Date).len(), 3);
    }

    #[test]
    fn json_errors_carry_the_parser_message() {
        let err = decode_points("[1, 2", LabelField::Date).unwrap_err();
        assert!(matches!(err, FeedError::Json(_)));
        assert!(err.to_string().starts_with("malformed payload: "));
    }
}
