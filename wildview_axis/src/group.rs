// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label grouping.
//!
//! Daily series get long quickly; merging days into months keeps the axis
//! readable. Grouping is a total partition: every input point lands in exactly
//! one [`LabelGroup`], and the group counts sum to the input counts.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::point::DataPoint;

/// How labels are merged into buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// `YYYYMMDD` labels are merged by `YYYYMM`; other labels stay separate.
    Month,
    /// Quarter labels are already per quarter; labels are kept as-is.
    Quarter,
    /// No merging across distinct labels.
    #[default]
    None,
}

impl GroupKey {
    /// Returns the bucket a label belongs to.
    pub fn bucket_key(self, label: &str) -> &str {
        match self {
            Self::Month => month_prefix(label).unwrap_or(label),
            Self::Quarter | Self::None => label,
        }
    }
}

fn month_prefix(label: &str) -> Option<&str> {
    if label.chars().count() != 8 {
        return None;
    }
    let (cut, _) = label.char_indices().nth(6)?;
    Some(&label[..cut])
}

/// A bucket of points sharing a coarser label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelGroup {
    /// The bucket label (e.g. `202301` for January 2023).
    pub bucket_key: String,
    /// Sum of member values.
    pub aggregated_count: f64,
    /// Mean member confidence; absent confidences count as `0`.
    pub avg_confidence: f64,
    /// Mean member percentage; absent percentages count as `0`.
    pub avg_percentage: f64,
    /// Member points, in input order.
    pub members: Vec<DataPoint>,
}

impl LabelGroup {
    fn empty(bucket_key: &str) -> Self {
        Self {
            bucket_key: String::from(bucket_key),
            aggregated_count: 0.0,
            avg_confidence: 0.0,
            avg_percentage: 0.0,
            members: Vec::new(),
        }
    }

    fn push(&mut self, point: &DataPoint) {
        self.aggregated_count += point.value;
        // Accumulated as sums here; `finish` turns them into means.
        self.avg_confidence += point.confidence.unwrap_or(0.0);
        self.avg_percentage += point.percentage.unwrap_or(0.0);
        self.members.push(point.clone());
    }

    fn finish(&mut self) {
        let n = self.members.len().max(1) as f64;
        self.avg_confidence /= n;
        self.avg_percentage /= n;
    }
}

/// Groups `points` into buckets, in order of first appearance.
pub fn group_by(points: &[DataPoint], key: GroupKey) -> Vec<LabelGroup> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<LabelGroup> = Vec::new();

    for point in points {
        let bucket = key.bucket_key(&point.label);
        let slot = *slots.entry(bucket).or_insert_with(|| {
            groups.push(LabelGroup::empty(bucket));
            groups.len() - 1
        });
        groups[slot].push(point);
    }

    for group in &mut groups {
        group.finish();
    }
    groups
}
