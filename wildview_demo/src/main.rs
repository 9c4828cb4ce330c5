// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `wildview_axis`.
//!
//! Decodes a sample time-series payload, plans its category axis for three
//! viewport widths and prints the monthly buckets. Set `RUST_LOG=debug` to see
//! the decoding and planning traces.

use tracing::info;
use tracing_subscriber::EnvFilter;
use wildview_axis::{
    AxisPlan, AxisPlanner, FixedWidthMeasurer, GroupKey, LabelFormat, LabelKind, group_by,
};
use wildview_feed::{LabelField, SourceFallback, points_or_empty};

const WIDTHS: [(&str, f64); 3] = [("phone", 375.0), ("tablet", 800.0), ("desktop", 1440.0)];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mirrors = SourceFallback::new(["/libs/echarts.min.js", "/libs/echarts.backup.js"]);
    match mirrors.load(|src| {
        if src.contains("backup") {
            Ok("echarts 5.4.3")
        } else {
            Err("not found")
        }
    }) {
        Ok(loaded) => println!("chart bundle: {} from {}", loaded.value, loaded.source),
        Err(err) => println!("chart bundle unavailable: {err}"),
    }

    let payload = sample_payload(45);
    let points = points_or_empty(&payload, LabelField::Date);
    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    info!(points = points.len(), "decoded sample payload");

    let planner = AxisPlanner::default();
    for (name, width) in WIDTHS {
        let plan = planner.plan(&points, width);
        print_plan(name, width, &plan, &labels);
    }

    let species = [
        "东北虎", "东北豹", "梅花鹿", "亚洲黑熊", "野猪", "狍子", "紫貂", "猞猁", "赤狐", "黄喉貂",
        "原麝", "东北林蛙",
    ];
    let plan = planner.plan_labels(&species, 375.0, LabelFormat::Kind(LabelKind::Animal));
    print_plan("species/phone", 375.0, &plan, &species);

    println!("monthly buckets:");
    for group in group_by(&points, GroupKey::Month) {
        println!(
            "  {}: count={} confidence={:.2} days={}",
            group.bucket_key,
            group.aggregated_count,
            group.avg_confidence,
            group.members.len()
        );
    }

    let empty = points_or_empty(r#"{"status":"error","message":"db offline"}"#, LabelField::Date);
    println!("error payload -> {} points", empty.len());
}

fn print_plan<S: AsRef<str>>(name: &str, width: f64, plan: &AxisPlan, labels: &[S]) {
    let d = &plan.directive;
    println!(
        "{name} ({width}px): {:?}, interval={}, rotate={}°, font={}px, band={:.1}px",
        plan.strategy,
        d.interval,
        d.rotation.degrees(),
        d.label_style.font_size,
        d.label_band_height(labels, &FixedWidthMeasurer::new(d.label_style.font_size)),
    );
    if let Some(window) = d.zoom {
        println!("  zoom: {:.1}% .. {:.1}%", window.start_pct, window.end_pct);
    }
    let ticks: Vec<String> = plan
        .tick_labels(labels)
        .into_iter()
        .flatten()
        .take(6)
        .collect();
    println!("  ticks: {}", ticks.join(" | "));
}

fn sample_payload(days: usize) -> String {
    let rows: Vec<String> = (0..days)
        .map(|i| {
            let month = 1 + i / 28;
            let day = 1 + i % 28;
            format!(
                r#"{{"date":"2023{month:02}{day:02}","count":{},"confidence":{:.2}}}"#,
                (i * 7) % 11,
                0.7 + (i % 3) as f64 * 0.1
            )
        })
        .collect();
    format!(r#"{{"status":"success","data":[{}]}}"#, rows.join(","))
}
