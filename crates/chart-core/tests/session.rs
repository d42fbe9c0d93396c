// File: crates/chart-core/tests/session.rs
// Purpose: Session snapshots serialize with camelCase keys and restore file metadata and chart options.

mod common;

use chart_core::{AxisConfig, AxisKind, AxisPatch, ChartOptions, LineStyle, PointStyle, Rgba, SessionSnapshot};
use common::table;
use serde_json::{json, Value};

#[test]
fn snapshot_json_uses_camel_case_keys() {
    let mut file = table("f", &["t", "v"], &[&["0", "1"]]);
    file.set_line_style("v", LineStyle::Dashed);
    let snap = SessionSnapshot::capture(&[file], &ChartOptions::default());
    let v: Value = serde_json::to_value(&snap).unwrap();

    assert_eq!(v["chartOptions"]["title"], "CSV Visualization");
    assert_eq!(v["chartOptions"]["showLegend"], true);
    assert_eq!(v["chartOptions"]["axisConfig"]["x"]["autoScale"], true);
    assert!(v["chartOptions"]["axisConfig"]["x"].get("min").is_none());
    let f = &v["files"][0];
    assert_eq!(f["selected"], json!({ "xAxis": "t", "yAxes": ["v"] }));
    assert_eq!(f["columnStyles"]["v"]["lineStyle"], "dashed");
    assert_eq!(f["columnStyles"]["v"]["color"], "#0d9488");
    assert!(f.get("rows").is_none(), "row data is not persisted");
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut file = table("f", &["t", "a", "b"], &[&["0", "1", "2"]]);
    file.set_point_style("b", PointStyle::Square);
    file.set_color("a", Rgba::rgb(0x12, 0x34, 0x56));
    let mut options = ChartOptions::default();
    options.show_grid = false;
    options.update_axis(
        AxisKind::Y,
        &AxisPatch { title: Some("Load".into()), min: Some(Some(0.0)), max: Some(Some(5.0)), auto_scale: Some(false) },
    );

    let snap = SessionSnapshot::capture(&[file.clone()], &options);
    let text = serde_json::to_string_pretty(&snap).unwrap();
    let back: SessionSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap);

    let (files, restored) = back.restore();
    assert_eq!(restored, options);
    assert_eq!(restored.axis(AxisKind::Y), &AxisConfig::manual("Load", 0.0, 5.0));
    assert_eq!(files[0].selection, file.selection);
    assert_eq!(files[0].styles, file.styles);
    assert!(files[0].rows.is_empty());
}

#[test]
fn missing_sections_default() {
    let snap: SessionSnapshot = serde_json::from_str("{}").unwrap();
    assert!(snap.files.is_empty());
    assert_eq!(snap.chart_options, ChartOptions::default());
    assert!(snap.file_named("a.csv").is_none());
}

#[test]
fn invalid_color_is_rejected() {
    let bad = r##"{"color":"#zzzzzz","lineStyle":"solid","pointStyle":"circle","showPoints":true,"showLine":true}"##;
    assert!(serde_json::from_str::<chart_core::ColumnStyle>(bad).is_err());
    assert_eq!("#FF8000".parse::<Rgba>().unwrap(), Rgba::rgb(255, 128, 0));
    assert_eq!(Rgba::rgb(255, 128, 0).to_hex(), "#ff8000");
}

#[test]
fn axis_patch_can_clear_bounds() {
    let mut options = ChartOptions::default();
    options.axis_config.x = AxisConfig::manual("X", 1.0, 2.0);
    options.update_axis(AxisKind::X, &AxisPatch { min: Some(None), ..AxisPatch::default() });
    assert_eq!(options.axis(AxisKind::X).min, None);
    assert_eq!(options.axis(AxisKind::X).max, Some(2.0));
    assert_eq!(options.axis(AxisKind::X).manual_bounds(), None);
}
