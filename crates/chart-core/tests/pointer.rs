// File: crates/chart-core/tests/pointer.rs
// Purpose: Pointer probing against a rendered frame: tooltip content, plot-rect bounds and hover overlay.

mod common;

use chart_core::{
    build_datasets, clear_overlay, highlight, Chart, ChartOptions, Layer, PointerProbe, RenderOptions, Shape, Tooltip,
};
use common::xy;

fn chart() -> Chart {
    let data = build_datasets(&[
        xy("f1", &[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]),
        xy("f2", &[(0.0, 0.0), (1.0, 2.5), (2.0, 2.0)]),
    ]);
    Chart::new(data, ChartOptions::default())
}

#[test]
fn tooltip_lists_each_nearby_series() {
    let chart = chart();
    let (_, frame) = chart.to_scene(&RenderOptions::default());
    let probe = PointerProbe::new(frame, &chart.data);
    let tip = probe.on_pointer_move(frame.x.to_range(1.0), frame.plot.center_y());
    assert_eq!(tip.lines(), vec!["X: 1.00", "f1: 1.00", "f2: 2.50"]);
    assert_eq!(tip.rows[0].color, chart.data.series()[0].style().color);
}

#[test]
fn pointer_outside_plot_area_is_empty() {
    let chart = chart();
    let (_, frame) = chart.to_scene(&RenderOptions::default());
    let probe = PointerProbe::new(frame, &chart.data);
    assert!(probe.on_pointer_move(frame.plot.left - 5.0, frame.plot.center_y()).is_empty());
    assert!(probe.on_pointer_move(frame.plot.center_x(), frame.plot.bottom + 1.0).is_empty());
    assert!(probe.hits(frame.plot.right + 30.0, frame.plot.top).is_empty());
}

#[test]
fn pointer_leave_hides_tooltip() {
    let chart = chart();
    let (_, frame) = chart.to_scene(&RenderOptions::default());
    let probe = PointerProbe::new(frame, &chart.data);
    let leave = probe.on_pointer_leave();
    assert!(leave.is_empty());
    assert_eq!(leave, Tooltip::empty());
    assert!(leave.lines().is_empty());
}

#[test]
fn narrower_threshold_drops_distant_points() {
    let chart = chart();
    let (_, frame) = chart.to_scene(&RenderOptions::default());
    // 0.1 domain units away from x = 1.0; the domain is 2.2 wide
    let px = frame.x.to_range(1.1);
    let py = frame.plot.center_y();
    assert_eq!(PointerProbe::new(frame, &chart.data).hits(px, py).len(), 2);
    assert!(PointerProbe::new(frame, &chart.data).with_threshold(0.01).hits(px, py).is_empty());
}

#[test]
fn highlight_draws_enlarged_markers_and_clears() {
    let chart = chart();
    let (mut scene, frame) = chart.to_scene(&RenderOptions::default());
    let before = scene.clone();
    let probe = PointerProbe::new(frame, &chart.data);
    let hits = probe.hits(frame.x.to_range(2.0), frame.plot.center_y());
    assert_eq!(hits.len(), 2);

    highlight(&mut scene, &frame, &hits, RenderOptions::default().theme.highlight_outline);
    assert_eq!(scene.count(Layer::Overlay), 2);
    let normal_r = (60.0 / std::f64::consts::PI).sqrt();
    for item in scene.layer(Layer::Overlay) {
        match item.shape {
            Shape::Circle { radius, .. } => assert!((radius - normal_r * 1.5).abs() < 1e-9),
            ref other => panic!("expected circle, got {other:?}"),
        }
    }

    // a second highlight replaces rather than stacks
    highlight(&mut scene, &frame, &hits[..1], RenderOptions::default().theme.highlight_outline);
    assert_eq!(scene.count(Layer::Overlay), 1);

    clear_overlay(&mut scene);
    assert_eq!(scene, before);
}
