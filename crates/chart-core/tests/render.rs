// File: crates/chart-core/tests/render.rs
// Purpose: Scene-level checks of the render pipeline: layers, toggles, legend order, dashes, markers and idempotency.

mod common;

use chart_core::scene::{PathCmd, Stroke};
use chart_core::{
    build_datasets, render, AxisConfig, Chart, ChartData, ChartOptions, Layer, LineStyle, PointStyle, RenderOptions,
    Scene, Shape,
};
use common::xy;

fn sample() -> ChartData {
    let mut a = xy("a", &[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
    a.set_line_style("a", LineStyle::Dashed);
    let mut b = xy("b", &[(0.0, 2.0), (2.0, 2.0)]);
    b.set_point_style("b", PointStyle::Triangle);
    build_datasets(&[a, b])
}

fn rendered(data: &ChartData, options: &ChartOptions) -> Scene {
    let mut scene = Scene::new(0.0, 0.0);
    render(&mut scene, data, options);
    scene
}

#[test]
fn every_layer_is_populated_by_default() {
    let scene = rendered(&sample(), &ChartOptions::default());
    for layer in [Layer::Title, Layer::Grid, Layer::Axis, Layer::Series, Layer::Markers, Layer::Legend] {
        assert!(scene.count(layer) > 0, "{layer:?} is empty");
    }
    assert_eq!(scene.count(Layer::Overlay), 0);
    assert_eq!((scene.width, scene.height), (800.0, 500.0));
    assert_eq!(scene.texts(Layer::Title), vec!["CSV Visualization"]);
}

#[test]
fn grid_toggle_removes_grid_only() {
    let data = sample();
    let mut options = ChartOptions::default();
    options.show_grid = false;
    let scene = rendered(&data, &options);
    assert_eq!(scene.count(Layer::Grid), 0);
    assert!(scene.count(Layer::Axis) > 0);
    assert_eq!(scene.count(Layer::Series), 2);
}

#[test]
fn legend_toggle_removes_legend() {
    let mut options = ChartOptions::default();
    options.show_legend = false;
    let scene = rendered(&sample(), &options);
    assert_eq!(scene.count(Layer::Legend), 0);
}

#[test]
fn legend_follows_series_order() {
    let scene = rendered(&sample(), &ChartOptions::default());
    assert_eq!(scene.texts(Layer::Legend), vec!["a", "b"]);
    let swatches: Vec<f64> = scene
        .layer(Layer::Legend)
        .filter_map(|i| match &i.shape {
            Shape::Rect(r) => Some(r.top),
            _ => None,
        })
        .collect();
    assert_eq!(swatches.len(), 2);
    assert_eq!(swatches[1] - swatches[0], 25.0);
}

#[test]
fn line_style_maps_to_dash_pattern() {
    let data = sample();
    let scene = rendered(&data, &ChartOptions::default());
    let dash_of = |key: String| -> Option<[f64; 2]> {
        scene
            .tagged(&key)
            .find(|i| i.layer == Layer::Series)
            .and_then(|i| i.stroke.as_ref())
            .and_then(|s: &Stroke| s.dash)
    };
    assert_eq!(dash_of(data.series()[0].id().key()), Some([5.0, 5.0]));
    assert_eq!(dash_of(data.series()[1].id().key()), None);
}

#[test]
fn series_lines_start_at_first_point() {
    let data = sample();
    let (scene, frame) = Chart::new(data.clone(), ChartOptions::default()).to_scene(&RenderOptions::default());
    let first = data.series()[0].points()[0];
    let path = scene
        .layer(Layer::Series)
        .find_map(|i| match &i.shape {
            Shape::Path(cmds) => Some(cmds.clone()),
            _ => None,
        })
        .expect("series path");
    assert_eq!(path[0], PathCmd::MoveTo(frame.project(first)));
}

#[test]
fn one_marker_per_point_with_matching_shape() {
    let data = sample();
    let scene = rendered(&data, &ChartOptions::default());
    assert_eq!(scene.count(Layer::Markers), data.total_points());
    let b_key = data.series()[1].id().key();
    assert!(scene
        .tagged(&b_key)
        .filter(|i| i.layer == Layer::Markers)
        .all(|i| matches!(i.shape, Shape::Polygon(ref p) if p.len() == 3)));
}

#[test]
fn hidden_points_and_lines_are_not_drawn() {
    let mut a = xy("a", &[(0.0, 0.0), (1.0, 1.0)]);
    a.set_visibility("a", false, false);
    let mut b = xy("b", &[(0.0, 1.0), (1.0, 2.0)]);
    b.set_point_style("b", PointStyle::None);
    let data = build_datasets(&[a, b]);
    let scene = rendered(&data, &ChartOptions::default());
    assert_eq!(scene.count(Layer::Series), 1);
    assert_eq!(scene.count(Layer::Markers), 0);
    // legend still lists hidden series
    assert_eq!(scene.texts(Layer::Legend).len(), 2);
}

#[test]
fn single_point_series_draws_marker_but_no_line() {
    let data = build_datasets(&[xy("a", &[(1.0, 1.0)])]);
    let scene = rendered(&data, &ChartOptions::default());
    assert_eq!(scene.count(Layer::Series), 0);
    assert_eq!(scene.count(Layer::Markers), 1);
}

#[test]
fn empty_data_still_draws_frame() {
    let scene = rendered(&ChartData::default(), &ChartOptions::default());
    assert!(scene.count(Layer::Axis) > 0);
    assert_eq!(scene.count(Layer::Series), 0);
    assert_eq!(scene.count(Layer::Legend), 0);
}

#[test]
fn out_of_range_points_are_drawn_without_clipping() {
    let data = build_datasets(&[xy("a", &[(0.0, 0.0), (20.0, 20.0)])]);
    let mut options = ChartOptions::default();
    options.axis_config.x = AxisConfig::manual("X", 0.0, 10.0);
    let (scene, frame) = Chart::new(data, options).to_scene(&RenderOptions::default());
    let markers: Vec<_> = scene.layer(Layer::Markers).collect();
    assert_eq!(markers.len(), 2);
    match &markers[1].shape {
        Shape::Circle { center, .. } => assert!(center.x > frame.plot.right),
        other => panic!("expected circle marker, got {other:?}"),
    }
}

#[test]
fn rendering_twice_gives_identical_scene() {
    let data = sample();
    let options = ChartOptions::default();
    let mut scene = Scene::new(0.0, 0.0);
    render(&mut scene, &data, &options);
    let first = scene.clone();
    render(&mut scene, &data, &options);
    assert_eq!(scene, first);
}

#[test]
fn labels_can_be_disabled() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (scene, _) = Chart::new(sample(), ChartOptions::default()).to_scene(&opts);
    assert!(scene.items().iter().all(|i| !matches!(i.shape, Shape::Text(_))));
    assert_eq!(scene.count(Layer::Legend), 2);
}

#[test]
fn axis_titles_follow_options() {
    let mut options = ChartOptions::default();
    options.axis_config.x.title = "Time".into();
    options.axis_config.y.title = "Temp".into();
    let scene = rendered(&sample(), &options);
    let texts = scene.texts(Layer::Axis);
    assert!(texts.contains(&"Time"));
    assert!(texts.contains(&"Temp"));
}

#[test]
fn monotone_curve_does_not_overshoot() {
    use chart_core::curve::monotone_x_path;
    use chart_core::geometry::Point;

    let pts = [Point::new(0.0, 0.0), Point::new(1.0, 10.0), Point::new(2.0, 10.0), Point::new(3.0, 20.0)];
    let path = monotone_x_path(&pts);
    assert_eq!(path.len(), pts.len());
    for cmd in &path[1..] {
        if let PathCmd::CubicTo(c1, c2, end) = cmd {
            for c in [c1, c2, end] {
                assert!((0.0..=20.0).contains(&c.y), "control point {c:?} overshoots");
            }
        } else {
            panic!("expected cubic segments, got {cmd:?}");
        }
    }
    // flat segment stays flat
    if let PathCmd::CubicTo(c1, c2, _) = path[2] {
        assert_eq!((c1.y, c2.y), (10.0, 10.0));
    }
}
