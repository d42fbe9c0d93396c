// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the render pipeline (grid, axes, series, markers, legend) into a Scene.

use crate::axis::{AxisKind, ChartOptions};
use crate::curve::monotone_x_path;
use crate::dataset::build_datasets;
use crate::geometry::{Point, RectF};
use crate::grid::{format_tick, DEFAULT_TICK_COUNT};
use crate::marker::marker_shape;
use crate::scale::{resolve_axis, LinearScale};
use crate::scene::{Layer, Scene, SceneItem, Shape, Stroke, TextAnchor, TextItem};
use crate::series::{ChartData, DataPoint, Series};
use crate::source::SourceFile;
use crate::theme::Theme;
use crate::types::{
    estimate_text_width, Insets, AXIS_TITLE_FONT_SIZE, HEIGHT, LABEL_FONT_SIZE, TITLE_FONT_SIZE, WIDTH,
};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const LINE_WIDTH: f64 = 2.0;
const LEGEND_OFFSET: f64 = 10.0;
const LEGEND_ROW_HEIGHT: f64 = 25.0;
const LEGEND_SWATCH: f64 = 15.0;
const LEGEND_TEXT_OFFSET: f64 = 24.0;
const RIGHT_INSET_NO_LEGEND: f64 = 24.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
    /// Emit text items (tick labels, titles, legend labels). Off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, theme: Theme::light(), draw_labels: true }
    }
}

/// Plot rectangle and resolved scales used for one render. Pointer handling
/// maps pixels back to data through the same scales.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    pub insets: Insets,
    pub plot: RectF,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotFrame {
    /// Lays out margins for `options` and resolves both axes over `data`.
    pub fn resolve(data: &ChartData, options: &ChartOptions, render: &RenderOptions) -> Self {
        let insets = compute_insets(data, options);
        let (w, h) = (render.width as f64, render.height as f64);
        let left = insets.left.min(w);
        let top = insets.top.min(h);
        let right = (w - insets.right).max(left + 1.0);
        let bottom = (h - insets.bottom).max(top + 1.0);
        let plot = RectF::from_ltrb(left, top, right, bottom);

        let x = resolve_axis(data, &options.axis_config.x, AxisKind::X, plot);
        let y = resolve_axis(data, &options.axis_config.y, AxisKind::Y, plot);
        Self { insets, plot, x, y }
    }

    /// Data point -> pixel position.
    pub fn project(&self, p: DataPoint) -> Point {
        Point::new(self.x.to_range(p.x), self.y.to_range(p.y))
    }

    /// Pixel position -> data point.
    pub fn unproject(&self, px: Point) -> DataPoint {
        DataPoint::new(self.x.to_domain(px.x), self.y.to_domain(px.y))
    }
}

fn compute_insets(data: &ChartData, options: &ChartOptions) -> Insets {
    let mut insets = Insets::default();
    insets.right = if options.show_legend {
        let widest = data
            .series()
            .iter()
            .map(|s| estimate_text_width(s.label(), LABEL_FONT_SIZE))
            .fold(0.0, f64::max);
        insets.right.max(LEGEND_OFFSET + LEGEND_TEXT_OFFSET + widest + 8.0)
    } else {
        RIGHT_INSET_NO_LEGEND
    };
    insets
}

/// Clears `scene` and draws `data` with `options` at the default surface size.
pub fn render(scene: &mut Scene, data: &ChartData, options: &ChartOptions) {
    render_frame(scene, data, options, &RenderOptions::default());
}

/// Clears `scene`, draws everything back to front and returns the frame used.
///
/// Output depends only on the arguments: repeated calls with the same inputs
/// produce identical scenes.
pub fn render_frame(scene: &mut Scene, data: &ChartData, options: &ChartOptions, render: &RenderOptions) -> PlotFrame {
    scene.clear();
    scene.width = render.width as f64;
    scene.height = render.height as f64;
    scene.background = Some(render.theme.background);

    let frame = PlotFrame::resolve(data, options, render);
    let theme = &render.theme;

    if render.draw_labels && !options.title.is_empty() {
        draw_title(scene, &frame, &options.title, theme);
    }
    if options.show_grid {
        draw_grid(scene, &frame, theme);
    }
    draw_axes(scene, &frame, options, render);
    for s in data.series().iter().filter(|s| s.style().show_line) {
        draw_series_line(scene, &frame, s);
    }
    for s in data.series().iter().filter(|s| s.style().draws_markers()) {
        draw_series_markers(scene, &frame, s);
    }
    if options.show_legend {
        draw_legend(scene, &frame, data, render);
    }

    log::debug!(
        "rendered {} series ({} points) into {} items",
        data.len(),
        data.total_points(),
        scene.items().len()
    );
    frame
}

/// A built chart: current data plus the options it is drawn with.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub data: ChartData,
    pub options: ChartOptions,
}

impl Chart {
    pub fn new(data: ChartData, options: ChartOptions) -> Self {
        Self { data, options }
    }

    /// Rebuilds datasets from `files`; the previous data is replaced, never patched.
    pub fn from_files(files: &[SourceFile], options: ChartOptions) -> Self {
        Self { data: build_datasets(files), options }
    }

    pub fn refresh(&mut self, files: &[SourceFile]) {
        self.data = build_datasets(files);
    }

    pub fn render(&self, scene: &mut Scene, opts: &RenderOptions) -> PlotFrame {
        render_frame(scene, &self.data, &self.options, opts)
    }

    /// Renders into a fresh scene sized per `opts`.
    pub fn to_scene(&self, opts: &RenderOptions) -> (Scene, PlotFrame) {
        let mut scene = Scene::new(opts.width as f64, opts.height as f64);
        let frame = self.render(&mut scene, opts);
        (scene, frame)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_title(scene: &mut Scene, frame: &PlotFrame, title: &str, theme: &Theme) {
    let item = TextItem {
        pos: Point::new(frame.plot.center_x(), frame.plot.top * 0.5 + TITLE_FONT_SIZE * 0.35),
        content: title.to_string(),
        font_size: TITLE_FONT_SIZE,
        anchor: TextAnchor::Middle,
        rotation: 0.0,
    };
    scene.text(Layer::Title, item, theme.title);
}

fn draw_grid(scene: &mut Scene, frame: &PlotFrame, theme: &Theme) {
    let stroke = Stroke { color: theme.grid, width: 1.0, opacity: theme.grid_opacity, dash: None };
    let p = frame.plot;

    // verticals
    for t in frame.x.ticks(DEFAULT_TICK_COUNT) {
        let x = frame.x.to_range(t);
        scene.line(Layer::Grid, Point::new(x, p.top), Point::new(x, p.bottom), stroke.clone());
    }
    // horizontals
    for t in frame.y.ticks(DEFAULT_TICK_COUNT) {
        let y = frame.y.to_range(t);
        scene.line(Layer::Grid, Point::new(p.left, y), Point::new(p.right, y), stroke.clone());
    }
}

fn draw_axes(scene: &mut Scene, frame: &PlotFrame, options: &ChartOptions, render: &RenderOptions) {
    let theme = &render.theme;
    let p = frame.plot;
    let axis = Stroke::solid(theme.axis_line, 1.0);
    let tick = Stroke::solid(theme.tick, 1.0);

    scene.line(Layer::Axis, Point::new(p.left, p.bottom), Point::new(p.right, p.bottom), axis.clone());
    scene.line(Layer::Axis, Point::new(p.left, p.top), Point::new(p.left, p.bottom), axis);

    let x_precision = frame.x.tick_precision(DEFAULT_TICK_COUNT);
    for t in frame.x.ticks(DEFAULT_TICK_COUNT) {
        let x = frame.x.to_range(t);
        scene.line(Layer::Axis, Point::new(x, p.bottom), Point::new(x, p.bottom + TICK_SIZE), tick.clone());
        if render.draw_labels {
            let label = TextItem {
                pos: Point::new(x, p.bottom + TICK_SIZE + TICK_PADDING + LABEL_FONT_SIZE * 0.8),
                content: format_tick(t, x_precision),
                font_size: LABEL_FONT_SIZE,
                anchor: TextAnchor::Middle,
                rotation: 0.0,
            };
            scene.text(Layer::Axis, label, theme.axis_label);
        }
    }

    let y_precision = frame.y.tick_precision(DEFAULT_TICK_COUNT);
    for t in frame.y.ticks(DEFAULT_TICK_COUNT) {
        let y = frame.y.to_range(t);
        scene.line(Layer::Axis, Point::new(p.left - TICK_SIZE, y), Point::new(p.left, y), tick.clone());
        if render.draw_labels {
            let label = TextItem {
                pos: Point::new(p.left - TICK_SIZE - TICK_PADDING, y + LABEL_FONT_SIZE * 0.35),
                content: format_tick(t, y_precision),
                font_size: LABEL_FONT_SIZE,
                anchor: TextAnchor::End,
                rotation: 0.0,
            };
            scene.text(Layer::Axis, label, theme.axis_label);
        }
    }

    if !render.draw_labels {
        return;
    }
    let x_title = &options.axis_config.x.title;
    if !x_title.is_empty() {
        let item = TextItem {
            pos: Point::new(p.center_x(), p.bottom + frame.insets.bottom - 10.0),
            content: x_title.clone(),
            font_size: AXIS_TITLE_FONT_SIZE,
            anchor: TextAnchor::Middle,
            rotation: 0.0,
        };
        scene.text(Layer::Axis, item, theme.axis_label);
    }
    let y_title = &options.axis_config.y.title;
    if !y_title.is_empty() {
        let item = TextItem {
            pos: Point::new(p.left - frame.insets.left + 20.0, p.center_y()),
            content: y_title.clone(),
            font_size: AXIS_TITLE_FONT_SIZE,
            anchor: TextAnchor::Middle,
            rotation: -90.0,
        };
        scene.text(Layer::Axis, item, theme.axis_label);
    }
}

fn draw_series_line(scene: &mut Scene, frame: &PlotFrame, series: &Series) {
    let style = series.style();
    let pts: Vec<Point> = series.points().iter().map(|p| frame.project(*p)).collect();
    if pts.len() < 2 {
        return;
    }
    let stroke = Stroke { color: style.color, width: LINE_WIDTH, opacity: 1.0, dash: style.line_style.dash_pattern() };
    scene.push(SceneItem {
        layer: Layer::Series,
        tag: Some(series.id().key()),
        shape: Shape::Path(monotone_x_path(&pts)),
        fill: None,
        stroke: Some(stroke),
    });
}

fn draw_series_markers(scene: &mut Scene, frame: &PlotFrame, series: &Series) {
    let style = series.style();
    let key = series.id().key();
    for p in series.points() {
        if let Some(shape) = marker_shape(style.point_style, frame.project(*p), 1.0) {
            scene.push(SceneItem { layer: Layer::Markers, tag: Some(key.clone()), shape, fill: Some(style.color), stroke: None });
        }
    }
}

fn draw_legend(scene: &mut Scene, frame: &PlotFrame, data: &ChartData, render: &RenderOptions) {
    let x0 = frame.plot.right + LEGEND_OFFSET;
    for (i, s) in data.series().iter().enumerate() {
        let y0 = frame.plot.top + i as f64 * LEGEND_ROW_HEIGHT;
        scene.push(SceneItem {
            layer: Layer::Legend,
            tag: Some(s.id().key()),
            shape: Shape::Rect(RectF::from_ltwh(x0, y0, LEGEND_SWATCH, LEGEND_SWATCH)),
            fill: Some(s.style().color),
            stroke: None,
        });
        if render.draw_labels {
            let item = TextItem {
                pos: Point::new(x0 + LEGEND_TEXT_OFFSET, y0 + 12.0),
                content: s.label().to_string(),
                font_size: LABEL_FONT_SIZE,
                anchor: TextAnchor::Start,
                rotation: 0.0,
            };
            scene.text(Layer::Legend, item, render.theme.legend_text);
        }
    }
}
