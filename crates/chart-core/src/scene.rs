// File: crates/chart-core/src/scene.rs
// Summary: Retained vector scene (the render surface): ordered, layered drawing items.
// Notes:
// - Items are kept in paint order (back to front). Backends (SVG writer, Skia) replay
//   them verbatim, so every export shows exactly what was drawn.

use crate::geometry::{Point, RectF};
use crate::style::Rgba;

/// Paint layer of an item. Items are appended in layer order by the renderer;
/// the tag makes layers easy to inspect and lets overlays be cleared on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Title,
    Grid,
    Axis,
    Series,
    Markers,
    Legend,
    Overlay,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub pos: Point,
    pub content: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
    /// Clockwise rotation in degrees around `pos`.
    pub rotation: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point },
    Path(Vec<PathCmd>),
    Rect(RectF),
    Circle { center: Point, radius: f64 },
    Polygon(Vec<Point>),
    Text(TextItem),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    pub opacity: f64,
    /// On/off dash intervals in pixels; `None` draws a continuous stroke.
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    pub fn solid(color: Rgba, width: f64) -> Self {
        Self { color, width, opacity: 1.0, dash: None }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneItem {
    pub layer: Layer,
    /// Optional identity, e.g. the series key for series paths and markers.
    pub tag: Option<String>,
    pub shape: Shape,
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

/// Drawing surface for the render pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Option<Rgba>,
    items: Vec<SceneItem>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, background: None, items: Vec::new() }
    }

    /// Drops every item; size and background are reset by the next render.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, item: SceneItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &SceneItem> {
        self.items.iter().filter(move |i| i.layer == layer)
    }

    pub fn count(&self, layer: Layer) -> usize {
        self.layer(layer).count()
    }

    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a SceneItem> {
        self.items.iter().filter(move |i| i.tag.as_deref() == Some(tag))
    }

    pub fn retain(&mut self, keep: impl FnMut(&SceneItem) -> bool) {
        self.items.retain(keep);
    }

    /// Text content of every text item in `layer`, in paint order.
    pub fn texts(&self, layer: Layer) -> Vec<&str> {
        self.layer(layer)
            .filter_map(|i| match &i.shape {
                Shape::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn line(&mut self, layer: Layer, from: Point, to: Point, stroke: Stroke) {
        self.push(SceneItem { layer, tag: None, shape: Shape::Line { from, to }, fill: None, stroke: Some(stroke) });
    }

    pub(crate) fn text(&mut self, layer: Layer, item: TextItem, color: Rgba) {
        self.push(SceneItem { layer, tag: None, shape: Shape::Text(item), fill: Some(color), stroke: None });
    }
}
