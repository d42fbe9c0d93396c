// File: crates/chart-core/src/pointer.rs
// Summary: Pointer -> tooltip plumbing and hover highlight overlay.

use crate::chart::PlotFrame;
use crate::geometry::Point;
use crate::marker::marker_shape;
use crate::proximity::{query_nearest, Nearest, DEFAULT_THRESHOLD_FRACTION};
use crate::scene::{Layer, Scene, SceneItem, Stroke};
use crate::series::{ChartData, DataPoint};
use crate::style::{PointStyle, Rgba};

/// Size multiplier for hovered markers.
pub const HIGHLIGHT_SCALE: f64 = 1.5;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub label: String,
    pub color: Rgba,
    pub value: f64,
    pub point: DataPoint,
}

/// Overlay content for one pointer position. Empty means "hide the tooltip".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    /// x of the closest hit; `None` when empty.
    pub x: Option<f64>,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn from_hits(hits: &[Nearest<'_>]) -> Self {
        let rows = hits
            .iter()
            .map(|h| TooltipRow {
                label: h.series.label().to_string(),
                color: h.series.style().color,
                value: h.point.y,
                point: h.point,
            })
            .collect();
        Self { x: hits.first().map(|h| h.point.x), rows }
    }

    /// Text lines: an `X:` header followed by one `label: value` line per row.
    pub fn lines(&self) -> Vec<String> {
        let Some(x) = self.x else { return Vec::new() };
        std::iter::once(format!("X: {x:.2}"))
            .chain(self.rows.iter().map(|r| format!("{}: {:.2}", r.label, r.value)))
            .collect()
    }
}

/// Answers pointer events for one rendered frame. Holds no state between
/// events; every call is an independent lookup.
#[derive(Clone, Copy, Debug)]
pub struct PointerProbe<'a> {
    frame: PlotFrame,
    data: &'a ChartData,
    threshold_fraction: f64,
}

impl<'a> PointerProbe<'a> {
    pub fn new(frame: PlotFrame, data: &'a ChartData) -> Self {
        Self { frame, data, threshold_fraction: DEFAULT_THRESHOLD_FRACTION }
    }

    pub fn with_threshold(mut self, fraction: f64) -> Self {
        self.threshold_fraction = fraction;
        self
    }

    /// Nearby points for a pixel position; empty outside the plot rectangle.
    pub fn hits(&self, px: f64, py: f64) -> Vec<Nearest<'a>> {
        if !self.frame.plot.contains(Point::new(px, py)) {
            return Vec::new();
        }
        let x = self.frame.x.to_domain(px);
        query_nearest(x, self.data, self.frame.x.domain_width(), self.threshold_fraction)
    }

    pub fn on_pointer_move(&self, px: f64, py: f64) -> Tooltip {
        Tooltip::from_hits(&self.hits(px, py))
    }

    pub fn on_pointer_leave(&self) -> Tooltip {
        Tooltip::empty()
    }
}

/// Replaces the overlay layer with enlarged markers at each hit point.
/// Series without a marker style get a circle so the hovered point is visible.
pub fn highlight(scene: &mut Scene, frame: &PlotFrame, hits: &[Nearest<'_>], outline: Rgba) {
    clear_overlay(scene);
    for h in hits {
        let style = h.series.style();
        let point_style = match style.point_style {
            PointStyle::None => PointStyle::Circle,
            other => other,
        };
        if let Some(shape) = marker_shape(point_style, frame.project(h.point), HIGHLIGHT_SCALE) {
            scene.push(SceneItem {
                layer: Layer::Overlay,
                tag: Some(h.series.id().key()),
                shape,
                fill: Some(style.color),
                stroke: Some(Stroke::solid(outline, 1.0)),
            });
        }
    }
}

/// Removes hover overlay items, leaving the rendered chart untouched.
pub fn clear_overlay(scene: &mut Scene) {
    scene.retain(|i| i.layer != Layer::Overlay);
}
