// File: crates/chart-core/src/marker.rs
// Summary: Point marker shapes sized by area (circle, square, apex-up triangle).

use std::f64::consts::PI;

use crate::geometry::{Point, RectF};
use crate::scene::Shape;
use crate::style::PointStyle;

/// Marker shape for `style` centered at `center`, scaled by `scale` (1.0 = normal).
/// Returns `None` for `PointStyle::None`.
pub fn marker_shape(style: PointStyle, center: Point, scale: f64) -> Option<Shape> {
    let area = style.marker_area()? * scale * scale;
    let shape = match style {
        PointStyle::Circle => Shape::Circle { center, radius: (area / PI).sqrt() },
        PointStyle::Square => {
            let half = area.sqrt() * 0.5;
            Shape::Rect(RectF::from_ltrb(center.x - half, center.y - half, center.x + half, center.y + half))
        }
        PointStyle::Triangle => {
            let sqrt3 = 3f64.sqrt();
            // Equilateral triangle of the given area with its centroid at `center`.
            let y = -(area / (sqrt3 * 3.0)).sqrt();
            Shape::Polygon(vec![
                Point::new(center.x, center.y + y * 2.0),
                Point::new(center.x - sqrt3 * y, center.y - y),
                Point::new(center.x + sqrt3 * y, center.y - y),
            ])
        }
        PointStyle::None => return None,
    };
    Some(shape)
}
