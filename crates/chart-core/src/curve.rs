// File: crates/chart-core/src/curve.rs
// Summary: Monotone-in-x cubic interpolation (no overshoot between samples) as path commands.

use crate::geometry::Point;
use crate::scene::PathCmd;

/// Builds a smooth path through `pts` (already in pixel space, ascending x).
///
/// Tangents follow Steffen's method: each interior tangent is bounded by the
/// neighbouring secant slopes, so every segment stays inside the y-range of its
/// two endpoints. Segments whose endpoints share an x coordinate become straight
/// lines.
pub fn monotone_x_path(pts: &[Point]) -> Vec<PathCmd> {
    let n = pts.len();
    let mut cmds = Vec::with_capacity(n + 1);
    let Some(first) = pts.first() else { return cmds };
    cmds.push(PathCmd::MoveTo(*first));
    if n == 1 {
        return cmds;
    }
    if n == 2 {
        cmds.push(PathCmd::LineTo(pts[1]));
        return cmds;
    }

    let tangents = tangents(pts);
    for i in 0..n - 1 {
        let (p0, p1) = (pts[i], pts[i + 1]);
        let h = p1.x - p0.x;
        if h <= 0.0 {
            cmds.push(PathCmd::LineTo(p1));
            continue;
        }
        let dx = h / 3.0;
        cmds.push(PathCmd::CubicTo(
            Point::new(p0.x + dx, p0.y + dx * tangents[i]),
            Point::new(p1.x - dx, p1.y - dx * tangents[i + 1]),
            p1,
        ));
    }
    cmds
}

fn secant(p0: Point, p1: Point) -> Option<f64> {
    let h = p1.x - p0.x;
    (h > 0.0).then(|| (p1.y - p0.y) / h)
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

fn tangents(pts: &[Point]) -> Vec<f64> {
    let n = pts.len();
    let mut t = vec![0.0; n];

    for i in 1..n - 1 {
        let (Some(s0), Some(s1)) = (secant(pts[i - 1], pts[i]), secant(pts[i], pts[i + 1])) else {
            continue;
        };
        let h0 = pts[i].x - pts[i - 1].x;
        let h1 = pts[i + 1].x - pts[i].x;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let m = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        t[i] = if m.is_finite() { m } else { 0.0 };
    }

    // One-sided end tangents: mirror the neighbour against the end secant.
    let end = |a: Point, b: Point, inner: f64| match secant(a, b) {
        Some(s) => (3.0 * s - inner) / 2.0,
        None => inner,
    };
    t[0] = end(pts[0], pts[1], t[1]);
    t[n - 1] = end(pts[n - 2], pts[n - 1], t[n - 2]);
    t
}
