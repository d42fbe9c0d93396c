// File: crates/chart-core/src/svg.rs
// Summary: Standalone SVG export of a Scene (same coordinates and styling as on screen).

use std::fmt::Write as _;

use crate::scene::{PathCmd, Scene, SceneItem, Shape, Stroke, TextAnchor};
use crate::style::Rgba;
use crate::types::FONT_FAMILIES;

impl Scene {
    /// Serializes the scene, in paint order, as a self-contained SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(self.width),
            h = num(self.height)
        );
        if let Some(bg) = self.background {
            let _ = write!(out, r#"<rect x="0" y="0" width="{}" height="{}""#, num(self.width), num(self.height));
            write_paint(&mut out, "fill", bg, 1.0);
            out.push_str("/>\n");
        }
        for item in self.items() {
            write_item(&mut out, item);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_item(out: &mut String, item: &SceneItem) {
    match &item.shape {
        Shape::Line { from, to } => {
            let _ = write!(out, r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#, num(from.x), num(from.y), num(to.x), num(to.y));
        }
        Shape::Path(cmds) => {
            out.push_str(r#"<path d=""#);
            out.push_str(&path_data(cmds));
            out.push('"');
        }
        Shape::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                num(r.left),
                num(r.top),
                num(r.width()),
                num(r.height())
            );
        }
        Shape::Circle { center, radius } => {
            let _ = write!(out, r#"<circle cx="{}" cy="{}" r="{}""#, num(center.x), num(center.y), num(*radius));
        }
        Shape::Polygon(pts) => {
            let points: Vec<String> = pts.iter().map(|p| format!("{},{}", num(p.x), num(p.y))).collect();
            let _ = write!(out, r#"<polygon points="{}""#, points.join(" "));
        }
        Shape::Text(t) => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-family="{}""#,
                num(t.pos.x),
                num(t.pos.y),
                num(t.font_size),
                font_family()
            );
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            if t.rotation != 0.0 {
                let _ = write!(out, r#" transform="rotate({} {} {})""#, num(t.rotation), num(t.pos.x), num(t.pos.y));
            }
            write_fill_stroke(out, item);
            out.push('>');
            out.push_str(&escape_xml(&t.content));
            out.push_str("</text>\n");
            return;
        }
    }
    write_fill_stroke(out, item);
    out.push_str("/>\n");
}

fn write_fill_stroke(out: &mut String, item: &SceneItem) {
    match item.fill {
        Some(c) => write_paint(out, "fill", c, 1.0),
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(s) = &item.stroke {
        write_stroke(out, s);
    }
    if let Some(tag) = &item.tag {
        let _ = write!(out, r#" data-series="{}""#, escape_xml(tag));
    }
}

fn write_stroke(out: &mut String, s: &Stroke) {
    write_paint(out, "stroke", s.color, s.opacity);
    let _ = write!(out, r#" stroke-width="{}""#, num(s.width));
    if let Some([on, off]) = s.dash {
        let _ = write!(out, r#" stroke-dasharray="{},{}""#, num(on), num(off));
    }
}

fn write_paint(out: &mut String, attr: &str, c: Rgba, opacity: f64) {
    let _ = write!(out, r#" {attr}="{}""#, c.to_hex());
    let alpha = c.opacity() * opacity;
    if alpha < 1.0 {
        let _ = write!(out, r#" {attr}-opacity="{}""#, num(alpha));
    }
}

/// CSS font-family value for the shared fallback list; names with spaces are quoted.
fn font_family() -> String {
    FONT_FAMILIES
        .iter()
        .map(|f| if f.contains(' ') { format!("'{f}'") } else { f.to_string() })
        .collect::<Vec<_>>()
        .join(", ")
}

fn path_data(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for cmd in cmds {
        if !d.is_empty() {
            d.push(' ');
        }
        match cmd {
            PathCmd::MoveTo(p) => {
                let _ = write!(d, "M{},{}", num(p.x), num(p.y));
            }
            PathCmd::LineTo(p) => {
                let _ = write!(d, "L{},{}", num(p.x), num(p.y));
            }
            PathCmd::CubicTo(c1, c2, p) => {
                let _ = write!(d, "C{},{} {},{} {},{}", num(c1.x), num(c1.y), num(c2.x), num(c2.y), num(p.x), num(p.y));
            }
            PathCmd::Close => d.push('Z'),
        }
    }
    d
}

/// Shortest round-trip decimal form (no precision loss), with "-0" folded to "0".
fn num(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
