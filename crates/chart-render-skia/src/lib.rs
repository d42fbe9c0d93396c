// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer: replays a chart-core Scene onto CPU raster surfaces and encodes PNG/RGBA.

mod text;

pub use text::TextShaper;

use anyhow::{anyhow, Result};
use skia_safe as skia;

use chart_core::geometry::Point;
use chart_core::scene::{PathCmd, Scene, SceneItem, Shape, Stroke};
use chart_core::style::Rgba;

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Paint every scene item, in order, onto `canvas`.
    pub fn paint(&self, canvas: &skia::Canvas, scene: &Scene) {
        if let Some(bg) = scene.background {
            canvas.clear(to_color(bg, 1.0));
        }
        for item in scene.items() {
            self.paint_item(canvas, item);
        }
    }

    fn paint_item(&self, canvas: &skia::Canvas, item: &SceneItem) {
        if let Shape::Text(t) = &item.shape {
            let color = item.fill.map(|c| to_color(c, 1.0)).unwrap_or(skia::Color::BLACK);
            self.shaper.draw(canvas, t, color);
            return;
        }

        let fill = item.fill.map(fill_paint);
        let stroke = item.stroke.as_ref().map(stroke_paint);
        for paint in fill.iter().chain(stroke.iter()) {
            match &item.shape {
                Shape::Line { from, to } => {
                    canvas.draw_line(to_point(*from), to_point(*to), paint);
                }
                Shape::Path(cmds) => {
                    canvas.draw_path(&build_path(cmds), paint);
                }
                Shape::Rect(r) => {
                    let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
                    canvas.draw_rect(rect, paint);
                }
                Shape::Circle { center, radius } => {
                    canvas.draw_circle(to_point(*center), *radius as f32, paint);
                }
                Shape::Polygon(pts) => {
                    canvas.draw_path(&polygon_path(pts), paint);
                }
                Shape::Text(_) => {}
            }
        }
    }

    fn raster(&self, scene: &Scene) -> Result<skia::Surface> {
        let (w, h) = (scene.width.round().max(1.0) as i32, scene.height.round().max(1.0) as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint(surface.canvas(), scene);
        Ok(surface)
    }

    /// Render the scene and return PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.raster(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG file, creating parent directories as needed.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        log::info!("wrote {}", path.display());
        Ok(())
    }

    /// Render the scene to an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(scene)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("read_pixels failed"));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_color(c: Rgba, opacity: f64) -> skia::Color {
    let a = (c.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn to_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_color(c, 1.0));
    paint
}

fn stroke_paint(s: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width as f32);
    paint.set_color(to_color(s.color, s.opacity));
    if let Some([on, off]) = s.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on as f32, off as f32], 0.0));
    }
    paint
}

fn build_path(cmds: &[PathCmd]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => {
                path.move_to(to_point(p));
            }
            PathCmd::LineTo(p) => {
                path.line_to(to_point(p));
            }
            PathCmd::CubicTo(c1, c2, p) => {
                path.cubic_to(to_point(c1), to_point(c2), to_point(p));
            }
            PathCmd::Close => {
                path.close();
            }
        }
    }
    path
}

fn polygon_path(pts: &[Point]) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = pts.split_first() {
        path.move_to(to_point(*first));
        for p in rest {
            path.line_to(to_point(*p));
        }
        path.close();
    }
    path
}
