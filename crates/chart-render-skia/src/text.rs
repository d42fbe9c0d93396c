// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaper/painter using Skia textlayout, with anchor alignment and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use chart_core::scene::{TextAnchor, TextItem};
use chart_core::types::FONT_FAMILIES;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(FONT_FAMILIES);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Paints `item` with its baseline at `item.pos`, honoring anchor and rotation.
    pub fn draw(&self, canvas: &skia::Canvas, item: &TextItem, color: skia::Color) {
        let size = item.font_size as f32;
        let mut p = self.layout(&item.content, size, color);
        let width = p.longest_line();
        let (x, y) = (item.pos.x as f32, item.pos.y as f32);
        let dx = match item.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -width * 0.5,
            TextAnchor::End => -width,
        };

        let rotated = item.rotation != 0.0;
        if rotated {
            canvas.save();
            canvas.rotate(item.rotation as f32, Some(skia::Point::new(x, y)));
        }
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x + dx, y - size * 0.8));
        if rotated {
            canvas.restore();
        }
    }
}
