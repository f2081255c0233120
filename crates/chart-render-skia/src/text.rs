// File: crates/chart-render-skia/src/text.rs
// Summary: Label shaping with Skia textlayout; text is centred inside a column-wide frame.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

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
        // Monospaced families first; labels are all digits.
        ts.set_font_families(&["SF Mono", "Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    /// Lay out `text` centred within `width` pixels.
    pub fn layout_centered(&self, text: &str, size: f32, color: skia::Color, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Center);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width.max(1.0));
        paragraph
    }

    /// Draw `text` centred in the frame whose top-left corner is `(left, top)`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, left: f32, top: f32, width: f32, size: f32, color: skia::Color) {
        let mut p = self.layout_centered(text, size, color, width);
        p.paint(canvas, (left, top));
    }
}
