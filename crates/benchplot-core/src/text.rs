// File: crates/benchplot-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout for titles, ticks and legend labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
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
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw with the baseline-ish anchor at `(x, y)`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (cx - p.longest_line() * 0.5, y - size * 0.8));
    }

    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (right - p.longest_line(), y - size * 0.8));
    }

    /// Draw rotated 90 degrees counter-clockwise, centered on `(cx, cy)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-p.longest_line() * 0.5, -size * 0.6));
        canvas.restore();
    }
}
