// File: crates/benchplot-core/src/legend.rs
// Summary: Legend model (one entry per drawn series, in draw order), placement and painter.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::text::TextShaper;
use crate::theme::Theme;

pub const FONT_SIZE: f32 = 13.0;
const PAD: f32 = 8.0;
const ROW: f32 = 20.0;
const SWATCH: f32 = 24.0;
const GAP: f32 = 8.0;
/// Distance between the legend box and the plot edges.
const MARGIN: f32 = 10.0;
/// Pixel spacing of the samples taken along each polyline segment.
const SAMPLE_STEP: f32 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

/// Plot corner that holds the legend box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendCorner {
    #[default]
    UpperLeft,
    UpperRight,
}

impl Legend {
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Box size in pixels. Text adds no width when `shaper` is `None`.
    pub fn size(&self, shaper: Option<&TextShaper>) -> (f32, f32) {
        let text_w = shaper
            .map(|s| self.entries.iter().map(|e| s.measure_width(&e.label, FONT_SIZE)).fold(0.0, f32::max))
            .unwrap_or(0.0);
        (PAD * 2.0 + SWATCH + GAP + text_w, PAD * 2.0 + ROW * self.entries.len() as f32)
    }

    /// Paint the legend inside `frame` (see [`frame`]).
    /// `shaper` is `None` when text is disabled; swatches are still drawn.
    pub fn draw(&self, canvas: &skia::Canvas, frame: skia::Rect, theme: &Theme, shaper: Option<&TextShaper>) {
        if self.entries.is_empty() {
            return;
        }
        let rrect = skia::RRect::new_rect_xy(frame, 4.0, 4.0);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.legend_fill);
        canvas.draw_rrect(&rrect, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        canvas.draw_rrect(&rrect, &border);

        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_style(skia::paint::Style::Stroke);
        swatch.set_stroke_width(2.0);

        for (i, entry) in self.entries.iter().enumerate() {
            let mid_y = frame.top + PAD + ROW * i as f32 + ROW * 0.5;
            let x0 = frame.left + PAD;
            swatch.set_color(entry.color);
            canvas.draw_line((x0, mid_y), (x0 + SWATCH, mid_y), &swatch);
            if let Some(s) = shaper {
                s.draw_left(canvas, &entry.label, x0 + SWATCH + GAP, mid_y + FONT_SIZE * 0.35, FONT_SIZE, theme.axis_label);
            }
        }
    }
}

/// Legend box of `size` anchored in `corner` of `plot`.
pub fn frame(plot: RectI32, size: (f32, f32), corner: LegendCorner) -> skia::Rect {
    let (w, h) = size;
    let top = plot.top as f32 + MARGIN;
    let left = match corner {
        LegendCorner::UpperLeft => plot.left as f32 + MARGIN,
        LegendCorner::UpperRight => plot.right as f32 - MARGIN - w,
    };
    skia::Rect::from_xywh(left, top, w, h)
}

/// The upper corner whose legend box would hide less of `lines` (pixel
/// polylines, one per series). Ties keep the upper-left corner.
pub fn best_corner(plot: RectI32, size: (f32, f32), lines: &[Vec<(f32, f32)>]) -> LegendCorner {
    let left = covered(&frame(plot, size, LegendCorner::UpperLeft), lines);
    let right = covered(&frame(plot, size, LegendCorner::UpperRight), lines);
    if right < left { LegendCorner::UpperRight } else { LegendCorner::UpperLeft }
}

/// Samples of `lines` that fall inside `rect`, taken every few pixels along each segment.
fn covered(rect: &skia::Rect, lines: &[Vec<(f32, f32)>]) -> usize {
    let hit = |(x, y): (f32, f32)| x >= rect.left && x <= rect.right && y >= rect.top && y <= rect.bottom;
    lines
        .iter()
        .map(|line| {
            let along: usize = line
                .windows(2)
                .map(|w| {
                    let (a, b) = (w[0], w[1]);
                    let n = ((b.0 - a.0).hypot(b.1 - a.1) / SAMPLE_STEP).ceil().max(1.0) as usize;
                    (0..n)
                        .filter(|&k| {
                            let t = k as f32 / n as f32;
                            hit((a.0 + t * (b.0 - a.0), a.1 + t * (b.1 - a.1)))
                        })
                        .count()
                })
                .sum();
            along + line.last().map_or(0, |&p| hit(p) as usize)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLOT: RectI32 = RectI32::from_ltrb(0, 0, 400, 300);
    const SIZE: (f32, f32) = (120.0, 56.0);

    #[test]
    fn frames_hug_the_top_corners() {
        let l = frame(PLOT, SIZE, LegendCorner::UpperLeft);
        assert_eq!((l.left, l.top, l.right, l.bottom), (10.0, 10.0, 130.0, 66.0));
        let r = frame(PLOT, SIZE, LegendCorner::UpperRight);
        assert_eq!((r.left, r.top, r.right, r.bottom), (270.0, 10.0, 390.0, 66.0));
    }

    #[test]
    fn rising_line_keeps_upper_left() {
        let lines = vec![vec![(0.0, 300.0), (400.0, 0.0)]];
        assert_eq!(best_corner(PLOT, SIZE, &lines), LegendCorner::UpperLeft);
    }

    #[test]
    fn line_under_upper_left_moves_legend_right() {
        // starts high and decays, as a curve plotted against a falling y range would
        let lines = vec![vec![(0.0, 20.0), (100.0, 40.0), (400.0, 290.0)]];
        assert_eq!(best_corner(PLOT, SIZE, &lines), LegendCorner::UpperRight);
    }

    #[test]
    fn ties_and_empty_input_stay_left() {
        assert_eq!(best_corner(PLOT, SIZE, &[]), LegendCorner::UpperLeft);
        // a horizontal line across the whole top band covers both corners equally
        let lines = vec![vec![(0.0, 30.0), (400.0, 30.0)], vec![]];
        assert_eq!(best_corner(PLOT, SIZE, &lines), LegendCorner::UpperLeft);
    }

    #[test]
    fn single_points_count() {
        let lines = vec![vec![(50.0, 30.0)]];
        assert_eq!(best_corner(PLOT, SIZE, &lines), LegendCorner::UpperRight);
    }
}
