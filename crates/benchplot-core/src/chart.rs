// File: crates/benchplot-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use std::path::{Path, PathBuf};

use skia_safe as skia;
use tracing::{debug, info, warn};

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::legend::{self, Legend, LegendCorner, LegendEntry};
use crate::output::write_atomic;
use crate::scale::PlotScales;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{ImageFormat, Insets, HEIGHT, WIDTH};

const X_TICKS: usize = 8;
const Y_TICKS: usize = 6;
const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 17.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text is drawn at all (deterministic pixels for snapshots).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// What a successful render produced on disk and in memory.
#[derive(Clone, Debug)]
pub struct ChartArtifact {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub bytes_written: usize,
    pub legend: Legend,
    pub legend_corner: LegendCorner,
    pub frame: Frame,
}

/// Series keyed by label, kept in insertion order.
#[derive(Clone, Debug)]
pub struct Chart {
    series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: String,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: String::new(),
        }
    }

    pub fn with_labels(x_label: impl Into<String>, y_label: impl Into<String>, title: impl Into<String>) -> Self {
        let mut chart = Self::new();
        chart.x_axis.label = x_label.into();
        chart.y_axis.label = y_label.into();
        chart.title = title.into();
        chart
    }

    /// Insert a series. A series whose label is already present replaces the
    /// old one at its original position.
    pub fn add_series(&mut self, series: Series) {
        match self.series.iter_mut().find(|s| s.label() == series.label()) {
            Some(slot) => {
                warn!(label = series.label(), "replacing series with duplicate label");
                *slot = series;
            }
            None => self.series.push(series),
        }
    }

    pub fn series(&self) -> &[Series] { &self.series }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    /// Legend entries in draw order, colored from `theme`.
    pub fn legend(&self, theme: &Theme) -> Legend {
        Legend {
            entries: self
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| LegendEntry { label: s.label().to_string(), color: theme.series_color(i) })
                .collect(),
        }
    }

    /// Axes with ranges fitted to every point of every series.
    pub fn fitted_axes(&self) -> (Axis, Axis) {
        let bounds = self.series.iter().filter_map(Series::bounds).reduce(|a, b| {
            (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3))
        });
        let mut x = self.x_axis.clone();
        let mut y = self.y_axis.clone();
        match bounds {
            Some((x0, x1, y0, y1)) => {
                x.fit(x0, x1);
                y.fit(y0, y1);
            }
            None => {
                x.fit(0.0, 1.0);
                y.fit(0.0, 1.0);
            }
        }
        (x, y)
    }

    /// Render and persist to `output_path`; the format follows the extension.
    pub fn render_to_file(&self, opts: &RenderOptions, output_path: impl AsRef<Path>) -> Result<ChartArtifact> {
        let path = output_path.as_ref();
        if self.series.is_empty() {
            return Err(ChartError::EmptySeriesSet);
        }
        let format = ImageFormat::from_path(path)
            .ok_or_else(|| ChartError::UnsupportedFormat { path: path.to_path_buf() })?;

        let (mut surface, legend, legend_corner) = self.draw(opts)?;
        let data = encode(&mut surface, format)?;
        let frame = read_frame(&mut surface)?;

        write_atomic(path, &data)?;
        info!(path = %path.display(), bytes = data.len(), series = self.series.len(), "chart written");

        Ok(ChartArtifact { path: path.to_path_buf(), format, bytes_written: data.len(), legend, legend_corner, frame })
    }

    /// Render to PNG bytes without touching the filesystem.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        if self.series.is_empty() {
            return Err(ChartError::EmptySeriesSet);
        }
        let (mut surface, ..) = self.draw(opts)?;
        encode(&mut surface, ImageFormat::Png)
    }

    /// Render to an RGBA8 frame without touching the filesystem.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Frame> {
        if self.series.is_empty() {
            return Err(ChartError::EmptySeriesSet);
        }
        let (mut surface, ..) = self.draw(opts)?;
        read_frame(&mut surface)
    }

    fn draw(&self, opts: &RenderOptions) -> Result<(skia::Surface, Legend, LegendCorner)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| ChartError::Render(format!("failed to create {}x{} raster surface", opts.width, opts.height)))?;
        let theme = &opts.theme;
        let plot = RectI32::inset(surface.width(), surface.height(), &opts.insets);
        let (x_axis, y_axis) = self.fitted_axes();
        let scales = PlotScales::new(plot, &x_axis, &y_axis);
        let shaper = opts.draw_labels.then(TextShaper::new);
        let legend = self.legend(theme);
        debug!(x_min = x_axis.min, x_max = x_axis.max, y_min = y_axis.min, y_max = y_axis.max, "axes fitted");

        let canvas = surface.canvas();
        canvas.clear(theme.background);

        draw_grid(canvas, plot, &scales, &x_axis, &y_axis, theme);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        let lines: Vec<Vec<(f32, f32)>> =
            self.series.iter().map(|s| s.xy().map(|(x, y)| scales.to_px(x, y)).collect()).collect();
        for (i, line) in lines.iter().enumerate() {
            draw_line_series(canvas, line, theme.series_color(i));
        }
        canvas.restore();

        draw_frame(canvas, plot, theme);
        if let Some(shaper) = shaper.as_ref() {
            draw_tick_labels(canvas, shaper, plot, &scales, &x_axis, &y_axis, theme);
            draw_titles(canvas, shaper, plot, &x_axis, &y_axis, &self.title, theme);
        }
        let size = legend.size(shaper.as_ref());
        let corner = legend::best_corner(plot, size, &lines);
        debug!(?corner, "legend placed");
        legend.draw(canvas, legend::frame(plot, size, corner), theme, shaper.as_ref());

        Ok((surface, legend, corner))
    }
}

/// Build a chart from ordered series and persist it in one call.
pub fn render(
    series: impl IntoIterator<Item = Series>,
    x_label: &str,
    y_label: &str,
    title: &str,
    output_path: impl AsRef<Path>,
    opts: &RenderOptions,
) -> Result<ChartArtifact> {
    let mut chart = Chart::with_labels(x_label, y_label, title);
    for s in series {
        chart.add_series(s);
    }
    chart.render_to_file(opts, output_path)
}

// ---- helpers ----------------------------------------------------------------

fn encode(surface: &mut skia::Surface, format: ImageFormat) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(format.to_skia())
        .ok_or_else(|| ChartError::Render(format!("encode {format:?} failed")))?;
    Ok(data.as_bytes().to_vec())
}

fn read_frame(surface: &mut skia::Surface) -> Result<Frame> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(ChartError::Render("reading surface pixels failed".into()));
    }
    Ok(Frame { width: w as u32, height: h as u32, pixels })
}

fn draw_grid(canvas: &skia::Canvas, plot: RectI32, scales: &PlotScales, x: &Axis, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // verticals
    for v in nice_ticks(x.min, x.max, X_TICKS) {
        let px = scales.x.to_px(v);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for v in nice_ticks(y.min, y.max, Y_TICKS) {
        let py = scales.y.to_px(v);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.25);
    canvas.draw_rect(plot.to_skia(), &axis_paint);
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    scales: &PlotScales,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    let mut tick = skia::Paint::default();
    tick.set_color(theme.axis_line);
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.0);
    let (l, b) = (plot.left as f32, plot.bottom as f32);

    let x_step = nice_step(x.min, x.max, X_TICKS);
    for v in nice_ticks(x.min, x.max, X_TICKS) {
        let px = scales.x.to_px(v);
        canvas.draw_line((px, b), (px, b + 4.0), &tick);
        shaper.draw_centered(canvas, &format_tick(v, x_step), px, b + 20.0, TICK_FONT, theme.tick);
    }

    let y_step = nice_step(y.min, y.max, Y_TICKS);
    for v in nice_ticks(y.min, y.max, Y_TICKS) {
        let py = scales.y.to_px(v);
        canvas.draw_line((l - 4.0, py), (l, py), &tick);
        shaper.draw_right(canvas, &format_tick(v, y_step), l - 7.0, py + TICK_FONT * 0.35, TICK_FONT, theme.tick);
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    x: &Axis,
    y: &Axis,
    title: &str,
    theme: &Theme,
) {
    let cx = (plot.left + plot.right) as f32 * 0.5;
    let cy = (plot.top + plot.bottom) as f32 * 0.5;
    if !x.label.is_empty() {
        shaper.draw_centered(canvas, &x.label, cx, plot.bottom as f32 + 46.0, LABEL_FONT, theme.axis_label);
    }
    if !y.label.is_empty() {
        shaper.draw_vertical(canvas, &y.label, plot.left as f32 - 70.0, cy, LABEL_FONT, theme.axis_label);
    }
    if !title.is_empty() {
        shaper.draw_centered(canvas, title, cx, plot.top as f32 - 18.0, TITLE_FONT, theme.title);
    }
}

fn draw_line_series(canvas: &skia::Canvas, line: &[(f32, f32)], color: skia::Color) {
    let Some((&first, rest)) = line.split_first() else { return };

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_color(color);

    if rest.is_empty() {
        stroke.set_style(skia::paint::Style::Fill);
        canvas.draw_circle(first, 3.0, &stroke);
        return;
    }

    let mut path = skia::Path::new();
    path.move_to(first);
    for &p in rest {
        path.line_to(p);
    }

    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &stroke);
}
