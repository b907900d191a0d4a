// File: crates/benchplot-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps a value range onto a pixel range. `start_px` may exceed `end_px`
/// (screen Y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.start_px + t as f32 * (self.end_px - self.start_px)
    }
}

/// The pair of scales for one plot area.
#[derive(Clone, Copy, Debug)]
pub struct PlotScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotScales {
    pub fn new(plot: RectI32, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self {
            x: LinearScale::new(plot.left as f32, plot.right as f32, x_axis.min, x_axis.max),
            y: LinearScale::new(plot.bottom as f32, plot.top as f32, y_axis.min, y_axis.max),
        }
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }
}
