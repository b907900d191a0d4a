// File: crates/benchplot-core/src/axis.rs
// Summary: Axis model with a title and a data range fitted to the series.

/// Fraction of the data span added on each side when fitting.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("PushBacks", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Seconds", 0.0, 1.0)
    }

    /// Set the range to `[lo, hi]` padded by [`MARGIN`]; a degenerate range is widened.
    pub fn fit(&mut self, lo: f64, hi: f64) {
        if !lo.is_finite() || !hi.is_finite() {
            self.min = 0.0;
            self.max = 1.0;
            return;
        }
        let (lo, hi) = if (hi - lo).abs() < 1e-12 {
            let half = if lo.abs() > 1e-12 { lo.abs() * 0.5 } else { 0.5 };
            (lo - half, hi + half)
        } else {
            (lo, hi)
        };
        let pad = (hi - lo) * MARGIN;
        self.min = lo - pad;
        self.max = hi + pad;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_both_sides() {
        let mut a = Axis::default_x();
        a.fit(0.0, 100.0);
        assert!((a.min + 5.0).abs() < 1e-9);
        assert!((a.max - 105.0).abs() < 1e-9);
    }

    #[test]
    fn fit_widens_single_value() {
        let mut a = Axis::default_y();
        a.fit(0.0, 0.0);
        assert!(a.min < 0.0 && a.max > 0.0);
    }
}
