// File: crates/benchplot-core/src/series.rs
// Summary: Immutable labeled series of (operation count, seconds) samples.
// Notes:
// - x and y are stored as separate index-aligned vectors. Construction only
//   goes through point lists, so the two lengths can never diverge.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    label: String,
    x_values: Vec<u64>,
    y_values: Vec<f64>,
}

impl Series {
    /// Build a series from points in the order given.
    pub fn from_points<I>(label: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        let (x_values, y_values) = points.into_iter().unzip();
        Self { label: label.into(), x_values, y_values }
    }

    pub fn label(&self) -> &str { &self.label }

    pub fn x_values(&self) -> &[u64] { &self.x_values }

    pub fn y_values(&self) -> &[f64] { &self.y_values }

    pub fn len(&self) -> usize { self.x_values.len() }

    pub fn is_empty(&self) -> bool { self.x_values.is_empty() }

    /// Iterate `(x, y)` pairs in load order.
    pub fn points(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.x_values.iter().copied().zip(self.y_values.iter().copied())
    }

    /// Points converted to plot space.
    pub fn xy(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points().map(|(x, y)| (x as f64, y))
    }

    /// `(x_min, x_max, y_min, y_max)` or `None` for an empty series.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.xy();
        let (x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), (x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_stay_aligned() {
        let s = Series::from_points("STL", vec![(0, 0.5), (10, 0.25)]);
        assert_eq!(s.x_values(), &[0, 10]);
        assert_eq!(s.y_values(), &[0.5, 0.25]);
        assert_eq!(s.points().collect::<Vec<_>>(), vec![(0, 0.5), (10, 0.25)]);
    }

    #[test]
    fn bounds_cover_all_points() {
        let s = Series::from_points("a", vec![(5, 2.0), (1, 3.0), (9, -1.0)]);
        assert_eq!(s.bounds(), Some((1.0, 9.0, -1.0, 3.0)));
        assert_eq!(Series::from_points("e", Vec::new()).bounds(), None);
    }
}
