// File: crates/benchplot-core/tests/autoscale.rs
// Purpose: Validate axis fitting over several series and series ordering in the chart.

mod common;

use benchplot_core::{Chart, Series};

#[test]
fn autoscale_covers_all_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_points("a", vec![(0, 1.0), (5000, 3.0)]));
    chart.add_series(Series::from_points("b", vec![(2000, 0.5), (8000, 6.0)]));

    let (x, y) = chart.fitted_axes();
    assert!(x.min <= 0.0 && x.max >= 8000.0);
    assert!(y.min <= 0.5 && y.max >= 6.0);
    // labels survive fitting
    assert_eq!(x.label, "PushBacks");
    assert_eq!(y.label, "Seconds");
}

#[test]
fn empty_series_do_not_affect_range() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_points("empty", Vec::new()));
    chart.add_series(Series::from_points("data", vec![(10, 2.0), (20, 4.0)]));

    let (x, y) = chart.fitted_axes();
    assert!(x.min > 0.0 && x.min < 10.0);
    assert!(y.max > 4.0 && y.max < 5.0);
}

#[test]
fn duplicate_label_replaces_in_place() {
    let mut chart = Chart::new();
    for s in common::reference_series() {
        chart.add_series(s);
    }
    chart.add_series(Series::from_points("Pool Manager", vec![(1, 1.0)]));

    let labels: Vec<_> = chart.series().iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Single Pool", "Single Pool (diff chunks)", "Pool Manager", "STL"]);
    assert_eq!(chart.series()[2].x_values(), &[1]);
}
