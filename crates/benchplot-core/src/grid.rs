// File: crates/benchplot-core/src/grid.rs
// Summary: Tick layout helpers for the background grid and axis labels.

/// Round step from the 1/2/2.5/5 x 10^k family so that `[min, max]`
/// holds roughly `target` intervals.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs();
    if span <= 0.0 || !span.is_finite() || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions that are multiples of a nice step and fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let step = nice_step(min, max, target);
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

fn decimals_for(step: f64) -> usize {
    (0..=12)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(12)
}

/// Label text for a tick value, using as many decimals as the step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = decimals_for(step);
    if decimals == 0 && value.abs() >= 1e7 {
        return format!("{:.1e}", value);
    }
    format!("{:.*}", decimals, value)
}
