// File: crates/benchplot-core/src/loader.rs
// Summary: Reads benchmark result files (`<count> <seconds>` per line) into Series.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::series::Series;

/// Load one result file as a labeled series.
///
/// Blank lines are skipped, every other line must start with a non-negative
/// integer followed by a finite real number. Extra tokens are ignored. The
/// whole file is rejected on the first bad line.
pub fn load(path: impl AsRef<Path>, label: impl Into<String>) -> Result<Series> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ChartError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let series = parse_series(BufReader::new(file), path, label)?;
    debug!(path = %path.display(), label = series.label(), points = series.len(), "loaded series");
    Ok(series)
}

/// Load several `(path, label)` pairs in order, stopping at the first failure.
pub fn load_all<P, L>(specs: impl IntoIterator<Item = (P, L)>) -> Result<Vec<Series>>
where
    P: AsRef<Path>,
    L: Into<String>,
{
    specs.into_iter().map(|(path, label)| load(path, label)).collect()
}

/// Parse records from any buffered reader. `source` names the input in errors.
pub fn parse_series<R: BufRead>(
    reader: R,
    source: impl Into<PathBuf>,
    label: impl Into<String>,
) -> Result<Series> {
    let source = source.into();
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ChartError::ResourceNotFound { path: source.clone(), source: e })?;
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_record(&line).map_err(|reason| ChartError::malformed(&source, idx + 1, &line, reason))?);
    }
    Ok(Series::from_points(label, points))
}

fn parse_record(line: &str) -> std::result::Result<(u64, f64), String> {
    let mut tokens = line.split_whitespace();
    let (Some(xs), Some(ys)) = (tokens.next(), tokens.next()) else {
        return Err("expected two whitespace-separated values".to_string());
    };
    let x = xs
        .parse::<u64>()
        .map_err(|e| format!("first value {xs:?} is not a non-negative integer: {e}"))?;
    let y = ys
        .parse::<f64>()
        .map_err(|e| format!("second value {ys:?} is not a number: {e}"))?;
    if !y.is_finite() {
        return Err(format!("second value {ys:?} is not finite"));
    }
    Ok((x, y))
}
