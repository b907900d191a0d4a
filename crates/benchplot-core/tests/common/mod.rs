// File: crates/benchplot-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use benchplot_core::Series;

/// The four variants of the reference allocator run, in legend order.
pub const VARIANTS: [(&str, &str); 4] = [
    ("PoolAllocator-vector.txt", "Single Pool"),
    ("PoolAllocator-sizeof4-vector.txt", "Single Pool (diff chunks)"),
    ("PoolManager-vector.txt", "Pool Manager"),
    ("stl-allocator-vector.txt", "STL"),
];

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

/// Harness-style output: `steps` lines of `<pushbacks> <seconds>`.
pub fn harness_output(steps: u64, slope: f64) -> String {
    (0..steps)
        .map(|i| format!("{} {:.6}\n", i * 1000, 0.001 + slope * (i as f64) * (i as f64 + 1.0) * 0.5))
        .collect()
}

pub fn reference_series() -> Vec<Series> {
    VARIANTS
        .iter()
        .enumerate()
        .map(|(i, (_, label))| {
            let slope = 0.002 * (i as f64 + 1.0);
            Series::from_points(*label, (0..20u64).map(|k| (k * 1000, 0.001 + slope * k as f64)))
        })
        .collect()
}
