// File: crates/benchplot-core/tests/errors.rs
// Purpose: Renderer failure modes leave no artifact behind.

mod common;

use benchplot_core::{render, Chart, ChartError, RenderOptions, Series};

#[test]
fn empty_series_set_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output.png");

    let err = render(Vec::<Series>::new(), "PushBacks", "Seconds", "empty", &out, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptySeriesSet));
    assert!(!out.exists());
    assert!(matches!(Chart::new().render_to_png_bytes(&RenderOptions::default()), Err(ChartError::EmptySeriesSet)));
}

#[test]
fn unknown_extension_is_rejected_before_drawing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.svg");

    let err = render(common::reference_series(), "x", "y", "t", &out, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, ChartError::UnsupportedFormat { .. }));
    assert!(!out.exists());
}

#[test]
fn unwritable_destination_is_output_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"plain file").unwrap();
    let out = blocker.join("chart.png");

    let err = render(common::reference_series(), "x", "y", "t", &out, &RenderOptions::default()).unwrap_err();
    match err {
        ChartError::OutputWriteFailure { path, .. } => assert_eq!(path, out),
        other => panic!("expected OutputWriteFailure, got {other:?}"),
    }
    assert!(!out.exists());
    assert_eq!(std::fs::read(&blocker).unwrap(), b"plain file");
}

#[test]
fn rerender_overwrites_previous_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");
    std::fs::write(&out, b"stale").unwrap();

    render(common::reference_series(), "x", "y", "t", &out, &RenderOptions::default()).unwrap();
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1, "no temp files left behind");
}
