// File: crates/benchplot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use benchplot_core::{Chart, RenderOptions, Series};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_points("diag", vec![(0, 0.0), (4, 4.0)]));

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let frame = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((frame.width, frame.height), (opts.width as u32, opts.height as u32));
    assert_eq!(frame.width as usize * frame.height as usize * 4, frame.pixels.len());

    // top-left pixel is opaque background (white in the light theme)
    assert_eq!(&frame.pixels[..4], &[255, 255, 255, 255]);
}

#[test]
fn series_color_reaches_the_plot() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_points("flat", vec![(0, 1.0), (10, 1.0)]));

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let frame = chart.render_to_rgba8(&opts).unwrap();
    let want = opts.theme.series_color(0);
    let found = frame
        .pixels
        .chunks_exact(4)
        .any(|p| p[0] == want.r() && p[1] == want.g() && p[2] == want.b());
    assert!(found, "first palette color should appear in the rendered line");
}
