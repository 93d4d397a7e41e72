// File: crates/chart-render-skia/tests/png.rs
// Purpose: Validate PNG raster output shape and background pixel (requires `--features raster`).

#![cfg(feature = "raster")]

use chart_core::{ChartOptions, ChartPlotter, RawTable};
use chart_render_skia::to_png;

#[test]
fn render_png_bytes() {
    let table = RawTable::from_strings([
        vec!["Date", "A"],
        vec!["2024-01-01", "1"],
        vec!["2024-01-02", "3"],
        vec!["2024-01-03", "2"],
    ]);
    let mut plotter = ChartPlotter::new(ChartOptions::new(320, 200), table);
    plotter.generate().expect("generate");
    let bytes = to_png(&plotter).expect("png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));
    // Top-left corner is outside every primitive.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}
