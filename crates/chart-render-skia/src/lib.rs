// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate. Hosts the CPU raster surface behind the `raster` feature.

#[cfg(feature = "raster")]
mod raster;

#[cfg(feature = "raster")]
pub use raster::{to_png, RasterSurface};
