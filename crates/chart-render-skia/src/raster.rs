// File: crates/chart-render-skia/src/raster.rs
// Summary: Surface implementation on a Skia CPU raster canvas; PNG bytes on finish.

use anyhow::Result;
use chart_core::{ChartPlotter, Color, Point, Style, Surface};
use skia_safe as skia;

pub struct RasterSurface {
    surface: skia::Surface,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        surface.canvas().clear(sk_color(background));
        Ok(Self { surface })
    }
}

fn sk_color(c: Color) -> skia::Color {
    let (r, g, b) = c.to_rgb();
    skia::Color::from_rgb(r, g, b)
}

fn sk_point(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn stroke_paint(style: &Style) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.stroke_width as f32);
    paint.set_color(sk_color(style.stroke));
    paint
}

fn fill_paint(style: &Style) -> Option<skia::Paint> {
    style.fill.map(|c| {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(sk_color(c));
        paint
    })
}

impl Surface for RasterSurface {
    type Output = Vec<u8>;

    fn line(&mut self, from: Point, to: Point, style: &Style) -> Result<()> {
        self.surface.canvas().draw_line(sk_point(from), sk_point(to), &stroke_paint(style));
        Ok(())
    }

    fn rect(&mut self, origin: Point, width: f64, height: f64, style: &Style) -> Result<()> {
        let rect = skia::Rect::from_xywh(origin.x as f32, origin.y as f32, width as f32, height as f32);
        let canvas = self.surface.canvas();
        if let Some(fill) = fill_paint(style) {
            canvas.draw_rect(rect, &fill);
        }
        canvas.draw_rect(rect, &stroke_paint(style));
        Ok(())
    }

    fn polyline(&mut self, points: &[Point], style: &Style) -> Result<()> {
        let Some((first, rest)) = points.split_first() else { return Ok(()) };
        let mut path = skia::Path::new();
        path.move_to(sk_point(*first));
        for p in rest {
            path.line_to(sk_point(*p));
        }
        path.close();
        let canvas = self.surface.canvas();
        if let Some(fill) = fill_paint(style) {
            canvas.draw_path(&path, &fill);
        }
        canvas.draw_path(&path, &stroke_paint(style));
        Ok(())
    }

    fn circle(&mut self, center: Point, radius: f64, style: &Style) -> Result<()> {
        let canvas = self.surface.canvas();
        if let Some(fill) = fill_paint(style) {
            canvas.draw_circle(sk_point(center), radius as f32, &fill);
        }
        canvas.draw_circle(sk_point(center), radius as f32, &stroke_paint(style));
        Ok(())
    }

    fn text(&mut self, origin: Point, text: &str, style: &Style) -> Result<()> {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(sk_color(style.fill.unwrap_or(style.stroke)));
        let mut font = skia::Font::default();
        font.set_size(style.font_size as f32);
        self.surface.canvas().draw_str(text, sk_point(origin), &font, &paint);
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

/// Rasterize a generated chart to PNG bytes on a white background.
pub fn to_png(plotter: &ChartPlotter) -> Result<Vec<u8>> {
    let drawing = plotter
        .drawing()
        .ok_or_else(|| anyhow::anyhow!("to_png called before a successful generate"))?;
    plotter.serialize(RasterSurface::new(drawing.width(), drawing.height(), Color::WHITE)?)
}
