// File: crates/chart-core/src/theme.rs
// Summary: Colors handed to surfaces and the deterministic per-series color allocator.

/// Value component shared by every series color.
pub const SERIES_VALUE: u8 = 230;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    White,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hue in degrees (0..360), saturation and value on 0..=255.
    Hsv { h: u16, s: u8, v: u8 },
    Named(NamedColor),
}

impl Color {
    pub const BLACK: Color = Color::Named(NamedColor::Black);
    pub const WHITE: Color = Color::Named(NamedColor::White);

    pub const fn hsv(h: u16, s: u8, v: u8) -> Self { Color::Hsv { h, s, v } }

    /// 8-bit sRGB triple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Named(NamedColor::Black) => (0, 0, 0),
            Color::Named(NamedColor::White) => (255, 255, 255),
            Color::Hsv { h, s, v } => hsv_to_rgb(h, s, v),
        }
    }
}

fn hsv_to_rgb(h: u16, s: u8, v: u8) -> (u8, u8, u8) {
    let h = f64::from(h % 360) / 60.0;
    let s = f64::from(s) / 255.0;
    let v = f64::from(v) / 255.0;
    let c = v * s;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to8 = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to8(r), to8(g), to8(b))
}

/// Color of series `index`.
///
/// Six base hues 60 degrees apart; each further round of six shifts the hue by
/// `60 / (round + 1)`. Saturation drops by one every 8 series.
pub fn color_for(index: usize) -> Color {
    let round = index / 6;
    let hue = (60 * (index % 6) + 60 / (1 + round)) % 360;
    let sat = 255usize.saturating_sub(index / 8);
    Color::hsv(hue as u16, sat as u8, SERIES_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_round_hues_are_sixty_apart() {
        let hues: Vec<u16> = (0..6)
            .map(|i| match color_for(i) { Color::Hsv { h, .. } => h, _ => unreachable!() })
            .collect();
        assert_eq!(hues, vec![60, 120, 180, 240, 300, 0]);
    }

    #[test]
    fn later_rounds_shift_and_desaturate() {
        assert_eq!(color_for(6), Color::hsv(30, 255, 230));
        assert_eq!(color_for(8), Color::hsv(150, 254, 230));
        assert_eq!(color_for(12), Color::hsv(20, 254, 230));
        // very large indices saturate at zero
        assert_eq!(color_for(10_000), Color::hsv(240, 0, 230));
    }

    #[test]
    fn allocator_is_pure() {
        for i in 0..100 {
            assert_eq!(color_for(i), color_for(i));
        }
    }

    #[test]
    fn hsv_conversion() {
        assert_eq!(Color::hsv(0, 255, 255).to_rgb(), (255, 0, 0));
        assert_eq!(Color::hsv(120, 255, 255).to_rgb(), (0, 255, 0));
        assert_eq!(Color::hsv(240, 255, 230).to_rgb(), (0, 0, 230));
        assert_eq!(Color::hsv(60, 0, 230).to_rgb(), (230, 230, 230));
        assert_eq!(Color::BLACK.to_rgb(), (0, 0, 0));
    }
}
