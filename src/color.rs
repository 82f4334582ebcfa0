use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

pub const HEAD_COLOR: Color = Color::new(255, 0, 0);

const PALETTE_START: u8 = 50;
const PALETTE_STEP: usize = 20;
const PALETTE_STOP: u8 = 255 - PALETTE_START + 1;

/// Every combination of the palette channel levels.
pub fn palette() -> Vec<Color> {
    let levels: Vec<u8> = (PALETTE_START..PALETTE_STOP).step_by(PALETTE_STEP).collect();

    let mut colors = Vec::with_capacity(levels.len().pow(3));
    for &r in &levels {
        for &g in &levels {
            for &b in &levels {
                colors.push(Color::new(r, g, b));
            }
        }
    }

    colors
}

pub fn random_color<R: Rng + ?Sized>(palette: &[Color], rng: &mut R) -> Color {
    palette.choose(rng).copied().unwrap_or(HEAD_COLOR)
}
