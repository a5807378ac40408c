//! Colors and the fixed accent palette.

/// An RGBA color with 8-bit channels and a float alpha, matching what a
/// Canvas2D `rgba(...)` style expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string for Canvas2D fill/stroke styles.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

/// Accent palette cycled across orbit particles; used for ripple rings.
pub const PALETTE: [Rgba; 5] = [
    Rgba::rgb(0x00, 0xff, 0xc3),
    Rgba::rgb(0x66, 0xcc, 0xff),
    Rgba::rgb(0xff, 0x99, 0xcc),
    Rgba::rgb(0xff, 0xcc, 0x66),
    Rgba::rgb(0xcc, 0xcc, 0xff),
];

/// Stable cyclic color assignment by particle index.
#[inline]
pub fn palette_color(index: usize) -> Rgba {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_has_canvas_shape() {
        let c = Rgba::rgba(255, 153, 204, 0.4);
        assert_eq!(c.css(), "rgba(255,153,204,0.4)");
    }

    #[test]
    fn palette_wraps_by_index() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(PALETTE.len()), PALETTE[0]);
        assert_eq!(palette_color(7), PALETTE[2]);
    }
}
