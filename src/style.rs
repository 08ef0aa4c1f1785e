//! Presentation metadata for links. The physics never reads these.

/// RGBA colour, one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// No colour channel set; alpha is ignored.
    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// How a link should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkStyle {
    pub renderable: bool,
    pub color: Option<Color>,
}

impl LinkStyle {
    /// Colour used when none is set, or when the set colour is black.
    pub const DEFAULT_COLOR: Color = Color::GREEN;

    pub fn hidden() -> Self {
        LinkStyle { renderable: false, color: None }
    }

    pub fn colored(color: Color) -> Self {
        LinkStyle { renderable: true, color: Some(color) }
    }

    pub fn display_color(&self) -> Color {
        match self.color {
            Some(c) if !c.is_black() => c,
            _ => Self::DEFAULT_COLOR,
        }
    }
}

impl Default for LinkStyle {
    fn default() -> Self {
        LinkStyle { renderable: true, color: None }
    }
}
