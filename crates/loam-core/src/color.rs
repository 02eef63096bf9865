//! Display colour attached to each state.

use std::fmt;

/// An opaque 8-bit RGB triple.
///
/// The engine never interprets colours; they ride along in the rule set
/// so a renderer can map state identifiers to pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black, the conventional background colour.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Build a colour from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Whether a renderer may skip drawing cells of this colour.
    pub fn is_background(self) -> bool {
        self == Self::BLACK
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_black_is_background() {
        assert!(Rgb::BLACK.is_background());
        assert!(!Rgb::new(0, 0, 1).is_background());
        assert!(!Rgb::WHITE.is_background());
    }

    #[test]
    fn conversions_and_display() {
        assert_eq!(Rgb::from((1, 2, 3)), Rgb::new(1, 2, 3));
        assert_eq!(Rgb::from([255, 0, 16]).to_string(), "#ff0010");
    }
}
