//! 8-bit RGB colors.

use std::ops::{Add, AddAssign};

use bytemuck::{Pod, Zeroable};

/// An RGB color with one byte per channel.
///
/// Arithmetic saturates at 0 and 255 instead of wrapping. The layout is
/// three packed bytes, so a `&[Color]` can be viewed as raw RGB data.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`, rounding to the nearest integer.
    ///
    /// Results are clamped to 0..=255; a negative or NaN factor gives black.
    pub fn scale(self, factor: f64) -> Self {
        let channel = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r.saturating_add(rhs.r),
            self.g.saturating_add(rhs.g),
            self.b.saturating_add(rhs.b),
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Fixed colors for pixels that receive no direct light.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Pixels whose camera ray hits nothing
    pub background: Color,
    /// Hit points blocked from the sunlight
    pub shadow: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            shadow: Color::new(20, 20, 20),
        }
    }
}
