//! Pixel color values
//!
//! A [`Color`] is what a [`PixelGrid`](crate::PixelGrid) hands back for one
//! sample position. Decoded images come in several layouts; rather than
//! forcing every caller into RGBA, the variants keep the native layout and
//! [`Color::intensity`] projects all of them onto one 16-bit scale.

use serde::{Deserialize, Serialize};

/// Maximum value of the shared 16-bit intensity scale
pub const MAX_INTENSITY: u16 = u16::MAX;

/// A single pixel value in its native sample layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// 8-bit grayscale
    Gray(u8),
    /// 8-bit grayscale with alpha
    GrayAlpha(u8, u8),
    /// 8-bit RGB
    Rgb(u8, u8, u8),
    /// 8-bit RGBA
    Rgba(u8, u8, u8, u8),
    /// 16-bit grayscale
    Gray16(u16),
    /// 16-bit RGB
    Rgb16(u16, u16, u16),
}

/// Widen an 8-bit sample to 16 bits (0xff -> 0xffff)
#[inline]
fn widen(v: u8) -> u16 {
    v as u16 * 257
}

impl Color {
    /// Opaque white in 8-bit grayscale
    pub const WHITE: Color = Color::Gray(255);
    /// Opaque black in 8-bit grayscale
    pub const BLACK: Color = Color::Gray(0);

    /// Average of the color channels on a 16-bit scale.
    ///
    /// Alpha is ignored: a fully transparent black pixel is still dark.
    /// Gray inputs return their single channel.
    pub fn intensity(&self) -> u16 {
        match *self {
            Color::Gray(v) | Color::GrayAlpha(v, _) => widen(v),
            Color::Gray16(v) => v,
            Color::Rgb(r, g, b) | Color::Rgba(r, g, b, _) => {
                average3(widen(r), widen(g), widen(b))
            }
            Color::Rgb16(r, g, b) => average3(r, g, b),
        }
    }
}

#[inline]
fn average3(r: u16, g: u16, b: u16) -> u16 {
    ((r as u32 + g as u32 + b as u32) / 3) as u16
}
