//! Text/background pixel classification
//!
//! A pixel is text when its channel-average intensity is below a fixed
//! dark threshold. The input is expected to be a light page with dark ink;
//! inverted scans need to be inverted by the caller.

use hocredit_core::{Color, PixelGrid};
use serde::{Deserialize, Serialize};

/// Default dark-pixel threshold: half of the 16-bit intensity range
pub const DEFAULT_DARK_THRESHOLD: u16 = 0x8000;

/// Classification of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClass {
    /// Dark pixel, possibly part of a glyph
    Text,
    /// Light pixel
    Background,
}

/// Options for pixel classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierOptions {
    /// Intensities strictly below this value (16-bit scale) are text
    pub dark_threshold: u16,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            dark_threshold: DEFAULT_DARK_THRESHOLD,
        }
    }
}

impl ClassifierOptions {
    /// Set the dark threshold on the 16-bit scale
    pub fn with_dark_threshold(mut self, threshold: u16) -> Self {
        self.dark_threshold = threshold;
        self
    }

    /// Classify one pixel
    #[inline]
    pub fn classify(&self, color: Color) -> PixelClass {
        if color.intensity() < self.dark_threshold {
            PixelClass::Text
        } else {
            PixelClass::Background
        }
    }

    /// Shorthand for `classify(color) == PixelClass::Text`
    #[inline]
    pub fn is_text(&self, color: Color) -> bool {
        self.classify(color) == PixelClass::Text
    }
}

/// Classify one pixel with the default threshold
pub fn classify(color: Color) -> PixelClass {
    ClassifierOptions::default().classify(color)
}

/// Row-major text/background map of a whole grid
///
/// Built once per segmentation so the flood fill does not reclassify a
/// pixel each time it is reached from a neighbor.
#[derive(Debug, Clone)]
pub struct TextMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl TextMask {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` is a text pixel. Out-of-range coordinates are background.
    #[inline]
    pub fn is_text(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Number of text pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

/// Classify every pixel of `grid`
pub fn classify_grid<G: PixelGrid + ?Sized>(grid: &G, options: &ClassifierOptions) -> TextMask {
    let (width, height) = (grid.width(), grid.height());
    let mut bits = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            bits.push(options.is_text(grid.at(x, y)));
        }
    }
    TextMask {
        width,
        height,
        bits,
    }
}
