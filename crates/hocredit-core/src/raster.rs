//! Raster - read-only pixel grids
//!
//! The segmentation engine only ever reads pixels. [`PixelGrid`] is the
//! seam between the engine and whatever decoded the image; [`Raster`] is the
//! owned implementation used by the I/O crate and the test fixtures.
//!
//! # Pixel layout
//!
//! - Samples are stored row-major, 8 bits per channel
//! - Rows are tightly packed (no padding)
//! - Channel order follows [`SampleLayout`]

use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::WordBox;

/// Read-only access to a decoded image
///
/// Implementations must return a color for every `(x, y)` with
/// `x < width()` and `y < height()`. Callers never ask for coordinates
/// outside that range.
pub trait PixelGrid {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Color at `(x, y)`, origin at the top-left corner
    fn at(&self, x: u32, y: u32) -> Color;

    /// Check whether the grid has no pixels
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn at(&self, x: u32, y: u32) -> Color {
        (**self).at(x, y)
    }
}

/// Channel layout of a [`Raster`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleLayout {
    /// One gray channel
    Gray,
    /// Gray + alpha
    GrayAlpha,
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl SampleLayout {
    /// Number of 8-bit channels per pixel
    pub fn channels(self) -> usize {
        match self {
            SampleLayout::Gray => 1,
            SampleLayout::GrayAlpha => 2,
            SampleLayout::Rgb => 3,
            SampleLayout::Rgba => 4,
        }
    }
}

/// Owned 8-bit image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    layout: SampleLayout,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster with every pixel set to `fill`
    ///
    /// `fill` is converted to `layout`; only its intensity survives when
    /// converting color to gray.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new_filled(width: u32, height: u32, layout: SampleLayout, fill: Color) -> Result<Self> {
        check_dimensions(width, height)?;
        let pixel = encode(fill, layout);
        let data = pixel.repeat(width as usize * height as usize);
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Create a white 8-bit grayscale raster
    pub fn new_gray(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, SampleLayout::Gray, Color::WHITE)
    }

    /// Wrap an existing sample buffer
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or `data.len()` is not
    /// `width * height * layout.channels()`.
    pub fn from_raw(width: u32, height: u32, layout: SampleLayout, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Sample layout
    pub fn layout(&self) -> SampleLayout {
        self.layout
    }

    /// Raw sample buffer
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a pixel, or `None` if out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.layout.channels();
        let i = self.offset(x, y);
        let s = &self.data[i..i + c];
        Some(match self.layout {
            SampleLayout::Gray => Color::Gray(s[0]),
            SampleLayout::GrayAlpha => Color::GrayAlpha(s[0], s[1]),
            SampleLayout::Rgb => Color::Rgb(s[0], s[1], s[2]),
            SampleLayout::Rgba => Color::Rgba(s[0], s[1], s[2], s[3]),
        })
    }

    /// Set a pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` lies outside the raster.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let c = self.layout.channels();
        let i = self.offset(x, y);
        self.data[i..i + c].copy_from_slice(&encode(color, self.layout));
        Ok(())
    }

    /// Paint a rectangle, clipped to the raster
    ///
    /// Returns the number of pixels written.
    pub fn fill_rect(&mut self, rect: &WordBox, color: Color) -> u32 {
        let x0 = rect.x.max(0) as i64;
        let y0 = rect.y.max(0) as i64;
        let x1 = (rect.right() as i64).min(self.width as i64);
        let y1 = (rect.bottom() as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return 0;
        }

        let pixel = encode(color, self.layout);
        let c = self.layout.channels();
        for y in y0..y1 {
            let start = self.offset(x0 as u32, y as u32);
            let end = start + (x1 - x0) as usize * c;
            for chunk in self.data[start..end].chunks_exact_mut(c) {
                chunk.copy_from_slice(&pixel);
            }
        }
        ((x1 - x0) * (y1 - y0)) as u32
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.layout.channels()
    }
}

impl PixelGrid for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn at(&self, x: u32, y: u32) -> Color {
        self.get(x, y).unwrap_or(Color::WHITE)
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

/// Encode a color into the channel bytes of `layout`
fn encode(color: Color, layout: SampleLayout) -> Vec<u8> {
    let (r, g, b, a) = match color {
        Color::Gray(v) => (v, v, v, 255),
        Color::GrayAlpha(v, a) => (v, v, v, a),
        Color::Rgb(r, g, b) => (r, g, b, 255),
        Color::Rgba(r, g, b, a) => (r, g, b, a),
        Color::Gray16(v) => {
            let v = (v >> 8) as u8;
            (v, v, v, 255)
        }
        Color::Rgb16(r, g, b) => ((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8, 255),
    };
    let gray = (color.intensity() >> 8) as u8;
    match layout {
        SampleLayout::Gray => vec![gray],
        SampleLayout::GrayAlpha => vec![gray, a],
        SampleLayout::Rgb => vec![r, g, b],
        SampleLayout::Rgba => vec![r, g, b, a],
    }
}
