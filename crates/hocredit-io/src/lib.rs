//! hocredit-io - Decoding images into rasters
//!
//! The segmentation engine works on any [`PixelGrid`]; this crate is the
//! adapter that turns image files and in-memory buffers into an owned
//! [`Raster`]. Decoding is delegated to the `image` crate.
//!
//! Gray, gray+alpha, RGB and RGBA 8-bit images keep their layout. Any other
//! layout (16-bit, floating point) is converted to 8-bit RGBA.

mod error;

pub use error::{IoError, IoResult};

use hocredit_core::{Raster, SampleLayout};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Detect the container format of an image file from its contents
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let reader = ImageReader::open(path.as_ref())?.with_guessed_format()?;
    reader.format().ok_or_else(|| {
        IoError::UnsupportedFormat(format!("{}", path.as_ref().display()))
    })
}

/// Read an image file into a raster
pub fn read_raster<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    raster_from_image(&img)
}

/// Decode an in-memory image into a raster
pub fn decode_raster(data: &[u8]) -> IoResult<Raster> {
    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()?;
    raster_from_image(&img)
}

/// Convert a decoded image into a raster
///
/// # Errors
///
/// Returns [`IoError::Core`] for zero-sized images.
pub fn raster_from_image(img: &DynamicImage) -> IoResult<Raster> {
    let (w, h) = (img.width(), img.height());
    let raster = match img {
        DynamicImage::ImageLuma8(buf) => {
            Raster::from_raw(w, h, SampleLayout::Gray, buf.as_raw().clone())?
        }
        DynamicImage::ImageLumaA8(buf) => {
            Raster::from_raw(w, h, SampleLayout::GrayAlpha, buf.as_raw().clone())?
        }
        DynamicImage::ImageRgb8(buf) => {
            Raster::from_raw(w, h, SampleLayout::Rgb, buf.as_raw().clone())?
        }
        DynamicImage::ImageRgba8(buf) => {
            Raster::from_raw(w, h, SampleLayout::Rgba, buf.as_raw().clone())?
        }
        other => Raster::from_raw(w, h, SampleLayout::Rgba, other.to_rgba8().into_raw())?,
    };
    Ok(raster)
}
