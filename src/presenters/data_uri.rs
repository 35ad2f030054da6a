use crate::core::data::pixel_buffer::PixelBuffer;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbImage};
use std::error::Error;
use std::fmt;
use std::io::Cursor;

pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug)]
pub enum EncodePngError {
    BufferSizeMismatch {
        width: i32,
        height: i32,
        buffer_size: usize,
    },
    Png(image::ImageError),
}

impl fmt::Display for EncodePngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSizeMismatch {
                width,
                height,
                buffer_size,
            } => {
                write!(
                    f,
                    "{} bytes do not hold a {}x{} RGB image",
                    buffer_size, width, height
                )
            }
            Self::Png(err) => write!(f, "png encoding failed: {}", err),
        }
    }
}

impl Error for EncodePngError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BufferSizeMismatch { .. } => None,
            Self::Png(err) => Some(err),
        }
    }
}

/// Encodes the pixel buffer as PNG bytes. Lossless: decoding recovers the
/// buffer's exact pixels and dimensions.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, EncodePngError> {
    let image = RgbImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.buffer().clone(),
    )
    .ok_or(EncodePngError::BufferSizeMismatch {
        width: buffer.width(),
        height: buffer.height(),
        buffer_size: buffer.buffer_size(),
    })?;

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(EncodePngError::Png)?;

    Ok(bytes)
}

/// Wraps PNG bytes as a data URI, ready for an `img` tag's `src` attribute.
#[must_use]
pub fn to_data_uri(png_bytes: &[u8]) -> String {
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(png_bytes))
}
