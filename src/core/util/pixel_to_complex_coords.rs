use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideImage {
        point: Point,
        width: i32,
        height: i32,
    },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideImage {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} image",
                    point.x, point.y, width, height
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to the plane point it samples.
///
/// The vertical axis is inverted exactly once, through the viewport's
/// negative `y_scale`: row 0 samples `y_max` and row `height - 1` samples
/// `y_min + |y_scale|`. Rendering through any other vertical mapping flips
/// the image upside down.
pub fn pixel_to_complex_coords(
    pixel: Point,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !viewport.contains_pixel(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideImage {
            point: pixel,
            width: viewport.image_width(),
            height: viewport.image_height(),
        });
    }

    let real = viewport.x_min() + pixel.x as f64 * viewport.x_scale();
    let imag = viewport.y_max() + pixel.y as f64 * viewport.y_scale();

    Ok(Complex { real, imag })
}
