use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, PixelToComplexCoordsError,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomError {
    SelectionOutsideImage(PixelToComplexCoordsError),
    DegenerateZoom { corner_col: i32, center_col: i32 },
    Viewport(ViewportError),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectionOutsideImage(err) => write!(f, "zoom selection invalid: {}", err),
            Self::DegenerateZoom {
                corner_col,
                center_col,
            } => {
                write!(
                    f,
                    "zoom selection collapses to an empty window: corner column {} equals center column {}",
                    corner_col, center_col
                )
            }
            Self::Viewport(err) => write!(f, "zoomed viewport invalid: {}", err),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SelectionOutsideImage(err) => Some(err),
            Self::DegenerateZoom { .. } => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ZoomError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Computes the next viewport from a zoom selection on the current one.
///
/// The user designates the new view by one corner of a rectangle and its
/// intended center, both in pixel coordinates of the current image. The new
/// view is centered on the plane point under `center` and spans twice the
/// horizontal pixel distance between `corner` and `center`, converted to
/// plane units. Resolution carries over unchanged.
///
/// A selection whose corner and center share a column would produce a
/// zero-width window and is rejected before any viewport is built.
pub fn zoom_viewport(
    viewport: Viewport,
    corner: Point,
    center: Point,
) -> Result<Viewport, ZoomError> {
    if !viewport.contains_pixel(corner) {
        return Err(ZoomError::SelectionOutsideImage(
            PixelToComplexCoordsError::PointOutsideImage {
                point: corner,
                width: viewport.image_width(),
                height: viewport.image_height(),
            },
        ));
    }

    let new_center =
        pixel_to_complex_coords(center, viewport).map_err(ZoomError::SelectionOutsideImage)?;

    let half_span_pixels = (center.x - corner.x).abs();
    let new_domain = 2.0 * half_span_pixels as f64 * viewport.x_scale();

    if new_domain <= 0.0 {
        return Err(ZoomError::DegenerateZoom {
            corner_col: corner.x,
            center_col: center.x,
        });
    }

    Ok(Viewport::create(
        new_center.real,
        new_center.imag,
        new_domain,
        viewport.image_width(),
        viewport.image_height(),
    )?)
}
