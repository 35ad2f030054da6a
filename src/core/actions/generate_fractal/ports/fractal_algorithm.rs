use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation seam: an algorithm turns a pixel position into a
/// value for that pixel, independently of every other pixel.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
