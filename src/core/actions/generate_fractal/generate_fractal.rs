use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Computes one value per pixel of the viewport's image, row-major from the
/// top-left corner.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    viewport: Viewport,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..viewport.image_height())
        .flat_map(|y| (0..viewport.image_width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
