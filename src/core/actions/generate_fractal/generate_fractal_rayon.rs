use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Parallel twin of [`generate_fractal`], using rayon's work-stealing
/// scheduler.
///
/// Pixels share no state, so the only synchronisation is collecting the
/// results back into grid order. Must produce exactly the same grid as the
/// sequential version for the same inputs.
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_rayon<Alg>(
    viewport: Viewport,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let pixels: Vec<Point> = (0..viewport.image_height())
        .flat_map(|y| (0..viewport.image_width()).map(move |x| Point { x, y }))
        .collect();

    pixels
        .into_par_iter()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
