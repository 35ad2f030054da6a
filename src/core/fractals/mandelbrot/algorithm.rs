use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, PixelToComplexCoordsError,
};

/// Escape-time iteration for the Mandelbrot set over one viewport.
///
/// Each pixel's constant `c` is its plane sample; the recurrence is
/// `z_{n+1} = z_n² + c` seeded with `z_0 = 0`. The result is the first
/// iteration index at which `|z|` exceeds the escape radius, or
/// `max_iterations` when the orbit never escapes — the interior marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.viewport)?;
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > self.escape_radius_squared {
                return Ok(iteration);
            }
            z = z * z + c;
        }

        Ok(self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        viewport: Viewport,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if escape_radius <= 0.0 {
            return Err(MandelbrotError::NonPositiveEscapeRadiusError { escape_radius });
        }

        Ok(Self {
            viewport,
            max_iterations,
            escape_radius_squared: escape_radius * escape_radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 8x8 image over a plane window of width 8 centered on the origin:
    // every pixel sample lands on integer coordinates, x_scale = 1
    fn unit_viewport() -> Viewport {
        Viewport::create(0.0, 0.0, 8.0, 8, 8).unwrap()
    }

    #[test]
    fn test_origin_never_escapes() {
        let algorithm = MandelbrotAlgorithm::new(unit_viewport(), 100, 2.0).unwrap();

        // pixel (4, 4) samples c = 0 + 0i
        let count = algorithm.compute(Point { x: 4, y: 4 }).unwrap();

        assert_eq!(count, 100);
    }

    #[test]
    fn test_c_equals_two_escapes_at_iteration_two() {
        let algorithm = MandelbrotAlgorithm::new(unit_viewport(), 100, 2.0).unwrap();

        // pixel (6, 4) samples c = 2: orbit 0 → 2 → 6, |6|² > 4
        let count = algorithm.compute(Point { x: 6, y: 4 }).unwrap();

        assert_eq!(count, 2);
    }

    #[test]
    fn test_minus_two_stays_bounded() {
        let algorithm = MandelbrotAlgorithm::new(unit_viewport(), 100, 2.0).unwrap();

        // c = -2 orbits 0 → -2 → 2 → 2 → ...; |2|² never exceeds 4
        let count = algorithm.compute(Point { x: 2, y: 4 }).unwrap();

        assert_eq!(count, 100);
    }

    #[test]
    fn test_escape_radius_changes_the_cut() {
        // pixel (11, 8) samples c = 1.5: orbit 0 → 1.5 → 3.75
        let viewport = Viewport::create(0.0, 0.0, 8.0, 16, 16).unwrap();
        let pixel = Point { x: 11, y: 8 };

        let wide = MandelbrotAlgorithm::new(viewport, 100, 2.0).unwrap();
        let tight = MandelbrotAlgorithm::new(viewport, 100, 1.4).unwrap();

        assert_eq!(wide.compute(pixel).unwrap(), 2);
        assert_eq!(tight.compute(pixel).unwrap(), 1);
    }

    #[test]
    fn test_count_is_capped_by_max_iterations() {
        let algorithm = MandelbrotAlgorithm::new(unit_viewport(), 5, 2.0).unwrap();

        let count = algorithm.compute(Point { x: 4, y: 4 }).unwrap();

        assert_eq!(count, 5);
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let result = MandelbrotAlgorithm::new(unit_viewport(), 0, 2.0);

        assert_eq!(result, Err(MandelbrotError::ZeroMaxIterationsError));
    }

    #[test]
    fn test_non_positive_escape_radius_is_rejected() {
        let zero = MandelbrotAlgorithm::new(unit_viewport(), 100, 0.0);
        let negative = MandelbrotAlgorithm::new(unit_viewport(), 100, -2.0);

        assert_eq!(
            zero,
            Err(MandelbrotError::NonPositiveEscapeRadiusError { escape_radius: 0.0 })
        );
        assert_eq!(
            negative,
            Err(MandelbrotError::NonPositiveEscapeRadiusError {
                escape_radius: -2.0
            })
        );
    }

    #[test]
    fn test_pixel_outside_viewport_fails() {
        let algorithm = MandelbrotAlgorithm::new(unit_viewport(), 100, 2.0).unwrap();

        let result = algorithm.compute(Point { x: 8, y: 0 });

        assert!(matches!(
            result,
            Err(PixelToComplexCoordsError::PointOutsideImage { .. })
        ));
    }
}
