use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapErrors;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;
use std::error::Error;

const SATURATION: f64 = 0.7;
const VALUE: f64 = 1.0;

/// Full-circle HSV palette: hue runs red through magenta as escape slows,
/// interior points stay black.
#[derive(Debug)]
pub struct MandelbrotHsvSweep {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotHsvSweep {
    fn map(&self, iterations: u32) -> Result<Colour, Box<dyn Error>> {
        if iterations > self.max_iterations {
            return Err(Box::new(MandelbrotColourMapErrors::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            }));
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        // iterations + 1 keeps the fastest escapes off the zero-hue edge
        let fraction = (iterations + 1) as f64 / self.max_iterations as f64;

        Ok(hsv_to_rgb(fraction, SATURATION, VALUE))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotHsvSweep {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::HsvSweep
    }
}

impl MandelbrotHsvSweep {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
