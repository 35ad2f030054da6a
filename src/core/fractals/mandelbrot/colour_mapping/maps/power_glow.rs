use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapErrors;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;
use std::error::Error;

const HUE_BASE: f64 = 0.66;
const HUE_SPAN: f64 = 0.34;
const HUE_EXPONENT: f64 = 0.4;
const SATURATION_BASE: f64 = 0.9;
const SATURATION_FALLOFF: f64 = 0.55;
const VALUE: f64 = 1.0;

/// Power-law palette: hue climbs from deep blue towards red along
/// `fraction^exponent` while saturation falls off, washing out the slowest
/// escapes so the set boundary stands out. Interior points stay black.
#[derive(Debug)]
pub struct MandelbrotPowerGlow {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotPowerGlow {
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

        let fraction = (iterations + 1) as f64 / self.max_iterations as f64;
        let hue = HUE_BASE + HUE_SPAN * fraction.powf(HUE_EXPONENT);
        let saturation = SATURATION_BASE - SATURATION_FALLOFF * fraction;

        Ok(hsv_to_rgb(hue, saturation, VALUE))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotPowerGlow {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::PowerGlow
    }
}

impl MandelbrotPowerGlow {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
