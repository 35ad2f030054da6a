use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{hsv_sweep::MandelbrotHsvSweep, power_glow::MandelbrotPowerGlow},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::HsvSweep => Box::new(MandelbrotHsvSweep::new(max_iterations)),
        MandelbrotColourMapKinds::PowerGlow => Box::new(MandelbrotPowerGlow::new(max_iterations)),
    }
}
