use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

const DEFAULT_CENTER_X: f64 = -0.65;
const DEFAULT_CENTER_Y: f64 = 0.0;
const DEFAULT_DOMAIN: f64 = 3.4;
const DEFAULT_IMAGE_WIDTH: i32 = 720;
const DEFAULT_IMAGE_HEIGHT: i32 = 540;

/// The deployment's first-load view: the whole set, centered slightly left
/// of the origin.
#[must_use]
pub fn default_viewport() -> Viewport {
    Viewport::create(
        DEFAULT_CENTER_X,
        DEFAULT_CENTER_Y,
        DEFAULT_DOMAIN,
        DEFAULT_IMAGE_WIDTH,
        DEFAULT_IMAGE_HEIGHT,
    )
    .expect("default viewport parameters are valid")
}

/// Immutable render settings, passed into the engine per render. There is no
/// process-wide mutable rendering state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub colour_map_kind: MandelbrotColourMapKinds,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
        }
    }
}
