use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidDomain { domain: f64 },
    InvalidResolution { width: i32, height: i32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { domain } => {
                write!(f, "viewport domain must be positive: {}", domain)
            }
            Self::InvalidResolution { width, height } => {
                write!(
                    f,
                    "viewport resolution must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// A rectangular window into the complex plane mapped onto a fixed pixel
/// grid.
///
/// The window is described by its center `(xc, yc)` and its width `domain`
/// in plane units; the height follows from the image's aspect ratio. All
/// bounds and scale factors are derived together at construction and the
/// value is immutable afterwards. `y_scale` carries a negative sign: pixel
/// rows grow downward while the imaginary axis grows upward, and that single
/// sign flip is the only vertical inversion in the pipeline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    xc: f64,
    yc: f64,
    domain: f64,
    image_width: i32,
    image_height: i32,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_scale: f64,
    y_scale: f64,
}

impl Viewport {
    pub fn create(
        xc: f64,
        yc: f64,
        domain: f64,
        image_width: i32,
        image_height: i32,
    ) -> Result<Self, ViewportError> {
        if domain <= 0.0 {
            return Err(ViewportError::InvalidDomain { domain });
        }

        if image_width <= 0 || image_height <= 0 {
            return Err(ViewportError::InvalidResolution {
                width: image_width,
                height: image_height,
            });
        }

        let y_range = domain * image_height as f64 / image_width as f64;
        let x_scale = domain / image_width as f64;

        Ok(Self {
            xc,
            yc,
            domain,
            image_width,
            image_height,
            x_min: xc - domain / 2.0,
            x_max: xc + domain / 2.0,
            y_min: yc - y_range / 2.0,
            y_max: yc + y_range / 2.0,
            x_scale,
            y_scale: -x_scale,
        })
    }

    #[must_use]
    pub fn xc(&self) -> f64 {
        self.xc
    }

    #[must_use]
    pub fn yc(&self) -> f64 {
        self.yc
    }

    #[must_use]
    pub fn domain(&self) -> f64 {
        self.domain
    }

    #[must_use]
    pub fn image_width(&self) -> i32 {
        self.image_width
    }

    #[must_use]
    pub fn image_height(&self) -> i32 {
        self.image_height
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        pixel.x >= 0 && pixel.x < self.image_width && pixel.y >= 0 && pixel.y < self.image_height
    }
}
