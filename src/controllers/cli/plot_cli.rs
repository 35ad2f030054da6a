use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::mandelbrot_config::{default_viewport, MandelbrotConfig};
use std::{path::Path, time::Instant};

/// Renders the default view from the command line and hands the result to a
/// file presenter — how the deployment's pre-rendered first-load asset gets
/// produced.
pub struct CliPlotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliPlotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let config = MandelbrotConfig::default();
        let viewport = default_viewport();

        println!("Rendering Mandelbrot set...");
        println!(
            "Image size: {}x{}",
            viewport.image_width(),
            viewport.image_height()
        );
        println!("Max iterations: {}", config.max_iterations);

        let algorithm =
            MandelbrotAlgorithm::new(viewport, config.max_iterations, config.escape_radius)?;
        let start = Instant::now();
        let iterations = generate_fractal_rayon(viewport, &algorithm)?;
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        let colour_map =
            mandelbrot_colour_map_factory(config.colour_map_kind, config.max_iterations);

        self.buffer = Some(generate_pixel_buffer(
            iterations,
            &colour_map,
            viewport.image_width(),
            viewport.image_height(),
        )?);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?;
        }

        Ok(())
    }
}
