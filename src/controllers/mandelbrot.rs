use crate::controllers::history::{HistoryError, PlotHistory};
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
use crate::core::actions::zoom_viewport::{zoom_viewport, ZoomError};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use crate::presenters::data_uri::{encode_png, to_data_uri, EncodePngError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum PlotError {
    Mandelbrot(MandelbrotError),
    Fractal(PixelToComplexCoordsError),
    PixelBuffer(GeneratePixelBufferError),
    Encode(EncodePngError),
    Zoom(ZoomError),
    History(HistoryError),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot(err) => write!(f, "algorithm setup failed: {}", err),
            Self::Fractal(err) => write!(f, "fractal generation failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "colour assignment failed: {}", err),
            Self::Encode(err) => write!(f, "image encoding failed: {}", err),
            Self::Zoom(err) => write!(f, "zoom failed: {}", err),
            Self::History(err) => write!(f, "history lookup failed: {}", err),
        }
    }
}

impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mandelbrot(err) => Some(err),
            Self::Fractal(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Zoom(err) => Some(err),
            Self::History(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for PlotError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<PixelToComplexCoordsError> for PlotError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Fractal(err)
    }
}

impl From<GeneratePixelBufferError> for PlotError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<EncodePngError> for PlotError {
    fn from(err: EncodePngError) -> Self {
        Self::Encode(err)
    }
}

impl From<ZoomError> for PlotError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}

impl From<HistoryError> for PlotError {
    fn from(err: HistoryError) -> Self {
        Self::History(err)
    }
}

/// Renders one viewport through the whole pipeline and returns the
/// embeddable `data:image/png;base64,...` string.
pub fn plot_data_uri(viewport: Viewport, config: &MandelbrotConfig) -> Result<String, PlotError> {
    let algorithm = MandelbrotAlgorithm::new(viewport, config.max_iterations, config.escape_radius)?;
    let iterations = generate_fractal_rayon(viewport, &algorithm)?;

    let colour_map = mandelbrot_colour_map_factory(config.colour_map_kind, config.max_iterations);
    let pixel_buffer = generate_pixel_buffer(
        iterations,
        &colour_map,
        viewport.image_width(),
        viewport.image_height(),
    )?;

    let png = encode_png(&pixel_buffer)?;

    Ok(to_data_uri(&png))
}

/// Zooms in on the history's current plot and renders the result.
///
/// The new viewport is appended only after the render succeeds, so a failed
/// selection leaves the history untouched and the caller can keep showing
/// the current plot.
pub fn zoom_plot(
    history: &mut PlotHistory,
    corner: Point,
    center: Point,
    config: &MandelbrotConfig,
) -> Result<String, PlotError> {
    let next = zoom_viewport(history.current(), corner, center)?;
    let data_uri = plot_data_uri(next, config)?;
    history.append(next);

    Ok(data_uri)
}

/// Re-renders a previously plotted page and makes it the current one.
pub fn recall_plot(
    history: &mut PlotHistory,
    page: usize,
    config: &MandelbrotConfig,
) -> Result<String, PlotError> {
    let viewport = history.visit(page)?;

    plot_data_uri(viewport, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::mandelbrot_config::default_viewport;
    use crate::presenters::data_uri::DATA_URI_PREFIX;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    fn decode(data_uri: &str) -> image::RgbImage {
        let payload = data_uri.strip_prefix(DATA_URI_PREFIX).unwrap();
        let bytes = STANDARD.decode(payload).unwrap();

        image::load_from_memory(&bytes).unwrap().to_rgb8()
    }

    fn small_viewport() -> Viewport {
        Viewport::create(-0.65, 0.0, 3.4, 40, 30).unwrap()
    }

    #[test]
    fn test_plot_data_uri_is_embeddable() {
        let uri = plot_data_uri(small_viewport(), &MandelbrotConfig::default()).unwrap();

        assert!(uri.starts_with(DATA_URI_PREFIX));
    }

    #[test]
    fn test_plot_round_trips_to_the_configured_resolution() {
        let uri = plot_data_uri(small_viewport(), &MandelbrotConfig::default()).unwrap();

        assert_eq!(decode(&uri).dimensions(), (40, 30));
    }

    #[test]
    fn test_default_plot_colours_interior_and_exterior() {
        let config = MandelbrotConfig::default();

        let uri = plot_data_uri(default_viewport(), &config).unwrap();
        let image = decode(&uri);

        assert_eq!(image.dimensions(), (720, 540));

        // column 498, row 270 is the pixel nearest the plane origin, deep
        // inside the main cardioid
        assert_eq!(image.get_pixel(498, 270).0, [0, 0, 0]);

        // the top-left corner samples (-2.35, 1.275), outside the escape
        // radius, so it escapes within a couple of iterations
        assert_ne!(image.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_zoom_plot_appends_to_history() {
        let mut history = PlotHistory::new(small_viewport());
        let config = MandelbrotConfig::default();

        let uri = zoom_plot(
            &mut history,
            Point { x: 5, y: 5 },
            Point { x: 20, y: 15 },
            &config,
        )
        .unwrap();

        assert!(uri.starts_with(DATA_URI_PREFIX));
        assert_eq!(history.page_count(), 2);
        assert_eq!(history.current_page(), 1);
        assert!(history.current().domain() < small_viewport().domain());
    }

    #[test]
    fn test_failed_zoom_leaves_history_untouched() {
        let mut history = PlotHistory::new(small_viewport());
        let config = MandelbrotConfig::default();

        let result = zoom_plot(
            &mut history,
            Point { x: 20, y: 5 },
            Point { x: 20, y: 15 },
            &config,
        );

        assert!(matches!(
            result,
            Err(PlotError::Zoom(ZoomError::DegenerateZoom { .. }))
        ));
        assert_eq!(history.page_count(), 1);
        assert_eq!(history.current_page(), 0);
    }

    #[test]
    fn test_recall_plot_rerenders_an_earlier_page() {
        let mut history = PlotHistory::new(small_viewport());
        let config = MandelbrotConfig::default();

        zoom_plot(
            &mut history,
            Point { x: 5, y: 5 },
            Point { x: 20, y: 15 },
            &config,
        )
        .unwrap();

        let first = plot_data_uri(small_viewport(), &config).unwrap();
        let recalled = recall_plot(&mut history, 0, &config).unwrap();

        assert_eq!(recalled, first);
        assert_eq!(history.current_page(), 0);
    }

    #[test]
    fn test_recall_plot_signals_missing_pages() {
        let mut history = PlotHistory::new(small_viewport());
        let config = MandelbrotConfig::default();

        let result = recall_plot(&mut history, 7, &config);

        assert!(matches!(
            result,
            Err(PlotError::History(HistoryError::PageNotFound {
                page: 7,
                pages: 1
            }))
        ));
    }
}
