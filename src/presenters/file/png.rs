use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::data_uri::encode_png;
use std::error::Error;
use std::path::Path;

/// Writes a pixel buffer to disk as a PNG file, creating parent directories
/// as needed.
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
    ) -> Result<(), Box<dyn Error>> {
        let bytes = encode_png(buffer)?;

        if let Some(parent) = filepath.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(filepath, bytes)?;

        Ok(())
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
