use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::path::Path;

pub trait FilePresenterPort {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
    ) -> Result<(), Box<dyn Error>>;
}
