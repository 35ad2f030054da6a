use crate::core::data::colour::Colour;
use std::error::Error;

/// Colour assignment seam: maps one computed pixel value to an RGB colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error>>;

    fn display_name(&self) -> &str;
}
