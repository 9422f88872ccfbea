//! Rendering PDF pages into images.

mod pdftoppm;

pub use pdftoppm::Pdftoppm;

use image::DynamicImage;

use crate::error::RasterError;
use crate::models::input::PdfInput;

/// Converts every page of a PDF into an image, in page order.
pub trait Rasterizer {
    /// Render all pages of `input` at `dpi`.
    fn rasterize(&self, input: &PdfInput, dpi: u32) -> Result<Vec<DynamicImage>, RasterError>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn rasterize(&self, input: &PdfInput, dpi: u32) -> Result<Vec<DynamicImage>, RasterError> {
        (**self).rasterize(input, dpi)
    }
}
