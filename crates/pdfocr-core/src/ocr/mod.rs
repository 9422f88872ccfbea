//! OCR fallback: rasterize every page, then recognize each image.

mod tesseract;

pub use tesseract::Tesseract;

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::error::OcrError;
use crate::models::config::OcrConfig;
use crate::models::input::PdfInput;
use crate::models::result::{ExtractionMethod, ExtractionResult, PAGE_SEPARATOR, page_header};
use crate::raster::Rasterizer;

/// Turns a page image into text.
pub trait TextRecognizer {
    /// Recognize the text in `image` using the given language model.
    fn recognize(&self, image: &DynamicImage, language: &str) -> Result<String, OcrError>;
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for &T {
    fn recognize(&self, image: &DynamicImage, language: &str) -> Result<String, OcrError> {
        (**self).recognize(image, language)
    }
}

/// Called before each page is recognized with `(page, total)`.
pub type PageCallback = Box<dyn Fn(usize, usize)>;

/// Rasterizes a PDF and runs every page through a recognizer.
pub struct OcrExtractor<R, O> {
    rasterizer: R,
    recognizer: O,
    dpi: u32,
    language: String,
    on_page: Option<PageCallback>,
}

impl<R: Rasterizer, O: TextRecognizer> OcrExtractor<R, O> {
    /// Create an extractor with default DPI and language.
    pub fn new(rasterizer: R, recognizer: O) -> Self {
        let defaults = OcrConfig::default();
        Self {
            rasterizer,
            recognizer,
            dpi: defaults.dpi,
            language: defaults.language,
            on_page: None,
        }
    }

    /// Apply DPI and language from configuration.
    pub fn with_config(mut self, config: &OcrConfig) -> Self {
        self.dpi = config.dpi;
        self.language = config.language.clone();
        self
    }

    /// Report progress before each page.
    pub fn with_page_callback(mut self, callback: impl Fn(usize, usize) + 'static) -> Self {
        self.on_page = Some(Box::new(callback));
        self
    }

    /// Rendering resolution.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Recognition language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Extract text through OCR. Failures are returned as a failed result,
    /// never as an error.
    pub fn extract(&self, input: &PdfInput) -> ExtractionResult {
        if input.is_empty() {
            return ExtractionResult::failed(OcrError::NoInput.to_string());
        }

        match self.run(input) {
            Ok((text, page_count)) => {
                ExtractionResult::extracted(text, page_count, ExtractionMethod::Ocr)
            }
            Err(e) => {
                warn!("OCR extraction of {} failed: {}", input, e);
                ExtractionResult::failed(format!("OCR extraction failed: {}", e))
            }
        }
    }

    fn run(&self, input: &PdfInput) -> crate::Result<(String, usize)> {
        let images = self.rasterizer.rasterize(input, self.dpi)?;
        let total = images.len();
        info!("Running OCR on {} pages ({})", total, self.language);

        let mut parts = Vec::with_capacity(total);
        for (index, image) in images.iter().enumerate() {
            let page = index + 1;
            if let Some(on_page) = &self.on_page {
                on_page(page, total);
            }

            let text = self.recognizer.recognize(image, &self.language)?;
            let text = text.trim();
            debug!("Page {}/{}: {} chars recognized", page, total, text.chars().count());
            parts.push(format!("{}\n{}", page_header(page), text));
        }

        Ok((parts.join(PAGE_SEPARATOR), total))
    }
}
