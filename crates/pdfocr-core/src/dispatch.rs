//! Chooses between the embedded text layer and OCR.

use tracing::{debug, info};

use crate::models::config::PdfOcrConfig;
use crate::models::input::PdfInput;
use crate::models::result::ExtractionResult;
use crate::ocr::{OcrExtractor, Tesseract, TextRecognizer};
use crate::pdf::{StandardExtractor, StandardOutcome};
use crate::raster::{Pdftoppm, Rasterizer};

/// Tries the text layer for file inputs, then falls back to OCR.
pub struct Dispatcher<R, O> {
    standard: StandardExtractor,
    ocr: OcrExtractor<R, O>,
}

impl Dispatcher<Pdftoppm, Tesseract> {
    /// Dispatcher using `pdftoppm` and `tesseract` as configured.
    pub fn from_config(config: &PdfOcrConfig) -> Self {
        let rasterizer = Pdftoppm::with_program(&config.tools.pdftoppm);
        let recognizer = Tesseract::with_program(&config.tools.tesseract).with_dpi(config.ocr.dpi);
        Self::new(
            StandardExtractor::from_config(&config.pdf),
            OcrExtractor::new(rasterizer, recognizer).with_config(&config.ocr),
        )
    }
}

impl<R: Rasterizer, O: TextRecognizer> Dispatcher<R, O> {
    /// Combine the two strategies.
    pub fn new(standard: StandardExtractor, ocr: OcrExtractor<R, O>) -> Self {
        Self { standard, ocr }
    }

    /// Replace the OCR strategy, e.g. to attach a progress callback.
    pub fn map_ocr(self, f: impl FnOnce(OcrExtractor<R, O>) -> OcrExtractor<R, O>) -> Self {
        Self {
            standard: self.standard,
            ocr: f(self.ocr),
        }
    }

    /// Extract text from `input`.
    ///
    /// The text layer is only consulted for [`PdfInput::Path`] when
    /// `force_ocr` is false; the OCR result is returned as-is.
    pub fn process(&self, input: &PdfInput, force_ocr: bool) -> ExtractionResult {
        match input {
            PdfInput::Path(path) if !force_ocr => match self.standard.extract(path) {
                StandardOutcome::Extracted(result) => {
                    info!("Extracted embedded text from {}", path.display());
                    return result;
                }
                StandardOutcome::NotApplicable(reason) => {
                    info!("Falling back to OCR for {} ({})", path.display(), reason);
                }
            },
            PdfInput::Path(_) => debug!("OCR forced, skipping text layer"),
            PdfInput::Bytes(_) => debug!("In-memory input, skipping text layer"),
        }

        self.ocr.extract(input)
    }
}
