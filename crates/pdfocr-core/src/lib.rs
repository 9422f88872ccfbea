//! Core library for PDF text extraction with OCR fallback.
//!
//! This crate provides:
//! - Direct extraction of the embedded PDF text layer
//! - Page rasterization through poppler's `pdftoppm`
//! - OCR of rasterized pages through `tesseract`
//! - The dispatcher that tries the text layer first and falls back to OCR

pub mod deps;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod raster;

#[cfg(test)]
pub(crate) mod test_support;

pub use deps::{Capabilities, probe};
pub use dispatch::Dispatcher;
pub use error::{DependencyError, OcrError, PdfError, PdfOcrError, RasterError, Result};
pub use models::config::PdfOcrConfig;
pub use models::input::PdfInput;
pub use models::result::{ExtractionMetadata, ExtractionMethod, ExtractionResult};
pub use ocr::{OcrExtractor, Tesseract, TextRecognizer};
pub use pdf::{Declined, StandardExtractor, StandardOutcome};
pub use raster::{Pdftoppm, Rasterizer};
