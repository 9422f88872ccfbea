//! Error types for the pdfocr-core library.

use thiserror::Error;

/// Main error type for the pdfocr library.
#[derive(Error, Debug)]
pub enum PdfOcrError {
    /// Rasterization error.
    #[error("rasterization error: {0}")]
    Raster(#[from] RasterError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading the embedded text layer.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from a page.
    #[error("failed to extract text from page {page}: {reason}")]
    TextExtraction { page: u32, reason: String },

    /// The PDF is encrypted and the empty password did not open it.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// I/O error while reading the file.
    #[error("failed to read PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to converting PDF pages into images.
#[derive(Error, Debug)]
pub enum RasterError {
    /// The rasterizer process could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The rasterizer exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// A rendered page image could not be decoded.
    #[error("failed to load rendered page: {0}")]
    Image(#[from] image::ImageError),

    /// Temporary workspace or input staging failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR engine process could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The OCR engine exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The page image could not be encoded for the engine.
    #[error("failed to encode page image: {0}")]
    Encode(#[from] image::ImageError),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// No input was supplied.
    #[error("No PDF input provided")]
    NoInput,
}

/// Start-up capability errors.
#[derive(Error, Debug)]
pub enum DependencyError {
    /// A required tool could not be launched.
    #[error("Missing dependency: {tool} ({reason}). Please install poppler-utils and tesseract-ocr")]
    Missing { tool: String, reason: String },

    /// The OCR engine has no data for the requested language.
    #[error("Missing dependency: tesseract language data for '{language}'. Please install tesseract-ocr-{language}")]
    MissingLanguage { language: String },
}

/// Result type for the pdfocr library.
pub type Result<T> = std::result::Result<T, PdfOcrError>;
