//! Extraction result emitted as JSON.

use serde::{Deserialize, Serialize};

/// Header placed before each page's text.
pub fn page_header(page: usize) -> String {
    format!("--- Page {} ---", page)
}

/// Separator between page blocks.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Which strategy produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Embedded text layer.
    Standard,
    /// Rasterization followed by OCR.
    Ocr,
}

/// Metadata attached to a successful extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Number of pages in the document (or images rasterized for OCR).
    pub page_count: usize,
    /// Strategy used.
    pub method: ExtractionMethod,
}

/// Outcome of one extraction.
///
/// Either `text` and `metadata` are set (`success == true`) or `error` is set
/// (`success == false`). Use [`ExtractionResult::extracted`] and
/// [`ExtractionResult::failed`] to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<ExtractionMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ExtractionResult {
    /// Successful extraction.
    pub fn extracted(text: String, page_count: usize, method: ExtractionMethod) -> Self {
        Self {
            success: true,
            text: Some(text),
            metadata: Some(ExtractionMetadata { page_count, method }),
            error: None,
        }
    }

    /// Failed extraction.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: None,
            metadata: None,
            error: Some(error.into()),
        }
    }

    /// Whether text was extracted.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extracted text, if successful.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Metadata, if successful.
    pub fn metadata(&self) -> Option<ExtractionMetadata> {
        self.metadata
    }

    /// Failure message, if unsuccessful.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Strategy used, if successful.
    pub fn method(&self) -> Option<ExtractionMethod> {
        self.metadata.map(|m| m.method)
    }

    /// Page count, if successful.
    pub fn page_count(&self) -> Option<usize> {
        self.metadata.map(|m| m.page_count)
    }

    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
