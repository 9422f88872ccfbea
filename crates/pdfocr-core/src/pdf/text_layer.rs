//! Embedded text-layer access using lopdf.

use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace};

use crate::error::PdfError;

/// A loaded PDF whose content streams can be read page by page.
pub struct TextLayer {
    document: Document,
}

impl TextLayer {
    /// Read and parse a PDF file.
    pub fn open(path: &Path) -> Result<Self, PdfError> {
        let data = std::fs::read(path)?;
        Self::load(&data)
    }

    /// Parse a PDF held in memory.
    pub fn load(data: &[u8]) -> Result<Self, PdfError> {
        let mut document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(Self { document })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Page numbers (1-indexed) in document order.
    pub fn page_numbers(&self) -> Vec<u32> {
        self.document.get_pages().into_keys().collect()
    }

    /// Extract the embedded text of a single page.
    pub fn page_text(&self, page: u32) -> Result<String, PdfError> {
        let text = self
            .document
            .extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction {
                page,
                reason: e.to_string(),
            })?;
        trace!("Page {}: {} chars of embedded text", page, text.len());
        Ok(text)
    }
}
