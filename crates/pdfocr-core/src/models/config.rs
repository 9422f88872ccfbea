//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PdfOcrError;

/// Main configuration for pdfocr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOcrConfig {
    /// Embedded text-layer configuration.
    pub pdf: PdfConfig,

    /// Rasterization and OCR configuration.
    pub ocr: OcrConfig,

    /// External tool locations.
    pub tools: ToolConfig,
}

/// Embedded text-layer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum length (characters, page headers included) the joined text
    /// must exceed for the text layer to be used instead of OCR.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 50 }
    }
}

/// Rasterization and OCR configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// DPI for rendering PDF pages to images.
    pub dpi: u32,

    /// Tesseract language code.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            language: "eng".to_string(),
        }
    }
}

/// Locations of the external programs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// poppler `pdftoppm` executable.
    pub pdftoppm: PathBuf,

    /// `tesseract` executable.
    pub tesseract: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            pdftoppm: PathBuf::from("pdftoppm"),
            tesseract: PathBuf::from("tesseract"),
        }
    }
}

impl PdfOcrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(content: &str) -> crate::Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| PdfOcrError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| PdfOcrError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.ocr.dpi == 0 {
            return Err(PdfOcrError::Config("ocr.dpi must be greater than 0".to_string()));
        }
        if self.ocr.language.trim().is_empty() {
            return Err(PdfOcrError::Config("ocr.language must not be empty".to_string()));
        }
        Ok(())
    }
}
