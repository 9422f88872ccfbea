//! Direct extraction of the embedded PDF text layer.

mod text_layer;

pub use text_layer::TextLayer;

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::PdfError;
use crate::models::config::PdfConfig;
use crate::models::result::{ExtractionMethod, ExtractionResult, PAGE_SEPARATOR, page_header};

/// Why the text layer was not used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declined {
    /// The file could not be opened or parsed.
    Unreadable(String),
    /// The joined text did not exceed the threshold.
    InsufficientText { chars: usize, threshold: usize },
}

impl fmt::Display for Declined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(reason) => write!(f, "unreadable: {}", reason),
            Self::InsufficientText { chars, threshold } => {
                write!(f, "{} chars of text, need more than {}", chars, threshold)
            }
        }
    }
}

/// Result of trying the text layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardOutcome {
    /// Usable text was found.
    Extracted(ExtractionResult),
    /// Fall back to OCR.
    NotApplicable(Declined),
}

/// Reads the embedded text layer and decides whether it is usable.
#[derive(Debug, Clone)]
pub struct StandardExtractor {
    min_text_length: usize,
}

impl StandardExtractor {
    /// Create an extractor with the default threshold.
    pub fn new() -> Self {
        Self::from_config(&PdfConfig::default())
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self {
            min_text_length: config.min_text_length,
        }
    }

    /// Override the minimum text length.
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Minimum text length the joined text must exceed.
    pub fn min_text_length(&self) -> usize {
        self.min_text_length
    }

    /// Try the text layer of the file at `path`. Never fails: any problem is
    /// reported as [`StandardOutcome::NotApplicable`].
    pub fn extract(&self, path: &Path) -> StandardOutcome {
        let outcome = match TextLayer::open(path) {
            Ok(layer) => self.extract_layer(&layer),
            Err(e) => StandardOutcome::NotApplicable(Declined::Unreadable(e.to_string())),
        };

        if let StandardOutcome::NotApplicable(reason) = &outcome {
            debug!("Text layer of {} not used: {}", path.display(), reason);
        }
        outcome
    }

    /// Apply page joining and the threshold to an already loaded document.
    pub fn extract_layer(&self, layer: &TextLayer) -> StandardOutcome {
        let pages = layer
            .page_numbers()
            .into_iter()
            .map(|page| (page, layer.page_text(page)));
        self.join_pages(pages, layer.page_count())
    }

    /// Join page texts in order. Any page that cannot be read declines the
    /// whole document.
    fn join_pages(
        &self,
        pages: impl IntoIterator<Item = (u32, Result<String, PdfError>)>,
        page_count: usize,
    ) -> StandardOutcome {
        let mut parts = Vec::new();

        for (page, text) in pages {
            let text = match text {
                Ok(text) => text,
                Err(e) => {
                    return StandardOutcome::NotApplicable(Declined::Unreadable(e.to_string()));
                }
            };

            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            parts.push(format!("{}\n{}", page_header(page as usize), text));
        }

        let full_text = parts.join(PAGE_SEPARATOR);
        let chars = full_text.trim().chars().count();

        if chars > self.min_text_length {
            debug!(
                "Text layer usable: {} chars across {} of {} pages",
                chars,
                parts.len(),
                page_count
            );
            StandardOutcome::Extracted(ExtractionResult::extracted(
                full_text,
                page_count,
                ExtractionMethod::Standard,
            ))
        } else {
            StandardOutcome::NotApplicable(Declined::InsufficientText {
                chars,
                threshold: self.min_text_length,
            })
        }
    }
}

impl Default for StandardExtractor {
    fn default() -> Self {
        Self::new()
    }
}
