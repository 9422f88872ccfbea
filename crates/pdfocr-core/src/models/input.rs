//! Input accepted by the extractors.

use std::fmt;
use std::path::{Path, PathBuf};

/// A PDF handed to the extraction pipeline.
///
/// Only `Path` inputs are eligible for direct text-layer extraction;
/// `Bytes` always go through OCR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfInput {
    /// PDF on disk.
    Path(PathBuf),
    /// PDF held in memory.
    Bytes(Vec<u8>),
}

impl PdfInput {
    /// Create an input referencing a file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Create an input from an in-memory buffer.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(data.into())
    }

    /// The file path, if this input references one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Bytes(_) => None,
        }
    }

    /// True when the input carries no data at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Path(path) => path.as_os_str().is_empty(),
            Self::Bytes(data) => data.is_empty(),
        }
    }
}

impl fmt::Display for PdfInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Bytes(data) => write!(f, "<{} bytes>", data.len()),
        }
    }
}
