//! Recognizer backed by the `tesseract` command-line engine.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::trace;

use super::TextRecognizer;
use crate::error::OcrError;

/// Pipes a PNG-encoded page to `tesseract stdin stdout` and returns the
/// recognized text.
#[derive(Debug, Clone)]
pub struct Tesseract {
    program: PathBuf,
    dpi: u32,
}

impl Tesseract {
    /// Use `tesseract` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("tesseract")
    }

    /// Use a specific executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            dpi: 300,
        }
    }

    /// Resolution the page images were rendered at. Passed to the engine
    /// since PNGs piped through stdin carry no reliable density.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Executable in use.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for Tesseract {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for Tesseract {
    fn recognize(&self, image: &DynamicImage, language: &str) -> Result<String, OcrError> {
        let (width, height) = image.dimensions();
        trace!("Recognizing {}x{} page image ({})", width, height, language);

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        let mut child = Command::new(&self.program)
            .arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(language)
            .arg("--dpi")
            .arg(self.dpi.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| OcrError::Spawn {
                program: self.program_name(),
                source,
            })?;

        // Dropping the handle closes stdin so the engine starts processing.
        let sent = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(&png),
            None => Ok(()),
        };

        let output = child.wait_with_output().map_err(|e| {
            OcrError::Recognition(format!("failed to read {} output: {}", self.program_name(), e))
        })?;

        // An engine that exits early breaks the pipe; its stderr says why.
        if !output.status.success() {
            return Err(OcrError::Failed {
                program: self.program_name(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        sent.map_err(|e| {
            OcrError::Recognition(format!("failed to send image to {}: {}", self.program_name(), e))
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
