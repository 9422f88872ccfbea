//! Rasterizer backed by poppler's `pdftoppm`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use image::DynamicImage;
use tracing::{debug, trace};

use super::Rasterizer;
use crate::error::RasterError;
use crate::models::input::PdfInput;

const PAGE_PREFIX: &str = "page";

/// Runs `pdftoppm -r <dpi> -png` into a scoped temp dir and loads the pages
/// back into memory. The temp dir is removed when rasterization returns.
#[derive(Debug, Clone)]
pub struct Pdftoppm {
    program: PathBuf,
}

impl Pdftoppm {
    /// Use `pdftoppm` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("pdftoppm")
    }

    /// Use a specific executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable in use.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for Pdftoppm {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for Pdftoppm {
    fn rasterize(&self, input: &PdfInput, dpi: u32) -> Result<Vec<DynamicImage>, RasterError> {
        let workdir = tempfile::Builder::new().prefix("pdfocr-").tempdir()?;

        let source = match input {
            PdfInput::Path(path) => guard_leading_dash(path),
            PdfInput::Bytes(data) => {
                let staged = workdir.path().join("input.pdf");
                std::fs::write(&staged, data)?;
                staged
            }
        };

        debug!("Rasterizing {} at {} DPI", input, dpi);

        let output = Command::new(&self.program)
            .arg("-r")
            .arg(dpi.to_string())
            .arg("-png")
            .arg(&source)
            .arg(workdir.path().join(PAGE_PREFIX))
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RasterError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(RasterError::Failed {
                program: self.program.display().to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let pages = rendered_pages(workdir.path())?;
        let mut images = Vec::with_capacity(pages.len());
        for (number, path) in pages {
            trace!("Loading rendered page {} from {}", number, path.display());
            images.push(image::open(&path)?);
        }

        debug!("Rasterized {} pages", images.len());
        Ok(images)
    }
}

/// `pdftoppm` would read a leading `-` as an option.
fn guard_leading_dash(path: &Path) -> PathBuf {
    if path.is_relative() && path.to_string_lossy().starts_with('-') {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

/// Page images written by `pdftoppm`, sorted by page number. The page
/// number is zero-padded to the width of the page count, so names are
/// parsed rather than sorted lexically.
fn rendered_pages(dir: &Path) -> std::io::Result<Vec<(u32, PathBuf)>> {
    let mut pages = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(number) = page_number(name) {
            pages.push((number, path));
        }
    }
    pages.sort_by_key(|(number, _)| *number);
    Ok(pages)
}

fn page_number(file_name: &str) -> Option<u32> {
    file_name
        .strip_prefix(PAGE_PREFIX)?
        .strip_prefix('-')?
        .strip_suffix(".png")?
        .parse()
        .ok()
}
