//! Start-up check for the external programs the OCR path needs.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::DependencyError;
use crate::models::config::ToolConfig;

/// Versions and language data of the tools found at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// First line of `pdftoppm -v`.
    pub pdftoppm_version: String,
    /// First line of `tesseract --version`.
    pub tesseract_version: String,
    /// Languages reported by `tesseract --list-langs`.
    pub languages: Vec<String>,
}

/// Verify that the rasterizer and OCR engine can be launched and that the
/// engine has data for `language` (`+`-separated lists are accepted).
pub fn probe(tools: &ToolConfig, language: &str) -> Result<Capabilities, DependencyError> {
    let pdftoppm_version = first_line(&run_tool(&tools.pdftoppm, "-v")?);
    let tesseract_version = first_line(&run_tool(&tools.tesseract, "--version")?);
    let languages = parse_language_list(&run_tool(&tools.tesseract, "--list-langs")?);

    debug!("tesseract languages: {}", languages.join(", "));
    check_language(&languages, language)?;

    info!("Using {} and {}", pdftoppm_version, tesseract_version);
    Ok(Capabilities {
        pdftoppm_version,
        tesseract_version,
        languages,
    })
}

/// Run `program arg` and return stdout followed by stderr. The exit status
/// is ignored since older tools exit non-zero for version queries.
fn run_tool(program: &Path, arg: &str) -> Result<String, DependencyError> {
    let output = Command::new(program)
        .arg(arg)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| DependencyError::Missing {
            tool: program.display().to_string(),
            reason: e.to_string(),
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(text)
}

fn first_line(output: &str) -> String {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("unknown version")
        .to_string()
}

/// Parse `tesseract --list-langs`, skipping the header line.
pub fn parse_language_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("List of available languages"))
        .filter(|line| !line.contains(char::is_whitespace))
        .map(str::to_string)
        .collect()
}

fn check_language(available: &[String], language: &str) -> Result<(), DependencyError> {
    for wanted in language.split('+').map(str::trim).filter(|l| !l.is_empty()) {
        if !available.iter().any(|l| l == wanted) {
            return Err(DependencyError::MissingLanguage {
                language: wanted.to_string(),
            });
        }
    }
    Ok(())
}
