//! Start-up checks and the single extraction run.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use anyhow::anyhow;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use pdfocr_core::{Dispatcher, ExtractionResult, PdfInput, PdfOcrConfig};

use crate::Cli;

/// Resolve configuration and input, probe the external tools, then extract.
///
/// Errors are fatal start-up problems; extraction failures come back as an
/// unsuccessful [`ExtractionResult`].
pub fn run(cli: &Cli) -> anyhow::Result<ExtractionResult> {
    let start = Instant::now();

    let config = load_config(cli)?;
    debug!("Configuration: {:?}", config);

    let input = resolve_input(&cli.pdf_file_path)?;

    let capabilities = pdfocr_core::probe(&config.tools, &config.ocr.language)?;
    debug!("Capabilities: {:?}", capabilities);

    info!("Processing {}", input);

    let pb = progress_bar(cli.verbose);
    pb.set_message("Reading PDF...");

    let page_pb = pb.clone();
    let dispatcher = Dispatcher::from_config(&config).map_ocr(|ocr| {
        ocr.with_page_callback(move |page, total| {
            page_pb.set_message(format!("OCR on page {}/{}", page, total));
        })
    });

    let result = dispatcher.process(&input, cli.force_ocr);
    pb.finish_and_clear();

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(result)
}

fn load_config(cli: &Cli) -> anyhow::Result<PdfOcrConfig> {
    let mut config = match &cli.config {
        Some(path) => PdfOcrConfig::from_file(path)
            .map_err(|e| anyhow!("Invalid configuration: {}: {}", path.display(), e))?,
        None => PdfOcrConfig::default(),
    };

    if let Some(dpi) = cli.dpi {
        config.ocr.dpi = dpi;
    }
    if let Some(lang) = &cli.lang {
        config.ocr.language = lang.clone();
    }
    if let Some(min_text_length) = cli.min_text_length {
        config.pdf.min_text_length = min_text_length;
    }

    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}

fn resolve_input(path: &Path) -> anyhow::Result<PdfInput> {
    if path.as_os_str() == "-" {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .map_err(|e| anyhow!("Failed to read PDF from stdin: {}", e))?;
        debug!("Read {} bytes from stdin", data.len());
        return Ok(PdfInput::from_bytes(data));
    }

    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    Ok(PdfInput::from_path(path))
}

fn progress_bar(verbose: u8) -> ProgressBar {
    // Log lines and the spinner would interleave on stderr
    if verbose > 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}");
    if let Ok(style) = style {
        pb.set_style(style);
    }
    pb
}
