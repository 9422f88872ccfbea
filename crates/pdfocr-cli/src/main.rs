//! CLI application for extracting text from PDF files with OCR fallback.

mod extract;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pdfocr_core::ExtractionResult;

/// Printed as the JSON error for any argument problem.
const USAGE: &str = "Usage: pdfocr <pdf_file_path> [--force-ocr]";

/// Extract text from a PDF, falling back to OCR for scanned documents
#[derive(Parser)]
#[command(name = "pdfocr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// PDF file to read (`-` reads the PDF from stdin and always uses OCR)
    pdf_file_path: PathBuf,

    /// Skip the embedded text layer and always run OCR
    #[arg(long)]
    force_ocr: bool,

    /// Enable verbose output on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rasterization DPI for OCR
    #[arg(long)]
    dpi: Option<u32>,

    /// Tesseract language (e.g. "eng", "eng+deu")
    #[arg(long)]
    lang: Option<String>,

    /// Characters the embedded text must exceed to skip OCR
    #[arg(long)]
    min_text_length: Option<usize>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => return emit(&ExtractionResult::failed(USAGE), ExitCode::FAILURE),
    };

    // Set up logging based on verbosity; stdout is reserved for the result
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {}", e);
    }

    match extract::run(&cli) {
        Ok(result) => emit(&result, ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!("Aborting: {:#}", e);
            emit(&ExtractionResult::failed(e.to_string()), ExitCode::FAILURE)
        }
    }
}

/// Print the result as indented JSON and return `code`.
fn emit(result: &ExtractionResult, code: ExitCode) -> ExitCode {
    match result.to_json_pretty() {
        Ok(json) => {
            println!("{}", json);
            code
        }
        Err(e) => {
            eprintln!("failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
    }
}
