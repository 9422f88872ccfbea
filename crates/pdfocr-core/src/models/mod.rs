//! Data models for pdfocr.

pub mod config;
pub mod input;
pub mod result;
