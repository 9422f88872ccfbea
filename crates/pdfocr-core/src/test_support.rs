//! Helpers shared by the unit tests: PDF fixtures built with lopdf and
//! in-memory stand-ins for the external tools.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use image::DynamicImage;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use tempfile::TempDir;

use crate::error::{OcrError, RasterError};
use crate::models::input::PdfInput;
use crate::ocr::TextRecognizer;
use crate::raster::Rasterizer;

/// Build a PDF with one page per entry. Empty entries produce pages with no
/// text operations.
pub fn text_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut data = Vec::new();
    doc.save_to(&mut data).expect("save pdf");
    data
}

/// Write bytes to `doc.pdf` in a fresh temp dir. Keep the dir alive while
/// the path is in use.
pub fn write_pdf(data: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("doc.pdf");
    std::fs::write(&path, data).expect("write pdf");
    (dir, path)
}

/// Write an executable shell script named `name` into `dir`.
#[cfg(unix)]
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("make script executable");
    path
}

/// Rasterizer returning a fixed number of blank pages, or an error.
pub struct FakeRasterizer {
    pages: usize,
    fail: bool,
    pub calls: RefCell<Vec<PdfInput>>,
}

impl FakeRasterizer {
    pub fn pages(pages: usize) -> Self {
        Self {
            pages,
            fail: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            pages: 0,
            fail: true,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Rasterizer for FakeRasterizer {
    fn rasterize(&self, input: &PdfInput, _dpi: u32) -> Result<Vec<DynamicImage>, RasterError> {
        self.calls.borrow_mut().push(input.clone());
        if self.fail {
            return Err(RasterError::Io(std::io::Error::other("Unable to get page count")));
        }
        Ok((0..self.pages).map(|_| DynamicImage::new_rgb8(8, 8)).collect())
    }
}

/// Recognizer answering with scripted text per call.
pub struct FakeRecognizer {
    responses: Vec<Result<String, String>>,
    next: Cell<usize>,
    pub languages: RefCell<Vec<String>>,
}

impl FakeRecognizer {
    pub fn texts(texts: &[&str]) -> Self {
        Self {
            responses: texts.iter().map(|t| Ok(t.to_string())).collect(),
            next: Cell::new(0),
            languages: RefCell::new(Vec::new()),
        }
    }

    pub fn script(responses: Vec<Result<String, String>>) -> Self {
        Self {
            responses,
            next: Cell::new(0),
            languages: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.next.get()
    }
}

impl TextRecognizer for FakeRecognizer {
    fn recognize(&self, _image: &DynamicImage, language: &str) -> Result<String, OcrError> {
        let index = self.next.get();
        self.next.set(index + 1);
        self.languages.borrow_mut().push(language.to_string());
        match self.responses.get(index) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(reason)) => Err(OcrError::Recognition(reason.clone())),
            None => Ok(String::new()),
        }
    }
}
