//! Text Extractor: turns uploaded PDF/DOCX bytes into plain text.
//!
//! Pure and synchronous. Callers on the async runtime should run it inside
//! `tokio::task::spawn_blocking`; PDF parsing is CPU-bound and proportional to
//! document size.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Document part holding the body text of a DOCX package.
const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("Invalid file name")]
    InvalidFileName,

    #[error("Unsupported file format '{0}'. Please upload PDF or DOCX only.")]
    UnsupportedFormat(String),

    #[error("Could not read {format} document: {reason}")]
    CorruptDocument {
        format: DocumentFormat,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from the extension after the last `.` (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let (_, extension) = file_name
            .rsplit_once('.')
            .ok_or(ExtractError::InvalidFileName)?;

        match extension.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        })
    }
}

/// Extracts plain text from `bytes`, choosing the parser from `file_name`'s extension.
#[allow(dead_code)]
pub fn extract(bytes: &[u8], file_name: &str) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_file_name(file_name)?;
    extract_with_format(bytes, format)
}

pub fn extract_with_format(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => extract_pdf(bytes),
        DocumentFormat::Docx => extract_docx(bytes),
    }
}

fn corrupt(format: DocumentFormat, reason: impl std::fmt::Display) -> ExtractError {
    ExtractError::CorruptDocument {
        format,
        reason: reason.to_string(),
    }
}

/// Page text in page order, joined with whatever whitespace pdf-extract emits.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract can panic on malformed font or content streams instead of
    // returning an error.
    let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(corrupt(DocumentFormat::Pdf, e)),
        Err(_) => Err(corrupt(DocumentFormat::Pdf, "parser aborted on malformed content")),
    }
}

/// Paragraph text in document order, one paragraph per line.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| corrupt(DocumentFormat::Docx, e))?;

    let mut body_xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(|_| corrupt(DocumentFormat::Docx, format!("missing {DOCX_BODY_PART}")))?
        .read_to_string(&mut body_xml)
        .map_err(|e| corrupt(DocumentFormat::Docx, e))?;

    paragraphs_from_document_xml(&body_xml)
}

/// Walks `word/document.xml`. Paragraphs may nest (text boxes hold their own
/// `w:p` elements inside a run of the enclosing paragraph); the enclosing
/// paragraph's text so far is emitted as its own line before the nested one.
fn paragraphs_from_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut output = String::new();
    let mut paragraph = String::new();
    let mut paragraph_depth = 0usize;
    // Tab and break elements only carry text inside a run; `w:pPr/w:tabs`
    // holds tab-stop definitions with the same element name.
    let mut run_depth = 0usize;
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    if paragraph_depth > 0 && !paragraph.is_empty() {
                        output.push_str(&paragraph);
                        output.push('\n');
                    }
                    paragraph.clear();
                    paragraph_depth += 1;
                }
                b"r" => run_depth += 1,
                b"t" => in_text_run = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"tab" if run_depth > 0 => paragraph.push('\t'),
                b"br" | b"cr" if run_depth > 0 => paragraph.push('\n'),
                // Self-closing paragraph: an empty line in the output.
                b"p" => output.push('\n'),
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    output.push_str(&paragraph);
                    output.push('\n');
                    paragraph.clear();
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                }
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text_run = false,
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text_run => {
                let text = e.unescape().map_err(|e| corrupt(DocumentFormat::Docx, e))?;
                paragraph.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(corrupt(DocumentFormat::Docx, e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(output)
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// One-page PDF with `text` set in a base-14 font.
    pub fn build_pdf(text: &str) -> Vec<u8> {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }
}
