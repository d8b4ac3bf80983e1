//! Extension dispatch and format-specific readers

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::normalize::{char_prefix, collapse_whitespace};
use precis_domain::DocumentKind;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Cleaned, capped text plus counts for one document
#[derive(Debug, Clone)]
pub struct DocumentText {
    /// Document family the reader dispatched to
    pub kind: DocumentKind,

    /// Whitespace-collapsed text, capped at `max_text_length` characters
    pub text: String,

    /// Whitespace-delimited token count of `text`
    pub word_count: usize,

    /// Character count of `text`
    pub char_count: usize,
}

/// Extract cleaned text from a document on disk
///
/// Dispatches on the (lowercased) file extension. The raw reader output is
/// whitespace-collapsed, capped, and counted.
///
/// # Errors
///
/// - `FileNotFound` if the path does not exist
/// - `UnsupportedExtension` if no reader handles the extension
/// - `Parse` if the format-specific reader rejects the contents
pub fn extract_document(
    path: &Path,
    config: &ExtractConfig,
) -> Result<DocumentText, ExtractError> {
    config.validate()?;

    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let kind = DocumentKind::from_extension(ext)
        .ok_or_else(|| ExtractError::UnsupportedExtension(ext.to_string()))?;

    let data = fs::read(path)?;
    debug!("Read {} bytes from {}", data.len(), path.display());

    let raw = match kind {
        DocumentKind::Plain => read_plain(&data),
        DocumentKind::Pdf => read_pdf(&data)?,
        DocumentKind::Word => read_word(&data)?,
        DocumentKind::Slides => read_slides(&data)?,
    };

    let cleaned = collapse_whitespace(&raw);
    let text = char_prefix(&cleaned, config.max_text_length).to_string();
    let word_count = text.split_whitespace().count();
    let char_count = text.chars().count();

    info!(
        "Extracted {} document: {} words, {} chars",
        kind.as_str(),
        word_count,
        char_count
    );

    Ok(DocumentText {
        kind,
        text,
        word_count,
        char_count,
    })
}

/// Plain text and markdown: decode as UTF-8, lossily
fn read_plain(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

/// PDF: concatenated page text
fn read_pdf(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Parse {
        kind: "pdf",
        reason: e.to_string(),
    })
}

/// Word: paragraph text joined by newlines
///
/// Legacy binary `.doc` files are not OOXML and fail here with a parse
/// error, matching the unsupported-content behavior for that format.
fn read_word(data: &[u8]) -> Result<String, ExtractError> {
    let doc = docx_rs::read_docx(data).map_err(|e| ExtractError::Parse {
        kind: "word",
        reason: e.to_string(),
    })?;

    let mut paragraphs = Vec::new();
    for child in doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = child {
            let mut paragraph = String::new();
            for child in p.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            paragraph.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(paragraph);
        }
    }

    Ok(paragraphs.join("\n"))
}

/// PowerPoint: shape text concatenated per slide, in slide order
fn read_slides(data: &[u8]) -> Result<String, ExtractError> {
    let cursor = std::io::Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor).map_err(|e| ExtractError::Parse {
        kind: "slides",
        reason: e.to_string(),
    })?;

    // Slide parts are ppt/slides/slide1.xml, slide2.xml, ... ; archive order
    // is not slide order, so sort by the embedded number
    let mut slide_names: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .map(|s| s.to_string())
        .collect();

    slide_names.sort_by_key(|name| {
        name.trim_start_matches("ppt/slides/slide")
            .trim_end_matches(".xml")
            .parse::<u32>()
            .unwrap_or(0)
    });

    let mut slides = Vec::new();
    for slide_name in slide_names {
        let mut file = archive.by_name(&slide_name).map_err(|e| ExtractError::Parse {
            kind: "slides",
            reason: e.to_string(),
        })?;

        // Undecodable slide content is bad document data, not an I/O fault
        let mut xml = String::new();
        file.read_to_string(&mut xml).map_err(|e| ExtractError::Parse {
            kind: "slides",
            reason: e.to_string(),
        })?;

        let slide_text = slide_xml_text(&xml);
        if !slide_text.is_empty() {
            slides.push(slide_text);
        }
    }

    Ok(slides.join("\n"))
}

/// Pull the text runs (`<a:t>` elements) out of one slide's XML
fn slide_xml_text(xml: &str) -> String {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut parts = Vec::new();
    let mut in_text_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text_element = true;
                }
            }
            Ok(Event::Text(e)) => {
                if in_text_element {
                    if let Ok(text) = e.unescape() {
                        let text = text.trim();
                        if !text.is_empty() {
                            parts.push(text.to_string());
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text_element = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
    }

    parts.join(" ")
}
