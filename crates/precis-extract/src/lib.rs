//! Precis Extraction Layer
//!
//! Pulls plain text out of documents for the summary preview.
//!
//! # Overview
//!
//! The extraction layer dispatches on file extension to one of four readers:
//! plain UTF-8 (`.txt`/`.md`), PDF page text (`.pdf`), Word paragraph text
//! (`.docx`/`.doc`), and PowerPoint slide-shape text (`.pptx`). Whatever the
//! reader produces is whitespace-collapsed, capped at a configurable length,
//! and counted.
//!
//! # Example Usage
//!
//! ```no_run
//! use precis_extract::{extract_document, ExtractConfig};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), precis_extract::ExtractError> {
//! let config = ExtractConfig::default();
//! let doc = extract_document(Path::new("notes.md"), &config)?;
//!
//! println!("{} words, {} chars", doc.word_count, doc.char_count);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod normalize;
mod reader;

pub use config::ExtractConfig;
pub use error::ExtractError;
pub use normalize::{char_prefix, collapse_whitespace};
pub use reader::{extract_document, DocumentText};
