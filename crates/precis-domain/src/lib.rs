//! Precis Domain Layer
//!
//! This crate contains the core types for precis. It stays dependency-light
//! (serde only, for the response wire shape) and defines the fundamental
//! concepts and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Tone**: one of four fixed presentation styles selecting a canned
//!   intro sentence
//! - **DocumentKind**: the supported document families, keyed by extension
//! - **SummaryReport**: the fixed-shape JSON record produced per invocation
//!
//! Infrastructure implementations (LLM providers, extraction routines)
//! live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kind;
pub mod report;
pub mod tone;
pub mod traits;

// Re-exports for convenience
pub use kind::DocumentKind;
pub use report::{ErrorReport, FileMeta, SummaryBody, SummaryReport};
pub use tone::Tone;
