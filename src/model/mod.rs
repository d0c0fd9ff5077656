//! Document Model
//!
//! The structural tree validators inspect: Document → Section → Paragraph →
//! Sentence. Built once by a parser or a `DocumentBuilder`, read-only during
//! validation.

pub mod document;

pub use document::{Document, DocumentBuilder, Paragraph, Section, Sentence};
