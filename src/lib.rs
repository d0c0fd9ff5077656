//! Prosevet
//!
//! Rule-based prose inspection: parses documents into a structural tree and
//! runs configurable validators over it.
//!
//! This library provides:
//! - The document tree model (Document → Section → Paragraph → Sentence)
//! - The validator contract and built-in rules
//! - Dictionary loading with per-path caching
//! - Error collection and reporting

pub mod config;
pub mod dict;
pub mod model;
pub mod parser;
pub mod reporter;
pub mod validation;
pub mod validator;

// Re-exports for clean public API
pub use config::{Args, RunConfig};
pub use dict::{Dictionary, DictionaryLoader};
pub use model::{Document, DocumentBuilder, Paragraph, Section, Sentence};
pub use parser::parse_document;
pub use validation::{ErrorCollector, InitFailure, ValidationError, ValidationRunner};
pub use validator::{Validator, ValidatorOptions};
