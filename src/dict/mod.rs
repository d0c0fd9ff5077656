//! Dictionary System
//!
//! Loading and caching of the text resources dictionary-driven validators
//! match against: key→value tables and plain word lists.

pub mod loader;

pub use loader::{Dictionary, DictionaryLoader};
