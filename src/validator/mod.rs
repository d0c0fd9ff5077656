//! Validator Contract
//!
//! Every rule is a self-contained unit implementing [`Validator`]. A rule
//! declares its traversal granularity by overriding the matching capability
//! method; the others stay default no-ops. Lifecycle: construct
//! (uninitialized) → `init` exactly once → `validate_*` any number of times.

pub mod invalid_expression;
pub mod matcher;
pub mod suggest_expression;
pub mod void_section;

pub use invalid_expression::InvalidExpressionValidator;
pub use suggest_expression::SuggestExpressionValidator;
pub use void_section::VoidSectionValidator;

use std::collections::HashMap;

use anyhow::Result;
use serde::Deserialize;

use crate::dict::DictionaryLoader;
use crate::model::{Document, Section, Sentence};
use crate::validation::ErrorCollector;

/// A configuration option value: validators take flat string/bool/number
/// options keyed by validator-scoped names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    String(String),
}

/// Flat named options for one validator instance. An unset optional option
/// is simply absent; accessors return `None` rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ValidatorOptions {
    options: HashMap<String, OptionValue>,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_option(mut self, name: &str, value: OptionValue) -> Self {
        self.options.insert(name.to_string(), value);
        self
    }

    pub fn with_string(self, name: &str, value: &str) -> Self {
        self.with_option(name, OptionValue::String(value.to_string()))
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        match self.options.get(name)? {
            OptionValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.options.get(name)? {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        match self.options.get(name)? {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// The polymorphic rule interface.
///
/// `init` runs exactly once before any validate call; a returned error is
/// fatal for this validator only and excludes it from the run. The validate
/// methods are granularity capabilities with default no-op bodies: a rule
/// overrides the one matching the nodes it inspects. They take `&self` — the
/// tree and any loaded dictionary are read-only during validation, so calls
/// on sibling nodes have no ordering dependency and a shared instance is safe
/// to use from multiple threads.
pub trait Validator: Send + Sync {
    /// Stable name, used as the finding message key and in diagnostics.
    fn name(&self) -> &'static str;

    /// Resolve configuration options and load any dictionary resources.
    fn init(
        &mut self,
        _options: &ValidatorOptions,
        _dictionaries: &mut DictionaryLoader,
    ) -> Result<()> {
        Ok(())
    }

    /// Cross-section checks over the whole document.
    fn validate_document(&self, _document: &Document, _errors: &mut ErrorCollector) {}

    /// Per-section checks; sections arrive in pre-order.
    fn validate_section(&self, _section: &Section, _errors: &mut ErrorCollector) {}

    /// Per-sentence checks; sentences arrive in document order.
    fn validate_sentence(&self, _sentence: &Sentence, _errors: &mut ErrorCollector) {}
}

/// Look up a validator by its configured name.
pub fn create(name: &str) -> Option<Box<dyn Validator>> {
    match name {
        "VoidSection" => Some(Box::new(VoidSectionValidator::new())),
        "SuggestExpression" => Some(Box::new(SuggestExpressionValidator::new())),
        "InvalidExpression" => Some(Box::new(InvalidExpressionValidator::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_accessors() {
        let options = ValidatorOptions::new()
            .with_string("dict", "words.dat")
            .with_option("strict", OptionValue::Bool(true))
            .with_option("limit", OptionValue::Number(3.0));

        assert_eq!(options.get_string("dict"), Some("words.dat"));
        assert_eq!(options.get_bool("strict"), Some(true));
        assert_eq!(options.get_number("limit"), Some(3.0));
        assert_eq!(options.get_string("absent"), None);
        // Wrong type reads as unset, not a panic.
        assert_eq!(options.get_bool("dict"), None);
    }

    #[test]
    fn test_create_known_and_unknown() {
        assert!(create("VoidSection").is_some());
        assert!(create("SuggestExpression").is_some());
        assert!(create("InvalidExpression").is_some());
        assert!(create("NoSuchRule").is_none());
    }
}
