//! Suggest Expression Validator
//!
//! Reports expressions from a key→value dictionary found in a sentence,
//! suggesting the configured replacement.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::dict::{Dictionary, DictionaryLoader};
use crate::model::Sentence;
use crate::validation::ErrorCollector;
use crate::validator::matcher::find_expression;
use crate::validator::{Validator, ValidatorOptions};

/// Sentence-level check suggesting replacements for matched expressions.
///
/// The `dict` option names the key→value resource. It is optional: without
/// it the validator stays active with an empty dictionary and reports
/// nothing. Only the first occurrence of each key per sentence is reported.
#[derive(Debug, Default)]
pub struct SuggestExpressionValidator {
    synonyms: Arc<Dictionary>,
}

impl SuggestExpressionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct with an in-memory dictionary, bypassing `init`.
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            synonyms: Arc::new(dictionary),
        }
    }
}

impl Validator for SuggestExpressionValidator {
    fn name(&self) -> &'static str {
        "SuggestExpression"
    }

    fn init(
        &mut self,
        options: &ValidatorOptions,
        dictionaries: &mut DictionaryLoader,
    ) -> Result<()> {
        match options.get_string("dict") {
            Some(path) => {
                self.synonyms = dictionaries.load_key_value(Path::new(path))?;
            }
            None => {
                log::warn!("{}: no dictionary configured, nothing to match", self.name());
            }
        }
        Ok(())
    }

    fn validate_sentence(&self, sentence: &Sentence, errors: &mut ErrorCollector) {
        for (expression, suggestion) in self.synonyms.iter() {
            if let Some(m) = find_expression(&sentence.content, expression) {
                errors.add_sentence_error_with_span(
                    self.name(),
                    sentence,
                    format!("Found \"{expression}\"; consider \"{suggestion}\" instead"),
                    m.start,
                    m.end,
                );
            }
        }
    }
}
