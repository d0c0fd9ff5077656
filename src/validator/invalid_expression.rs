//! Invalid Expression Validator
//!
//! Reports expressions from a word-list dictionary found in a sentence.
//! Ships embedded default dictionaries for English and Japanese; a custom
//! list can be configured instead.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::dict::loader::parse_word_list;
use crate::dict::DictionaryLoader;
use crate::model::Sentence;
use crate::validation::ErrorCollector;
use crate::validator::matcher::find_expression;
use crate::validator::{Validator, ValidatorOptions};

const DEFAULT_EN: &str = include_str!("../../resources/dictionaries/invalid-expression-en.dat");
const DEFAULT_JA: &str = include_str!("../../resources/dictionaries/invalid-expression-ja.dat");

/// Sentence-level check against a list of forbidden expressions.
///
/// Options: `dict` selects a custom word-list resource; otherwise `lang`
/// (`en` or `ja`, default `en`) selects one of the embedded defaults. Only
/// the first occurrence of each expression per sentence is reported.
#[derive(Debug, Default)]
pub struct InvalidExpressionValidator {
    expressions: Arc<BTreeSet<String>>,
}

impl InvalidExpressionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct with an in-memory expression list, bypassing `init`.
    pub fn with_expressions<I, S>(expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expressions: Arc::new(expressions.into_iter().map(Into::into).collect()),
        }
    }
}

impl Validator for InvalidExpressionValidator {
    fn name(&self) -> &'static str {
        "InvalidExpression"
    }

    fn init(
        &mut self,
        options: &ValidatorOptions,
        dictionaries: &mut DictionaryLoader,
    ) -> Result<()> {
        if let Some(path) = options.get_string("dict") {
            self.expressions = dictionaries.load_word_list(Path::new(path))?;
            return Ok(());
        }

        let lang = options.get_string("lang").unwrap_or("en");
        let embedded = match lang {
            "en" => DEFAULT_EN,
            "ja" => DEFAULT_JA,
            other => {
                log::warn!(
                    "{}: no default dictionary for language {:?}, falling back to en",
                    self.name(),
                    other
                );
                DEFAULT_EN
            }
        };
        self.expressions = Arc::new(
            parse_word_list(embedded).context("embedded default dictionary is malformed")?,
        );
        Ok(())
    }

    fn validate_sentence(&self, sentence: &Sentence, errors: &mut ErrorCollector) {
        for expression in self.expressions.iter() {
            if let Some(m) = find_expression(&sentence.content, expression) {
                errors.add_sentence_error_with_span(
                    self.name(),
                    sentence,
                    format!("Found invalid expression \"{expression}\""),
                    m.start,
                    m.end,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(validator: &InvalidExpressionValidator, text: &str) -> Vec<crate::validation::ValidationError> {
        let mut collector = ErrorCollector::new();
        validator.validate_sentence(&Sentence::new(text, 1), &mut collector);
        collector.into_errors()
    }

    #[test]
    fn test_simple_match() {
        let validator = InvalidExpressionValidator::with_expressions(["may"]);
        let errors = run(&validator, "The experiments may be true.");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, Some((16, 19)));
    }

    #[test]
    fn test_empty_sentence() {
        let validator = InvalidExpressionValidator::with_expressions(["may"]);
        assert!(run(&validator, "").is_empty());
    }

    #[test]
    fn test_default_english_dictionary() {
        let mut validator = InvalidExpressionValidator::new();
        validator
            .init(&ValidatorOptions::new(), &mut DictionaryLoader::new())
            .expect("init with embedded dictionary");
        let errors = run(&validator, "He is a super man.");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_default_japanese_dictionary() {
        let mut validator = InvalidExpressionValidator::new();
        let options = ValidatorOptions::new().with_string("lang", "ja");
        validator
            .init(&options, &mut DictionaryLoader::new())
            .expect("init with embedded dictionary");
        let errors = run(&validator, "明日地球が滅亡するってマジですか。");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let mut validator = InvalidExpressionValidator::new();
        let options = ValidatorOptions::new().with_string("lang", "xx");
        assert!(
            validator
                .init(&options, &mut DictionaryLoader::new())
                .is_ok()
        );
    }
}
