//! Validation Errors
//!
//! Findings are the intended output of a run, not failures: validators append
//! them to an `ErrorCollector` and traversal continues regardless.

use serde::Serialize;

use crate::model::{Section, Sentence};

/// Where in the document a finding points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorLocation {
    /// A sentence, identified by its document-relative line number.
    Sentence { line: usize },
    /// A section, identified by its joined header text.
    Section { header: String },
}

/// One reported finding. Created exactly once by the validator that detected
/// the condition, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Message key: the name of the validator that produced the finding.
    pub validator: String,
    /// Human-readable description of the finding.
    pub message: String,
    pub location: ErrorLocation,
    /// Start/end character offsets within the source sentence, when the
    /// finding points at a specific span.
    pub span: Option<(usize, usize)>,
}

/// Append-only accumulator for findings, in discovery order.
///
/// No deduplication happens here; a validator that could report the same
/// condition twice suppresses the duplicate itself.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<ValidationError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_sentence_error(&mut self, validator: &str, sentence: &Sentence, message: String) {
        self.add(ValidationError {
            validator: validator.to_string(),
            message,
            location: ErrorLocation::Sentence {
                line: sentence.position,
            },
            span: None,
        });
    }

    pub fn add_sentence_error_with_span(
        &mut self,
        validator: &str,
        sentence: &Sentence,
        message: String,
        start: usize,
        end: usize,
    ) {
        self.add(ValidationError {
            validator: validator.to_string(),
            message,
            location: ErrorLocation::Sentence {
                line: sentence.position,
            },
            span: Some((start, end)),
        });
    }

    pub fn add_section_error(&mut self, validator: &str, section: &Section, message: String) {
        self.add(ValidationError {
            validator: validator.to_string(),
            message,
            location: ErrorLocation::Section {
                header: section.joined_header(),
            },
            span: None,
        });
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_preserves_discovery_order() {
        let mut collector = ErrorCollector::new();
        let sentence = Sentence::new("text", 3);
        collector.add_sentence_error("A", &sentence, "first".to_string());
        collector.add_sentence_error("B", &sentence, "second".to_string());

        let errors = collector.into_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "first");
        assert_eq!(errors[1].message, "second");
        assert_eq!(errors[0].location, ErrorLocation::Sentence { line: 3 });
    }

    #[test]
    fn test_collector_does_not_deduplicate() {
        let mut collector = ErrorCollector::new();
        let sentence = Sentence::new("text", 1);
        collector.add_sentence_error("A", &sentence, "same".to_string());
        collector.add_sentence_error("A", &sentence, "same".to_string());
        assert_eq!(collector.len(), 2);
    }
}
