//! Validation Runner
//!
//! Owns the registered validators, drives their lifecycle (register → init →
//! validate), and walks the document tree in the reference order:
//! document-level checks, then sections in pre-order, then sentences in
//! document order.

use crate::dict::DictionaryLoader;
use crate::model::Document;
use crate::validation::errors::{ErrorCollector, ValidationError};
use crate::validator::{Validator, ValidatorOptions};

/// Diagnostic for a validator that failed initialization and was excluded
/// from the run. Not a `ValidationError`: this is operator-facing, so broken
/// configuration can be fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct InitFailure {
    pub validator: String,
    pub reason: String,
}

/// Drives registered validators over a document.
///
/// Validators are registered uninitialized, then `init` moves each into the
/// active set or records an `InitFailure`. A failed init disables that
/// validator only; the rest of the run is unaffected.
#[derive(Default)]
pub struct ValidationRunner {
    pending: Vec<(Box<dyn Validator>, ValidatorOptions)>,
    active: Vec<Box<dyn Validator>>,
}

impl ValidationRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an uninitialized validator with its configuration options.
    pub fn register(&mut self, validator: Box<dyn Validator>, options: ValidatorOptions) {
        self.pending.push((validator, options));
    }

    /// Initialize every pending validator exactly once.
    ///
    /// Returns the diagnostics for validators whose init failed; those are
    /// excluded from the active set and never receive a validate call.
    pub fn init(&mut self, dictionaries: &mut DictionaryLoader) -> Vec<InitFailure> {
        let mut failures = Vec::new();
        for (mut validator, options) in self.pending.drain(..) {
            match validator.init(&options, dictionaries) {
                Ok(()) => self.active.push(validator),
                Err(err) => {
                    log::error!("validator {} disabled: {:#}", validator.name(), err);
                    failures.push(InitFailure {
                        validator: validator.name().to_string(),
                        reason: format!("{err:#}"),
                    });
                }
            }
        }
        failures
    }

    /// Names of the validators that survived initialization.
    pub fn active_validators(&self) -> Vec<&str> {
        self.active.iter().map(|v| v.name()).collect()
    }

    /// Walk the document and collect every finding, in traversal order.
    ///
    /// The tree is read-only here; validators only append to the collector,
    /// so a validator finding nothing on a node is indistinguishable from a
    /// disabled one.
    pub fn validate(&self, document: &Document) -> Vec<ValidationError> {
        let mut collector = ErrorCollector::new();

        for validator in &self.active {
            validator.validate_document(document, &mut collector);
        }
        for section in document.sections_preorder() {
            for validator in &self.active {
                validator.validate_section(section, &mut collector);
            }
        }
        for sentence in document.sentences() {
            for validator in &self.active {
                validator.validate_sentence(sentence, &mut collector);
            }
        }

        collector.into_errors()
    }
}
