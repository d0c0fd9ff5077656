//! Void Section Validator
//!
//! Flags sections that carry no content: either no paragraphs at all, or a
//! paragraph with zero sentences.

use crate::model::Section;
use crate::validation::ErrorCollector;
use crate::validator::Validator;

/// Section-level check for empty content.
///
/// Level-0 sections are synthetic placeholders created by parsers for content
/// before the first heading and are exempt. At most one error is emitted per
/// section no matter how many of its paragraphs are empty.
#[derive(Debug, Default)]
pub struct VoidSectionValidator;

impl VoidSectionValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for VoidSectionValidator {
    fn name(&self) -> &'static str {
        "VoidSection"
    }

    fn validate_section(&self, section: &Section, errors: &mut ErrorCollector) {
        if section.level() == 0 {
            return;
        }
        if section.paragraph_count() == 0 {
            errors.add_section_error(
                self.name(),
                section,
                format!("Section \"{}\" has no content", section.joined_header()),
            );
            return;
        }
        for paragraph in section.paragraphs() {
            if paragraph.sentence_count() == 0 {
                errors.add_section_error(
                    self.name(),
                    section,
                    format!("Section \"{}\" has no content", section.joined_header()),
                );
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Sentence};

    fn run(section: &Section) -> Vec<crate::validation::ValidationError> {
        let validator = VoidSectionValidator::new();
        let mut collector = ErrorCollector::new();
        validator.validate_section(section, &mut collector);
        collector.into_errors()
    }

    fn paragraph_with(text: &str) -> Paragraph {
        let mut p = Paragraph::new();
        p.add_sentence(Sentence::new(text, 1));
        p
    }

    #[test]
    fn test_level_zero_is_exempt() {
        let section = Section::new(0, Vec::new());
        assert!(run(&section).is_empty());
    }

    #[test]
    fn test_section_without_paragraphs() {
        let section = Section::new(1, vec!["Overview".to_string()]);
        let errors = run(&section);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Overview"));
    }

    #[test]
    fn test_one_error_despite_many_empty_paragraphs() {
        let mut section = Section::new(2, vec!["Details".to_string()]);
        section.add_paragraph(Paragraph::new());
        section.add_paragraph(Paragraph::new());
        section.add_paragraph(paragraph_with("Finally some text."));
        assert_eq!(run(&section).len(), 1);
    }

    #[test]
    fn test_filled_section_is_clean() {
        let mut section = Section::new(1, vec!["Body".to_string()]);
        section.add_paragraph(paragraph_with("All good here."));
        assert!(run(&section).is_empty());
    }
}
