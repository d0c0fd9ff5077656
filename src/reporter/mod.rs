//! Finding Reporters
//!
//! Renders the final error sequence for consumption: human-readable plain
//! text or structured JSON. The engine guarantees ordering; rendering makes
//! no further assumptions.

use anyhow::{Context, Result};

use crate::validation::{ErrorLocation, ValidationError};

/// Render findings as one `location: [Key] message` line each.
pub fn render_plain(errors: &[ValidationError]) -> String {
    let mut out = String::new();
    for error in errors {
        let location = match &error.location {
            ErrorLocation::Sentence { line } => format!("line {line}"),
            ErrorLocation::Section { header } => format!("section \"{header}\""),
        };
        let span = match error.span {
            Some((start, end)) => format!(" ({start}..{end})"),
            None => String::new(),
        };
        out.push_str(&format!(
            "{location}: [{}] {}{span}\n",
            error.validator, error.message
        ));
    }
    out
}

/// Render findings as a JSON array.
pub fn render_json(errors: &[ValidationError]) -> Result<String> {
    serde_json::to_string_pretty(errors).context("failed to serialize findings")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<ValidationError> {
        vec![
            ValidationError {
                validator: "InvalidExpression".to_string(),
                message: "Found invalid expression \"may\"".to_string(),
                location: ErrorLocation::Sentence { line: 4 },
                span: Some((16, 19)),
            },
            ValidationError {
                validator: "VoidSection".to_string(),
                message: "Section \"Intro\" has no content".to_string(),
                location: ErrorLocation::Section {
                    header: "Intro".to_string(),
                },
                span: None,
            },
        ]
    }

    #[test]
    fn test_plain_rendering() {
        let text = render_plain(&sample_errors());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "line 4: [InvalidExpression] Found invalid expression \"may\" (16..19)"
        );
        assert_eq!(
            lines[1],
            "section \"Intro\": [VoidSection] Section \"Intro\" has no content"
        );
    }

    #[test]
    fn test_json_rendering_round_trips() {
        let json = render_json(&sample_errors()).expect("render json");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
        assert_eq!(parsed[0]["validator"], "InvalidExpression");
        assert_eq!(parsed[0]["location"]["sentence"]["line"], 4);
    }
}
