//! Document Parser
//!
//! Builds the document tree from plain text with markdown-style headings.
//! `#`-prefixed lines open sections (level = number of `#`), blank lines
//! separate paragraphs, and everything before the first heading lands in a
//! synthetic level-0 root section.

pub mod sentence;

pub use sentence::split_sentences;

use crate::model::{Document, DocumentBuilder};

/// Parse document text into the structural tree.
///
/// Sentence positions are 1-based line numbers into the input.
pub fn parse_document(text: &str) -> Document {
    let mut builder = DocumentBuilder::new();
    let mut in_paragraph = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end();

        if let Some((level, header)) = parse_heading(line) {
            builder.add_section(level, header);
            in_paragraph = false;
            continue;
        }

        if line.trim().is_empty() {
            in_paragraph = false;
            continue;
        }

        if !in_paragraph {
            builder.add_paragraph();
            in_paragraph = true;
        }
        for sentence in split_sentences(line) {
            builder.add_sentence(sentence, idx + 1);
        }
    }

    builder.build()
}

/// Recognize a `#`-prefixed heading line; returns (level, header tokens).
fn parse_heading(line: &str) -> Option<(usize, Vec<String>)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    let header = rest
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();
    Some((hashes, header))
}
