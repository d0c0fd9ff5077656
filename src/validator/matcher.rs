//! Expression Matcher
//!
//! Shared literal-substring matching for dictionary-driven validators. A hit
//! is the first occurrence of the key in the sentence, accepted when it sits
//! on a word boundary, or unconditionally when the key starts in a script
//! written without inter-word spacing (where boundary characters do not
//! exist).

/// A matched expression span, in character offsets within the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionMatch {
    pub start: usize,
    pub end: usize,
}

/// Find the first literal occurrence of `expression` in `text` and accept it
/// under the boundary rules.
///
/// Word boundary means the characters immediately before and after the match
/// (when present) are not alphabetic. Digits and punctuation count as
/// boundaries on purpose; shipped dictionaries depend on that exact rule.
pub fn find_expression(text: &str, expression: &str) -> Option<ExpressionMatch> {
    if expression.is_empty() {
        return None;
    }
    let start = text.find(expression)?;
    let end = start + expression.len();

    let first = text[start..].chars().next()?;
    let boundary_before = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphabetic());
    let boundary_after = text[end..].chars().next().is_none_or(|c| !c.is_alphabetic());

    if is_unspaced_script(first) || (boundary_before && boundary_after) {
        let char_start = text[..start].chars().count();
        let char_end = char_start + expression.chars().count();
        return Some(ExpressionMatch {
            start: char_start,
            end: char_end,
        });
    }
    None
}

/// Whether a character belongs to a script family without whitespace-delimited
/// words (Japanese kana and CJK ideographs). Kept as an explicit range lookup
/// so the behavior is deterministic and locale-independent.
pub fn is_unspaced_script(ch: char) -> bool {
    matches!(ch,
        '\u{3040}'..='\u{309F}'   // hiragana
        | '\u{30A0}'..='\u{30FF}' // katakana
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{FF66}'..='\u{FF9F}' // halfwidth katakana
    )
}
