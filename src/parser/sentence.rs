//! Sentence Splitter
//!
//! Splits a run of text into sentences on terminators, covering both ASCII
//! and full-width CJK punctuation. Trailing text without a terminator still
//! counts as a sentence.

use std::sync::LazyLock;

use regex::Regex;

/// A terminator plus any closing quotes/brackets that belong to the sentence.
static TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?。！？]+["')\]」』]*"#).expect("terminator pattern is valid")
});

/// Split text into sentences, trimming surrounding whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last = 0;
    for m in TERMINATOR.find_iter(text) {
        let chunk = text[last..m.end()].trim();
        if !chunk.is_empty() {
            sentences.push(chunk.to_string());
        }
        last = m.end();
    }
    let rest = text[last..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}
