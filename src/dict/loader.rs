//! Dictionary Loader
//!
//! Parses line-oriented dictionary resources and caches the result by
//! resolved path, so validators configured with the same resource share one
//! parsed map instead of re-reading the file.
//!
//! Two formats exist:
//! - key→value: one `key<TAB>value` record per line
//! - word list: one expression per line
//!
//! Blank lines and `#` comment lines are skipped in both.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};

/// A loaded key→value dictionary: trigger expression to suggestion text.
///
/// Read-only after construction. Entries are kept sorted so iteration order
/// is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse key→value dictionary content. Every record must have a non-empty
/// key and a tab separator; anything else is a structural error.
pub fn parse_key_value(content: &str) -> Result<Dictionary> {
    let mut entries = BTreeMap::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('\t') else {
            bail!("line {}: expected 'key<TAB>value', got {:?}", idx + 1, line);
        };
        if key.is_empty() {
            bail!("line {}: empty key", idx + 1);
        }
        entries.insert(key.to_string(), value.to_string());
    }
    Ok(Dictionary { entries })
}

/// Parse word-list content: one non-empty expression per line.
pub fn parse_word_list(content: &str) -> Result<BTreeSet<String>> {
    let mut words = BTreeSet::new();
    for raw in content.lines() {
        let line = raw.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        words.insert(line.to_string());
    }
    Ok(words)
}

/// Load-if-absent cache of parsed dictionary resources, keyed by resolved
/// path. Owned by the driver and passed by reference into validator `init`.
#[derive(Debug, Default)]
pub struct DictionaryLoader {
    key_value_cache: HashMap<PathBuf, Arc<Dictionary>>,
    word_list_cache: HashMap<PathBuf, Arc<BTreeSet<String>>>,
}

impl DictionaryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a key→value dictionary, reusing the cached parse for a path that
    /// was loaded before.
    pub fn load_key_value(&mut self, path: &Path) -> Result<Arc<Dictionary>> {
        let resolved = resolve(path)?;
        if let Some(cached) = self.key_value_cache.get(&resolved) {
            return Ok(cached.clone());
        }
        let content = std::fs::read_to_string(&resolved)
            .with_context(|| format!("failed to read dictionary {}", resolved.display()))?;
        let dictionary = Arc::new(
            parse_key_value(&content)
                .with_context(|| format!("malformed dictionary {}", resolved.display()))?,
        );
        log::info!(
            "loaded dictionary {} ({} entries)",
            resolved.display(),
            dictionary.len()
        );
        self.key_value_cache.insert(resolved, dictionary.clone());
        Ok(dictionary)
    }

    /// Load a word-list dictionary, reusing the cached parse for a path that
    /// was loaded before.
    pub fn load_word_list(&mut self, path: &Path) -> Result<Arc<BTreeSet<String>>> {
        let resolved = resolve(path)?;
        if let Some(cached) = self.word_list_cache.get(&resolved) {
            return Ok(cached.clone());
        }
        let content = std::fs::read_to_string(&resolved)
            .with_context(|| format!("failed to read word list {}", resolved.display()))?;
        let words = Arc::new(
            parse_word_list(&content)
                .with_context(|| format!("malformed word list {}", resolved.display()))?,
        );
        log::info!(
            "loaded word list {} ({} entries)",
            resolved.display(),
            words.len()
        );
        self.word_list_cache.insert(resolved, words.clone());
        Ok(words)
    }
}

/// Canonicalize so that different spellings of one path share a cache slot.
fn resolve(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("dictionary path {} does not resolve", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_key_value() {
        let dict = parse_key_value("info\tinformation\n# comment\n\nspec\tspecification\n")
            .expect("parse dictionary");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("info"), Some("information"));
        assert_eq!(dict.get("spec"), Some("specification"));
        assert_eq!(dict.get("missing"), None);
    }

    #[test]
    fn test_parse_key_value_rejects_missing_separator() {
        let err = parse_key_value("no separator here\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_parse_key_value_rejects_empty_key() {
        assert!(parse_key_value("\tvalue\n").is_err());
    }

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("you know\n# comment\nkind of\n\n").expect("parse word list");
        assert_eq!(words.len(), 2);
        assert!(words.contains("you know"));
        assert!(words.contains("kind of"));
    }

    #[test]
    fn test_cache_returns_shared_parse() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dict.dat");
        let mut file = std::fs::File::create(&path).expect("create dict");
        writeln!(file, "info\tinformation").expect("write dict");
        drop(file);

        let mut loader = DictionaryLoader::new();
        let first = loader.load_key_value(&path).expect("first load");
        let second = loader.load_key_value(&path).expect("second load");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let mut loader = DictionaryLoader::new();
        assert!(
            loader
                .load_key_value(Path::new("/nonexistent/dict.dat"))
                .is_err()
        );
    }
}
