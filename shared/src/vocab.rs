use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read word list {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("word list {path} contains no words")]
    Empty { path: String },
}

/// The vocabulary list, loaded once and immutable for the life of the
/// process.
///
/// Words are kept in first-seen order for display, with a lookup set for
/// membership checks. All words are lowercased on load; blank lines,
/// duplicates and `#` comments are dropped.
#[derive(Debug, Clone)]
pub struct Vocab {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Vocab {
    /// Loads a word list from a file, one word per line.
    ///
    /// An unreadable file or a list with no usable words is an error; the
    /// server treats either as fatal at startup.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| VocabError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let vocab = Self::from_text(&text);
        if vocab.is_empty() {
            return Err(VocabError::Empty {
                path: path.display().to_string(),
            });
        }
        Ok(vocab)
    }

    /// Parses a word list from text, one word per line.
    pub fn from_text(text: &str) -> Self {
        let mut words = Vec::new();
        let mut index = HashSet::new();
        for line in text.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            let word = word.to_lowercase();
            if index.insert(word.clone()) {
                words.push(word);
            }
        }
        Vocab { words, index }
    }

    /// Case-insensitive membership check.
    pub fn has(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_lowercase())
    }

    /// The ordered, deduplicated word list.
    pub fn as_list(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_one_word_per_line() {
        let vocab = Vocab::from_text("cat\ndog\npig\n");
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.as_list(), ["cat", "dog", "pig"]);
    }

    #[test]
    fn test_skips_blanks_and_comments() {
        let vocab = Vocab::from_text("# header\n\ncat\n   \ndog\n# trailing\n");
        assert_eq!(vocab.as_list(), ["cat", "dog"]);
    }

    #[test]
    fn test_lowercases_and_dedupes_preserving_order() {
        let vocab = Vocab::from_text("Cat\ncat\nDOG\ncat\n");
        assert_eq!(vocab.as_list(), ["cat", "dog"]);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let vocab = Vocab::from_text("  cat  \n\tdog\n");
        assert_eq!(vocab.as_list(), ["cat", "dog"]);
    }

    #[test]
    fn test_has_is_case_insensitive() {
        let vocab = Vocab::from_text("cat\ndog\n");
        assert!(vocab.has("cat"));
        assert!(vocab.has("CAT"));
        assert!(vocab.has("  Cat "));
        assert!(!vocab.has("cow"));
        assert!(!vocab.has(""));
    }

    #[test]
    fn test_empty_text_yields_empty_vocab() {
        let vocab = Vocab::from_text("# nothing here\n\n");
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = Vocab::from_file("no/such/wordlist.txt").unwrap_err();
        match err {
            VocabError::Read { path, .. } => assert!(path.contains("wordlist.txt")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
