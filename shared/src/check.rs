use crate::letterbag::LetterBag;
use crate::vocab::Vocab;

/// Verdict on a submitted attempt.
///
/// Each variant carries the normalized (trimmed, lowercased) word so callers
/// can record it or build a message without normalizing again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Attempt was empty after trimming.
    Empty,
    /// Word was already counted this game.
    AlreadyFound(String),
    /// Word is not on the vocabulary list.
    NotInVocab(String),
    /// Word is on the list but can't be spelled from the jumble.
    NotInJumble(String),
    /// A new, valid word.
    Match(String),
}

/// Decides whether an attempt is a new valid word for this game.
///
/// An attempt is a [`Outcome::Match`] iff it is on the vocabulary list, its
/// letters are a multiset subset of the jumble, and it has not been found
/// before. When several rejection reasons hold at once, the order is:
/// already-found, then not-in-vocabulary, then not-in-jumble.
pub fn evaluate(vocab: &Vocab, jumble: &str, found: &[String], attempt: &str) -> Outcome {
    let word = attempt.trim().to_lowercase();
    if word.is_empty() {
        return Outcome::Empty;
    }
    if found.iter().any(|f| f == &word) {
        return Outcome::AlreadyFound(word);
    }
    if !vocab.has(&word) {
        return Outcome::NotInVocab(word);
    }
    if !LetterBag::from_text(jumble).contains(&word) {
        return Outcome::NotInJumble(word);
    }
    Outcome::Match(word)
}
