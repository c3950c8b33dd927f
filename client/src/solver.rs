//! Derives candidate words from a game snapshot.
//!
//! Uses the same shared letter rules the server enforces, so every
//! candidate is a word the server will accept (unless it was found in the
//! meantime).

use shared::{GameSnapshot, LetterBag};

/// Vocabulary words spellable from the snapshot's jumble and not yet
/// found, in vocabulary order.
pub fn candidates(snapshot: &GameSnapshot) -> Vec<String> {
    let bag = LetterBag::from_text(&snapshot.jumble);
    snapshot
        .vocab
        .iter()
        .filter(|word| !snapshot.matches.iter().any(|found| found == *word))
        .filter(|word| bag.contains(word))
        .cloned()
        .collect()
}
