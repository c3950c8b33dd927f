//! Game rules and wire types shared by the jumble server and client.
//!
//! Everything in this crate is pure: the letter multiset ([`LetterBag`]),
//! the vocabulary list ([`Vocab`]), jumble generation ([`jumbled`]) and the
//! attempt decision procedure ([`evaluate`]) have no I/O or HTTP concerns.
//! The server evaluates attempts with these rules; the client reuses the
//! same rules to derive candidate words locally, which keeps both sides in
//! agreement about what counts as a valid word.
//!
//! The [`protocol`] module holds the JSON reply types exchanged between the
//! server handlers, the browser script and the terminal client.

pub mod check;
pub mod jumble;
pub mod letterbag;
pub mod protocol;
pub mod vocab;

pub use check::{evaluate, Outcome};
pub use jumble::jumbled;
pub use letterbag::LetterBag;
pub use protocol::{CheckReply, GameSnapshot, SpellReply};
pub use vocab::{Vocab, VocabError};
