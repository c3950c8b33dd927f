use serde::{Deserialize, Serialize};

/// Reply of the per-keystroke `/_check` endpoint.
///
/// `result` is the game-complete flag, not per-attempt success: it stays
/// `false` while words are still missing and flips to `true` once the
/// target count is reached. `redirect_url` is set exactly once per session,
/// on the reply for the match that reaches the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReply {
    pub result: bool,
    pub message: Option<String>,
    pub matches: Vec<String>,
    pub target: usize,
    pub redirect_url: Option<String>,
}

/// Reply of the spelling-only `/_keep_going` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellReply {
    pub matched: bool,
}

/// Current session state, consumed by the terminal client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub jumble: String,
    pub target: usize,
    pub matches: Vec<String>,
    pub vocab: Vec<String>,
}
