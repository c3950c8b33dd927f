//! HTTP plumbing between the terminal client and the game server.

use anyhow::{anyhow, Context, Result};
use log::debug;
use shared::{CheckReply, GameSnapshot, SpellReply};

/// A cookie-keeping HTTP client for one game session.
pub struct GameClient {
    http: reqwest::Client,
    base: String,
}

impl GameClient {
    /// Creates a client for the server at `base`, e.g.
    /// `http://127.0.0.1:8080`.
    pub fn new(base: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("building HTTP client")?;
        Ok(GameClient {
            http,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Opens a fresh game session and fetches its state.
    ///
    /// The game page request establishes the session cookie; the state
    /// request then reads the jumble, target and vocabulary for it.
    pub async fn start(&self) -> Result<GameSnapshot> {
        let resp = self
            .http
            .get(format!("{}/", self.base))
            .send()
            .await
            .context("requesting the game page")?;
        if !resp.status().is_success() {
            return Err(anyhow!("server refused to start a game: {}", resp.status()));
        }

        let snapshot: GameSnapshot = self
            .http
            .get(format!("{}/_state", self.base))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("reading the game state")?;

        debug!(
            "started game: jumble {} target {}",
            snapshot.jumble, snapshot.target
        );
        Ok(snapshot)
    }

    /// Submits an attempt to the check endpoint.
    pub async fn check(&self, word: &str) -> Result<CheckReply> {
        let reply: CheckReply = self
            .http
            .get(format!("{}/_check", self.base))
            .query(&[("text", word)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("checking {:?}", word))?;

        debug!("check {:?}: {:?}", word, reply.message);
        Ok(reply)
    }

    /// Asks whether the text is on the vocabulary list at all.
    pub async fn spell_check(&self, word: &str) -> Result<bool> {
        let reply: SpellReply = self
            .http
            .get(format!("{}/_keep_going", self.base))
            .query(&[("text", word)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(reply.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = GameClient::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(client.base, "http://127.0.0.1:8080");

        let client = GameClient::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(client.base, "http://127.0.0.1:8080");
    }
}
