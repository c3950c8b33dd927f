//! Game session management for the jumble server
//!
//! This module handles the server-side half of the browser session,
//! including:
//! - Session creation with random IDs delivered via a cookie
//! - Per-session game state (jumble, target, found words)
//! - Activity tracking and idle-timeout cleanup
//! - Session capacity enforcement
//!
//! The session store is the only mutable state shared between requests.
//! The vocabulary itself is immutable and lives outside the store.

use axum::http::{header, HeaderMap};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Name of the cookie carrying the session ID.
pub const SESSION_COOKIE: &str = "jumble_session";

/// Length of a session ID in alphanumeric characters.
const SESSION_ID_LEN: usize = 32;

/// One browser's game in progress
///
/// Each session holds:
/// - The jumble and target it was started with
/// - The valid words found so far, in discovery order
/// - A solved flag, set once and never cleared for the session's lifetime
/// - The last activity time used for idle-timeout cleanup
#[derive(Debug)]
pub struct GameSession {
    /// Random ID, also the cookie value
    pub id: String,
    /// The letter pool for this game
    pub jumble: String,
    /// Words to find before the game is won
    pub target: usize,
    /// Distinct vocabulary words found so far
    pub found: Vec<String>,
    /// True once `found` reached `target`
    pub solved: bool,
    /// Last time a request touched this session
    pub last_seen: Instant,
}

impl GameSession {
    /// Creates a fresh session for a new game.
    pub fn new(id: String, jumble: String, target: usize) -> Self {
        Self {
            id,
            jumble,
            target,
            found: Vec::new(),
            solved: false,
            last_seen: Instant::now(),
        }
    }

    /// Records a newly found word.
    ///
    /// Returns false without mutating anything when the game is already
    /// solved or the word was counted before, so the found list can never
    /// hold duplicates or grow past the target. Marks the session solved
    /// when the target count is reached.
    pub fn record_match(&mut self, word: String) -> bool {
        if self.solved || self.found.iter().any(|found| found == &word) {
            return false;
        }
        self.found.push(word);
        if self.found.len() >= self.target {
            self.solved = true;
        }
        true
    }

    /// Refreshes the activity timestamp.
    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    /// True when the session has been idle longer than `timeout`.
    pub fn is_expired(&self, timeout: Duration) -> bool {
        self.last_seen.elapsed() > timeout
    }
}

/// Holds every live game session, keyed by session ID
///
/// The manager enforces a capacity limit and an idle timeout. A background
/// task calls [`SessionManager::check_timeouts`] periodically so abandoned
/// games do not accumulate; a full store refuses new games rather than
/// evicting running ones.
pub struct SessionManager {
    /// Live sessions indexed by their cookie ID
    sessions: HashMap<String, GameSession>,
    /// Maximum number of concurrent sessions allowed
    max_sessions: usize,
    /// Idle time after which a session is dropped
    timeout: Duration,
}

impl SessionManager {
    /// Creates an empty store with the given capacity and idle timeout.
    pub fn new(max_sessions: usize, timeout: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            max_sessions,
            timeout,
        }
    }

    /// Starts a game and returns the ID of the session holding it.
    ///
    /// When the caller already has a live session (`existing_id`), that
    /// session is reset in place and keeps its ID, so reloading the game
    /// page does not grow the store. Otherwise a new session is created,
    /// or None is returned if the store is at capacity.
    pub fn start(
        &mut self,
        existing_id: Option<&str>,
        jumble: String,
        target: usize,
    ) -> Option<String> {
        if let Some(id) = existing_id {
            if let Some(session) = self.sessions.get_mut(id) {
                *session = GameSession::new(id.to_string(), jumble, target);
                info!("session {} restarted", short_id(id));
                return Some(id.to_string());
            }
        }

        // Enforce the capacity limit
        if self.sessions.len() >= self.max_sessions {
            return None;
        }

        let id = self.fresh_id();
        self.sessions
            .insert(id.clone(), GameSession::new(id.clone(), jumble, target));
        info!("session {} started ({} live)", short_id(&id), self.sessions.len());
        Some(id)
    }

    /// Looks up a session and refreshes its activity timestamp.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut GameSession> {
        let session = self.sessions.get_mut(id)?;
        session.touch();
        Some(session)
    }

    /// Removes a session, returning true if it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.sessions.remove(id).is_some() {
            info!("session {} removed", short_id(id));
            true
        } else {
            false
        }
    }

    /// Drops every session idle longer than the configured timeout.
    ///
    /// Returns the removed IDs. Called periodically from the sweeper task
    /// so abandoned browsers do not pin store capacity forever.
    pub fn check_timeouts(&mut self) -> Vec<String> {
        let timeout = self.timeout;
        let expired: Vec<String> = self
            .sessions
            .iter()
            .filter(|(_, session)| session.is_expired(timeout))
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            self.sessions.remove(id);
            info!("session {} expired", short_id(id));
        }

        expired
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn fresh_id(&self) -> String {
        // Collisions are astronomically unlikely but cheap to rule out
        loop {
            let id: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(SESSION_ID_LEN)
                .map(char::from)
                .collect();
            if !self.sessions.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Extracts the session ID from a request's Cookie header, if present.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Formats the Set-Cookie value carrying a session ID.
pub fn session_cookie(id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

// Session IDs are long; logs only need a recognizable prefix.
fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn manager() -> SessionManager {
        SessionManager::new(4, Duration::from_secs(60))
    }

    #[test]
    fn test_session_creation() {
        let session = GameSession::new("abc".to_string(), "tacdgo".to_string(), 2);
        assert_eq!(session.id, "abc");
        assert_eq!(session.jumble, "tacdgo");
        assert_eq!(session.target, 2);
        assert!(session.found.is_empty());
        assert!(!session.solved);
    }

    #[test]
    fn test_record_match_counts_up_to_target() {
        let mut session = GameSession::new("abc".to_string(), "tacdgo".to_string(), 2);

        assert!(session.record_match("cat".to_string()));
        assert!(!session.solved);

        assert!(session.record_match("dog".to_string()));
        assert!(session.solved);
        assert_eq!(session.found, ["cat", "dog"]);
    }

    #[test]
    fn test_record_match_rejects_duplicates() {
        let mut session = GameSession::new("abc".to_string(), "tacdgo".to_string(), 3);

        assert!(session.record_match("cat".to_string()));
        assert!(!session.record_match("cat".to_string()));
        assert_eq!(session.found.len(), 1);
    }

    #[test]
    fn test_record_match_stops_at_target() {
        let mut session = GameSession::new("abc".to_string(), "tacdgo".to_string(), 1);

        assert!(session.record_match("cat".to_string()));
        assert!(session.solved);
        assert!(!session.record_match("dog".to_string()));
        assert_eq!(session.found, ["cat"]);
    }

    #[test]
    fn test_session_expiry() {
        let mut session = GameSession::new("abc".to_string(), "tacdgo".to_string(), 2);
        assert!(!session.is_expired(Duration::from_secs(1)));

        session.last_seen = Instant::now() - Duration::from_secs(2);
        assert!(session.is_expired(Duration::from_secs(1)));
    }

    #[test]
    fn test_start_creates_session() {
        let mut manager = manager();
        let id = manager.start(None, "tacdgo".to_string(), 2).unwrap();

        assert_eq!(id.len(), SESSION_ID_LEN);
        assert_eq!(manager.len(), 1);
        let session = manager.get_mut(&id).unwrap();
        assert_eq!(session.jumble, "tacdgo");
    }

    #[test]
    fn test_start_resets_existing_session_in_place() {
        let mut manager = manager();
        let id = manager.start(None, "tacdgo".to_string(), 2).unwrap();
        manager.get_mut(&id).unwrap().record_match("cat".to_string());

        let id2 = manager
            .start(Some(id.as_str()), "xfonep".to_string(), 2)
            .unwrap();

        assert_eq!(id, id2);
        assert_eq!(manager.len(), 1);
        let session = manager.get_mut(&id).unwrap();
        assert_eq!(session.jumble, "xfonep");
        assert!(session.found.is_empty());
    }

    #[test]
    fn test_start_with_stale_cookie_creates_new_session() {
        let mut manager = manager();
        let id = manager.start(Some("gone"), "tacdgo".to_string(), 2).unwrap();
        assert_ne!(id, "gone");
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_capacity_refuses_new_sessions() {
        let mut manager = SessionManager::new(1, Duration::from_secs(60));
        let id = manager.start(None, "tacdgo".to_string(), 2).unwrap();

        assert!(manager.start(None, "xfonep".to_string(), 2).is_none());
        assert_eq!(manager.len(), 1);

        // An existing session can still restart at capacity
        assert!(manager
            .start(Some(id.as_str()), "xfonep".to_string(), 2)
            .is_some());
    }

    #[test]
    fn test_get_mut_unknown_id() {
        let mut manager = manager();
        assert!(manager.get_mut("nope").is_none());
    }

    #[test]
    fn test_remove() {
        let mut manager = manager();
        let id = manager.start(None, "tacdgo".to_string(), 2).unwrap();

        assert!(manager.remove(&id));
        assert!(!manager.remove(&id));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_check_timeouts_removes_only_idle_sessions() {
        let mut manager = SessionManager::new(4, Duration::from_secs(1));
        let stale = manager.start(None, "tacdgo".to_string(), 2).unwrap();
        let fresh = manager.start(None, "xfonep".to_string(), 2).unwrap();

        manager.sessions.get_mut(&stale).unwrap().last_seen =
            Instant::now() - Duration::from_secs(5);

        let expired = manager.check_timeouts();
        assert_eq!(expired, [stale]);
        assert_eq!(manager.len(), 1);
        assert!(manager.get_mut(&fresh).is_some());
    }

    #[test]
    fn test_cookie_roundtrip() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("other=1; {}", session_cookie("abc123"))).unwrap(),
        );

        // Set-Cookie attributes after the first ';' are not part of the pair
        assert_eq!(session_id_from_headers(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_cookie_parsing_picks_our_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("a=1; jumble_session=xyz; b=2"),
        );
        assert_eq!(session_id_from_headers(&headers), Some("xyz".to_string()));
    }

    #[test]
    fn test_cookie_parsing_absent() {
        let headers = HeaderMap::new();
        assert_eq!(session_id_from_headers(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("other=1"));
        assert_eq!(session_id_from_headers(&headers), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc");
        assert!(cookie.starts_with("jumble_session=abc"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
    }
}
