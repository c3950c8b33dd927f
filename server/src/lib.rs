//! # Jumble Game Server
//!
//! HTTP server for the vocabulary jumble game. It presents a fixed word
//! list and a scrambled letter pool, checks each typed attempt against the
//! list and the available letters, counts the valid words found per
//! session, and signals success once the configured target is reached.
//!
//! ## Architecture
//!
//! Requests are handled statelessly except for one piece of server-side
//! state: the session store. The vocabulary is loaded once at startup and
//! shared read-only across all requests; each browser gets a session keyed
//! by a random cookie that holds its jumble, target and found words.
//!
//! ## Module Organization
//!
//! ### Session Module (`session`)
//! Server-side game sessions and their lifecycle:
//! - Session creation with random IDs and per-game state
//! - Activity tracking and idle-timeout sweeping
//! - Capacity enforcement
//! - Cookie parsing and formatting helpers
//!
//! ### Routes Module (`routes`)
//! The axum router and request handlers:
//! - Game page rendering and session setup on `/`
//! - The per-keystroke JSON check on `/_check`
//! - The spelling-only check on `/_keep_going`
//! - Session state for the terminal client on `/_state`
//! - Success page, 404 fallback and static assets
//!
//! ### Render Module (`render`)
//! Compile-time HTML templates with placeholder substitution and an
//! HTML-escaping helper. No template engine is involved.

pub mod render;
pub mod routes;
pub mod session;
