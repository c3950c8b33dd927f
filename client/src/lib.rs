//! # Jumble Terminal Client
//!
//! A terminal player for the jumble game server. It opens a game session
//! over HTTP, keeps the session cookie across requests, and submits
//! attempts either interactively (typed on stdin) or automatically.
//!
//! ## Module Organization
//!
//! ### Network Module (`network`)
//! The HTTP plumbing: a cookie-keeping client that starts a game, submits
//! attempts to the check endpoint, and queries the spelling endpoint.
//!
//! ### Solver Module (`solver`)
//! Derives candidate words from a game snapshot using the same shared
//! letter rules the server enforces, so in automatic mode every submitted
//! candidate is a valid word by construction.

pub mod network;
pub mod solver;
