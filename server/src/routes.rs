//! The axum router and request handlers.
//!
//! `/` starts (or restarts) a game and renders the page, `/_check` is
//! polled on every keystroke, `/_keep_going` answers spelling-only
//! queries, `/success` is the win page. `/_state` exposes the session as
//! JSON for the terminal client.

use crate::render;
use crate::session::{self, GameSession, SessionManager};
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use shared::{evaluate, jumbled, CheckReply, GameSnapshot, Outcome, SpellReply, Vocab};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub vocab: Arc<Vocab>,
    pub sessions: Arc<RwLock<SessionManager>>,
    /// Configured win condition, clamped to the vocabulary size per game
    pub target_count: usize,
    /// Fixed seed for reproducible jumbles; None draws from entropy
    pub jumble_seed: Option<u64>,
}

/// Builds the application router with static assets served from
/// `static_dir`.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index", get(index))
        .route("/_check", get(check))
        .route("/_keep_going", get(keep_going))
        .route("/_state", get(game_state))
        .route("/success", get(success))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct AttemptQuery {
    text: Option<String>,
}

/// Starts a fresh game and renders the main page.
///
/// An existing session is reset in place so page reloads reuse the same
/// cookie; otherwise a new session is created, which can fail when the
/// store is at capacity.
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let target = state.target_count.min(state.vocab.len());
    let jumble = jumbled(&state.vocab, target, state.jumble_seed);

    let existing = session::session_id_from_headers(&headers);
    let id = {
        let mut sessions = state.sessions.write().await;
        sessions.start(existing.as_deref(), jumble.clone(), target)
    };
    let Some(id) = id else {
        warn!("refused new game: session store at capacity");
        return render::error_page(
            StatusCode::SERVICE_UNAVAILABLE,
            "Too many games are running right now. Try again in a minute.",
        );
    };

    debug!("new game: jumble {} target {}", jumble, target);
    let body = render::game_page(&jumble, target, state.vocab.as_list());
    (
        [(header::SET_COOKIE, session::session_cookie(&id))],
        Html(body),
    )
        .into_response()
}

/// The per-keystroke check.
///
/// Evaluates the attempt against the caller's session and answers with a
/// [`CheckReply`]. Only a fresh valid word mutates the session; the reply
/// that completes the game carries the success redirect, exactly once.
async fn check(
    State(state): State<AppState>,
    Query(query): Query<AttemptQuery>,
    headers: HeaderMap,
) -> Json<CheckReply> {
    let text = query.text.unwrap_or_default();

    let Some(id) = session::session_id_from_headers(&headers) else {
        return Json(restart_reply());
    };
    let mut sessions = state.sessions.write().await;
    let Some(session) = sessions.get_mut(&id) else {
        return Json(restart_reply());
    };

    if session.solved {
        return Json(reply(
            session,
            true,
            "You already solved this jumble. Reload the page for a new one.".to_string(),
            None,
        ));
    }

    let outcome = evaluate(&state.vocab, &session.jumble, &session.found, &text);
    debug!("check {:?} -> {:?}", text, outcome);

    let json = match outcome {
        Outcome::Empty => reply(session, false, "Type a word from the list.".to_string(), None),
        Outcome::AlreadyFound(word) => reply(
            session,
            false,
            format!("You already found {}", word),
            None,
        ),
        Outcome::NotInVocab(word) => reply(
            session,
            false,
            format!("{} isn't in the list of words", word),
            None,
        ),
        Outcome::NotInJumble(word) => {
            let message = format!(
                "\"{}\" can't be made from the letters {}",
                word, session.jumble
            );
            reply(session, false, message, None)
        }
        Outcome::Match(word) => {
            session.record_match(word.clone());
            if session.solved {
                reply(
                    session,
                    true,
                    "You found them all! Taking you to the success page.".to_string(),
                    Some("/success".to_string()),
                )
            } else {
                reply(
                    session,
                    false,
                    format!("You found the match: {}. Clear the box to continue.", word),
                    None,
                )
            }
        }
    };
    Json(json)
}

/// Spelling-only check: is the text on the vocabulary list at all?
async fn keep_going(
    State(state): State<AppState>,
    Query(query): Query<AttemptQuery>,
) -> Json<SpellReply> {
    let text = query.text.unwrap_or_default();
    Json(SpellReply {
        matched: state.vocab.has(&text),
    })
}

/// Session state as JSON, for the terminal client.
async fn game_state(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<GameSnapshot>, StatusCode> {
    let id = session::session_id_from_headers(&headers).ok_or(StatusCode::NOT_FOUND)?;
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(GameSnapshot {
        jumble: session.jumble.clone(),
        target: session.target,
        matches: session.found.clone(),
        vocab: state.vocab.as_list().to_vec(),
    }))
}

async fn success() -> Html<String> {
    Html(render::success_page())
}

async fn not_found(uri: Uri) -> Response {
    warn!("404: {}", uri.path());
    render::not_found_page(uri.path())
}

fn reply(
    session: &GameSession,
    result: bool,
    message: String,
    redirect_url: Option<String>,
) -> CheckReply {
    CheckReply {
        result,
        message: Some(message),
        matches: session.found.clone(),
        target: session.target,
        redirect_url,
    }
}

/// Reply used when the caller has no live session: point the page back at
/// `/` so a new game starts.
fn restart_reply() -> CheckReply {
    CheckReply {
        result: false,
        message: Some("Your game expired. Starting a new one.".to_string()),
        matches: Vec::new(),
        target: 0,
        redirect_url: Some("/".to_string()),
    }
}
