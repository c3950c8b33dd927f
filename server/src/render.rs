//! Compile-time HTML templates with placeholder substitution.
//!
//! Pages are embedded with `include_str!` and instantiated by replacing
//! `{{name}}` placeholders. Interpolated values go through [`escape_html`].

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

const GAME_TEMPLATE: &str = include_str!("../templates/vocab.html");
const SUCCESS_TEMPLATE: &str = include_str!("../templates/success.html");
const NOT_FOUND_TEMPLATE: &str = include_str!("../templates/404.html");
const ERROR_TEMPLATE: &str = include_str!("../templates/error.html");

/// Replaces each `{{name}}` placeholder with its value.
pub fn render(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}

/// Escapes the five HTML metacharacters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The game page, with the jumble, target and vocabulary list embedded.
pub fn game_page(jumble: &str, target: usize, vocab: &[String]) -> String {
    let rows: String = vocab
        .iter()
        .map(|word| format!("      <li>{}</li>\n", escape_html(word)))
        .collect();
    render(
        GAME_TEMPLATE,
        &[
            ("jumble", escape_html(jumble)),
            ("target", target.to_string()),
            ("vocab_rows", rows),
        ],
    )
}

pub fn success_page() -> String {
    SUCCESS_TEMPLATE.to_string()
}

/// A rendered 404 page naming the missing path.
pub fn not_found_page(path: &str) -> Response {
    let body = render(NOT_FOUND_TEMPLATE, &[("path", escape_html(path))]);
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}

/// A rendered error page with the given status and message.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let body = render(ERROR_TEMPLATE, &[("message", escape_html(message))]);
    (status, Html(body)).into_response()
}
