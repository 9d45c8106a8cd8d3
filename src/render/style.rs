//! ANSI SGR styling.
//!
//! Composes foreground-color and decoration escape sequences onto a string.
//! Two contracts the table and bar renderers rely on:
//!
//! - **Single trailing reset.** A reset is appended only when the text does
//!   not already contain one, so `colorize(&decorate(s, "bold"), "red")`
//!   carries exactly one trailing reset and nested styling is never clobbered.
//! - **Unknown names pass through.** Color and decoration names originate in
//!   the static verdict/language tables; a name outside the known set leaves
//!   the text untouched instead of failing the whole report.

use regex::Regex;
use std::sync::LazyLock;

/// SGR reset sequence terminating a styled string.
pub const RESET: &str = "\u{1b}[0m";

static SGR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

// 8-color mode only.
fn color_code(color: &str) -> Option<&'static str> {
    match color {
        "black" => Some("\u{1b}[30m"),
        "red" => Some("\u{1b}[31m"),
        "green" => Some("\u{1b}[32m"),
        "yellow" => Some("\u{1b}[33m"),
        "blue" => Some("\u{1b}[34m"),
        "magenta" => Some("\u{1b}[35m"),
        "cyan" => Some("\u{1b}[36m"),
        "white" => Some("\u{1b}[37m"),
        _ => None,
    }
}

fn decoration_code(decoration: &str) -> Option<&'static str> {
    match decoration {
        "bold" => Some("\u{1b}[1m"),
        "underline" => Some("\u{1b}[4m"),
        "reverse" => Some("\u{1b}[7m"),
        _ => None,
    }
}

/// Applies one of the 8 foreground colors. Unknown names are a no-op.
pub fn colorize(text: &str, color: &str) -> String {
    match color_code(color) {
        Some(code) => apply(code, text),
        None => text.to_string(),
    }
}

/// Applies `bold`, `underline`, or `reverse`. Unknown names are a no-op.
pub fn decorate(text: &str, decoration: &str) -> String {
    match decoration_code(decoration) {
        Some(code) => apply(code, text),
        None => text.to_string(),
    }
}

fn apply(code: &str, text: &str) -> String {
    let mut styled = String::with_capacity(code.len() + text.len() + RESET.len());
    styled.push_str(code);
    styled.push_str(text);
    if !text.contains(RESET) {
        styled.push_str(RESET);
    }
    styled
}

/// Removes every SGR escape sequence, leaving only the visible characters.
///
/// Used to measure styled text and by tests asserting on rendered layout.
pub fn strip_sgr(text: &str) -> String {
    SGR.replace_all(text, "").into_owned()
}
