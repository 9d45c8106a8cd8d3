//! Terminal display-width measurement.
//!
//! A string's on-terminal width is not its character count: East-Asian wide
//! glyphs occupy two cells. Every column width and centering pad in the
//! rendering engine goes through [`display_width`]; sizing by `str::len` or
//! `chars().count()` misaligns any table containing a non-Latin username or
//! problem title.

use unicode_width::UnicodeWidthStr;

/// Returns the number of terminal cells `text` occupies.
///
/// Wide (East-Asian) characters contribute 2 cells, everything else 1.
/// The input is expected to be plain text; SGR escape sequences must be
/// stripped before measuring (see [`crate::render::style::strip_sgr`]).
pub fn display_width(text: &str) -> usize {
    text.width()
}
