//! Column sizing and bordered table rendering.
//!
//! [`build_columns`] derives the column model for a uniform set of rows:
//! each column is as wide as the widest of its header label and every cell,
//! measured in terminal cells. [`render_table`] then emits a bordered table
//! with centered cells, a separator rule between every pair of rows, and an
//! optional highlighted row for the session user.
//!
//! Pads are always computed from the *unstyled* cell text; colors and
//! decorations are applied to the visible characters afterwards, so escape
//! bytes never leak into width arithmetic.

use crate::render::style::{colorize, decorate};
use crate::render::width::display_width;

/// Color layered (with bold) on top of a highlighted row's cells.
const HIGHLIGHT_COLOR: &str = "yellow";

/// Border character set for the table frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Double-line Unicode box drawing.
    Double,
    /// Legacy plain-ASCII frame (`+`, `-`, `|`).
    Ascii,
}

struct BorderChars {
    horizontal: char,
    vertical: char,
    top: [char; 3],
    middle: [char; 3],
    bottom: [char; 3],
}

impl BorderStyle {
    fn chars(self) -> BorderChars {
        match self {
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top: ['╔', '╦', '╗'],
                middle: ['╠', '╬', '╣'],
                bottom: ['╚', '╩', '╝'],
            },
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top: ['+', '+', '+'],
                middle: ['+', '+', '+'],
                bottom: ['+', '+', '+'],
            },
        }
    }
}

/// A table cell: plain text plus the optional color painted on at render
/// time. Widths are always measured on the plain text.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Cell {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// Derived column model: header label and rendered width.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub width: usize,
}

/// Computes the column model for `rows`.
///
/// Per column, width = max(display width of the header, max display width of
/// every cell). Every row must carry one cell per header; callers reject
/// empty record sets before reaching this point.
pub fn build_columns(headers: &[&str], rows: &[Vec<Cell>]) -> Vec<Column> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest_cell = rows
                .iter()
                .map(|row| display_width(&row[i].text))
                .max()
                .unwrap_or(0);
            Column {
                header: (*header).to_string(),
                width: display_width(header).max(widest_cell),
            }
        })
        .collect()
}

/// Renders `rows` as a bordered table, one output line per element.
///
/// Layout: top rule, bolded header row, then a separator rule before each
/// data row, then the bottom rule. `highlight` names the row index painted
/// with [`HIGHLIGHT_COLOR`] and bold on top of any per-cell color.
pub fn render_table(
    columns: &[Column],
    rows: &[Vec<Cell>],
    highlight: Option<usize>,
    border: BorderStyle,
) -> Vec<String> {
    let chars = border.chars();
    let mut lines = Vec::with_capacity(2 * rows.len() + 3);

    lines.push(rule(columns, &chars, chars.top));
    lines.push(header_line(columns, &chars));
    for (i, row) in rows.iter().enumerate() {
        lines.push(rule(columns, &chars, chars.middle));
        lines.push(row_line(columns, row, highlight == Some(i), &chars));
    }
    lines.push(rule(columns, &chars, chars.bottom));
    lines
}

fn rule(columns: &[Column], chars: &BorderChars, joints: [char; 3]) -> String {
    let mut line = String::new();
    for (i, column) in columns.iter().enumerate() {
        line.push(if i == 0 { joints[0] } else { joints[1] });
        for _ in 0..column.width + 2 {
            line.push(chars.horizontal);
        }
    }
    line.push(joints[2]);
    line
}

fn header_line(columns: &[Column], chars: &BorderChars) -> String {
    let mut line = String::new();
    for column in columns {
        line.push(chars.vertical);
        line.push(' ');
        line.push_str(&centered(
            &decorate(&column.header, "bold"),
            display_width(&column.header),
            column.width,
        ));
        line.push(' ');
    }
    line.push(chars.vertical);
    line
}

fn row_line(columns: &[Column], row: &[Cell], highlighted: bool, chars: &BorderChars) -> String {
    let mut line = String::new();
    for (column, cell) in columns.iter().zip(row) {
        line.push(chars.vertical);
        line.push(' ');
        line.push_str(&centered(
            &paint(cell, highlighted),
            display_width(&cell.text),
            column.width,
        ));
        line.push(' ');
    }
    line.push(chars.vertical);
    line
}

fn paint(cell: &Cell, highlighted: bool) -> String {
    let mut text = match cell.color {
        Some(color) => colorize(&cell.text, color),
        None => cell.text.clone(),
    };
    if highlighted {
        text = decorate(&colorize(&text, HIGHLIGHT_COLOR), "bold");
    }
    text
}

/// Centers already-styled text inside a column of `width` cells. `text_width`
/// is the display width of the unstyled text; odd slack goes to the right.
fn centered(styled: &str, text_width: usize, width: usize) -> String {
    let slack = width.saturating_sub(text_width);
    let left = slack / 2;
    let right = slack - left;
    let mut out = String::new();
    for _ in 0..left {
        out.push(' ');
    }
    out.push_str(styled);
    for _ in 0..right {
        out.push(' ');
    }
    out
}
