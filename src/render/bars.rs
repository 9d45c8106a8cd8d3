//! Proportional horizontal bars.
//!
//! Two modes share the fill-and-frame mechanics:
//!
//! - **Progress** ([`render_progress`]): one bar per judge volume on a fixed
//!   100-cell scale, plus an `ALL` bar computed from grand totals when more
//!   than one volume is shown. Rows alternate white/yellow purely for visual
//!   separation.
//! - **Histogram** ([`render_histogram`]): verdict or language occurrence
//!   counts, sorted by descending count, each bar colored per its entry and
//!   right-padded to the longest bar's fill so the count labels share a
//!   column.
//!
//! All percentage math is integer floor division; a histogram's percentages
//! are not normalized to sum to 100.

use crate::render::style::{colorize, strip_sgr};
use crate::render::width::display_width;

/// Fill glyph for bar segments.
const FILL: char = '▀';

/// Progress bars span 0..=100 cells.
const PROGRESS_SCALE: usize = 100;

/// Interior width of the progress frame: "Volume nnn " + 100 cells + " nnn%"
/// plus one pad space on each side.
const PROGRESS_INNER: usize = 118;

/// Solve progress for one judge volume.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEntry {
    pub volume: u32,
    pub solved: u32,
    pub size: u32,
}

/// One histogram bar: display label, bar color, occurrence count.
#[derive(Debug, Clone)]
pub struct StatEntry {
    pub label: String,
    pub color: &'static str,
    pub count: u64,
}

/// Renders the progress view.
///
/// A single entry renders as one uncolored bar; multiple entries render one
/// bar per volume in the given order, alternating white and yellow, followed
/// by an `ALL` bar whose percentage comes from the summed solved and size
/// totals rather than an average of per-volume percentages. Entry sizes must
/// be positive; the caller owns that guarantee (sizes come from the static
/// volume table).
pub fn render_progress(entries: &[ProgressEntry]) -> Vec<String> {
    let mut lines = vec![frame_top(" PROGRESS ", PROGRESS_INNER)];

    if entries.len() == 1 {
        let entry = &entries[0];
        lines.push(format!(
            "║ {} ║",
            bar_body(&volume_label(entry.volume), entry.solved, entry.size)
        ));
    } else {
        let mut white = true;
        for entry in entries {
            let body = bar_body(&volume_label(entry.volume), entry.solved, entry.size);
            let color = if white { "white" } else { "yellow" };
            lines.push(format!("║ {} ║", colorize(&body, color)));
            white = !white;
        }
        let total_solved: u32 = entries.iter().map(|e| e.solved).sum();
        let total_size: u32 = entries.iter().map(|e| e.size).sum();
        lines.push(format!(
            "║ {} ║",
            bar_body("       ALL ", total_solved, total_size)
        ));
    }

    lines.push(frame_bottom(PROGRESS_INNER));
    lines
}

fn volume_label(volume: u32) -> String {
    format!("Volume {volume:3} ")
}

fn bar_body(label: &str, solved: u32, size: u32) -> String {
    let percent = (solved as usize * 100) / size as usize;
    let mut body = String::from(label);
    for _ in 0..percent {
        body.push(FILL);
    }
    for _ in 0..PROGRESS_SCALE.saturating_sub(percent) {
        body.push(' ');
    }
    body.push_str(&format!(" {percent:3}%"));
    body
}

/// Renders a histogram block framed under `title`.
///
/// Entries are sorted by descending count (ties keep their given order).
/// Each bar's fill is `count * 100 / total` cells; shorter bars pad right to
/// the first bar's fill so every count label starts in the same column. The
/// label field is right-aligned to `label_width` cells. An empty entry set
/// renders nothing; callers check for data first.
pub fn render_histogram(title: &str, entries: &[StatEntry], label_width: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&StatEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    let total: u64 = sorted.iter().map(|e| e.count).sum();
    let ticks: Vec<usize> = sorted
        .iter()
        .map(|e| (e.count * 100 / total) as usize)
        .collect();
    let widest = ticks.first().copied().unwrap_or(0);

    let mut body = Vec::with_capacity(sorted.len());
    for (entry, &tick) in sorted.iter().zip(&ticks) {
        let mut bar = format!("{:>label_width$} ", entry.label);
        for _ in 0..tick {
            bar.push(FILL);
        }
        let mut line = String::from("║ ");
        line.push_str(&colorize(&bar, entry.color));
        for _ in 0..widest - tick {
            line.push(' ');
        }
        line.push_str(&format!("{:4} submissions [{:2}%] ║", entry.count, tick));
        body.push(line);
    }

    // Frame to the first (widest) line so the block stays rectangular.
    let inner = display_width(&strip_sgr(&body[0])).saturating_sub(2);
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(frame_top(title, inner));
    lines.extend(body);
    lines.push(frame_bottom(inner));
    lines
}

fn frame_top(title: &str, inner: usize) -> String {
    let slack = inner.saturating_sub(display_width(title));
    let left = slack / 2;
    let right = slack - left;
    format!("╔{}{}{}╗", "═".repeat(left), title, "═".repeat(right))
}

fn frame_bottom(inner: usize) -> String {
    format!("╚{}╝", "═".repeat(inner))
}
