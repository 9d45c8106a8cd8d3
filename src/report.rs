//! Report assembly: typed judge records in, rendered lines out.
//!
//! Each report kind maps its records onto the generic renderers — column
//! specs and cell colors for tables, entries for bars — and owns the
//! formatting rules the column model sizes against (decimal integers,
//! `YYYY-MM-DD HH:MM:SS` UTC timestamps, runtimes as seconds with three
//! decimals, `-` for unranked). Callers check for empty data before asking
//! for a report.

use crate::codes;
use crate::model::{ProblemIndex, RankRow, VerdictRow};
use crate::render::bars::{render_histogram, render_progress, ProgressEntry, StatEntry};
use crate::render::table::{build_columns, render_table, BorderStyle, Cell};
use chrono::{TimeZone, Utc};
use std::collections::{HashMap, HashSet};

const VERDICT_HEADERS: [&str; 6] = ["PROBLEM", "VERDICT", "LANG", "TIME", "RANK", "SUBMIT TIME"];
const RANK_HEADERS: [&str; 5] = ["RANK", "USERID", "NAME", "AC", "NOS"];

/// Label field widths for the two histogram blocks.
const VERDICT_LABEL_WIDTH: usize = 18;
const LANGUAGE_LABEL_WIDTH: usize = 8;

/// Renders the verdict table. `rows` must be non-empty.
pub fn verdict_report(
    rows: &[VerdictRow],
    problems: &ProblemIndex,
    border: BorderStyle,
) -> Vec<String> {
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            let problem = match problems.by_id(row.problem_id) {
                Some(info) => format!("{} {}", info.number, info.title),
                None => row.problem_id.to_string(),
            };
            vec![
                Cell::plain(problem),
                Cell::colored(
                    codes::verdict_label(row.verdict),
                    codes::verdict_color(row.verdict),
                ),
                Cell::colored(
                    codes::language_label(row.language),
                    codes::language_color(row.language),
                ),
                Cell::plain(format_runtime(row.runtime_ms)),
                Cell::plain(format_rank(row.rank)),
                Cell::plain(format_timestamp(row.submitted_at)),
            ]
        })
        .collect();

    let columns = build_columns(&VERDICT_HEADERS, &cells);
    render_table(&columns, &cells, None, border)
}

/// Renders the ranklist table, highlighting the session user's row.
pub fn rank_report(rows: &[RankRow], current_user: u64, border: BorderStyle) -> Vec<String> {
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            vec![
                Cell::plain(row.rank.to_string()),
                Cell::plain(row.userid.to_string()),
                Cell::plain(row.name.clone()),
                Cell::plain(row.ac.to_string()),
                Cell::plain(row.nos.to_string()),
            ]
        })
        .collect();

    let highlight = rows.iter().position(|row| row.userid == current_user);
    let columns = build_columns(&RANK_HEADERS, &cells);
    render_table(&columns, &cells, highlight, border)
}

/// Buckets accepted submissions into volumes.
///
/// Every volume in the static table gets an entry, solved or not, in table
/// order. A problem solved several times counts once.
pub fn progress_counters(rows: &[VerdictRow], problems: &ProblemIndex) -> Vec<ProgressEntry> {
    let mut solved: HashSet<u32> = HashSet::new();
    for row in rows {
        if row.verdict == codes::VERDICT_ACCEPTED {
            if let Some(number) = problems.number_for(row.problem_id) {
                solved.insert(number);
            }
        }
    }

    let mut counts: HashMap<u32, u32> = HashMap::new();
    for number in solved {
        *counts.entry(number / 100).or_insert(0) += 1;
    }

    codes::VOLUMES
        .iter()
        .map(|&(volume, size)| ProgressEntry {
            volume,
            size,
            solved: counts.get(&volume).copied().unwrap_or(0),
        })
        .collect()
}

/// Renders the progress view: one volume when `volume` is set, else every
/// volume plus the grand-total `ALL` bar. Returns `None` for a volume
/// outside the static table.
pub fn progress_report(entries: &[ProgressEntry], volume: Option<u32>) -> Option<Vec<String>> {
    match volume {
        Some(v) => entries
            .iter()
            .find(|entry| entry.volume == v)
            .map(|entry| render_progress(std::slice::from_ref(entry))),
        None => Some(render_progress(entries)),
    }
}

/// Renders the requested statistics blocks. `rows` must be non-empty.
pub fn stats_report(rows: &[VerdictRow], submissions: bool, languages: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if submissions {
        lines.extend(render_histogram(
            " VERDICT STATISTICS ",
            &verdict_histogram(rows),
            VERDICT_LABEL_WIDTH,
        ));
    }
    if languages {
        if submissions {
            lines.push(String::new());
        }
        lines.extend(render_histogram(
            " LANGUAGE STATISTICS ",
            &language_histogram(rows),
            LANGUAGE_LABEL_WIDTH,
        ));
    }
    lines
}

/// Occurrence counts of each verdict code, labeled and colored from the
/// static table. Entry order is by code; the renderer re-sorts by count.
pub fn verdict_histogram(rows: &[VerdictRow]) -> Vec<StatEntry> {
    histogram(rows.iter().map(|row| row.verdict), |code| {
        (codes::verdict_label(code), codes::verdict_color(code))
    })
}

/// Occurrence counts of each language code.
pub fn language_histogram(rows: &[VerdictRow]) -> Vec<StatEntry> {
    histogram(rows.iter().map(|row| row.language), |code| {
        (codes::language_label(code), codes::language_color(code))
    })
}

fn histogram(
    values: impl Iterator<Item = u32>,
    lookup: impl Fn(u32) -> (&'static str, &'static str),
) -> Vec<StatEntry> {
    let mut counts: HashMap<u32, u64> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut seen: Vec<u32> = counts.keys().copied().collect();
    seen.sort_unstable();
    seen.into_iter()
        .map(|code| {
            let (label, color) = lookup(code);
            StatEntry {
                label: label.to_string(),
                color,
                count: counts[&code],
            }
        })
        .collect()
}

fn format_runtime(milliseconds: u64) -> String {
    format!("{:.3}", milliseconds as f64 / 1000.0)
}

fn format_rank(rank: u64) -> String {
    if rank > 0 {
        rank.to_string()
    } else {
        "-".to_string()
    }
}

fn format_timestamp(seconds: i64) -> String {
    match Utc.timestamp_opt(seconds, 0).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => seconds.to_string(),
    }
}
