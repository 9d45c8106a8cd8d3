//! Typed domain records decoded from the uHunt API.
//!
//! Records are constructed fresh per command invocation, held in memory for
//! one render, and discarded — nothing here persists or mutates after
//! construction.

use serde::Deserialize;
use std::collections::HashMap;

/// One submission as reported by uHunt.
#[derive(Debug, Clone)]
pub struct VerdictRow {
    pub submission_id: u64,
    pub problem_id: u64,
    /// Judge verdict code (see [`crate::codes`]).
    pub verdict: u32,
    pub runtime_ms: u64,
    /// Seconds since the Unix epoch.
    pub submitted_at: i64,
    /// Language code (see [`crate::codes`]).
    pub language: u32,
    /// Rank among solvers; 0 when unranked.
    pub rank: u64,
}

/// Raw 7-element submission array:
/// `[sid, pid, verdict, runtime, time, language, rank]`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSubmission(
    pub u64,
    pub u64,
    pub u32,
    pub u64,
    pub i64,
    pub u32,
    pub i64,
);

impl From<RawSubmission> for VerdictRow {
    fn from(raw: RawSubmission) -> Self {
        VerdictRow {
            submission_id: raw.0,
            problem_id: raw.1,
            verdict: raw.2,
            runtime_ms: raw.3,
            submitted_at: raw.4,
            language: raw.5,
            // uHunt reports unranked submissions as -1
            rank: if raw.6 > 0 { raw.6 as u64 } else { 0 },
        }
    }
}

/// One ranklist entry.
///
/// The API also sends transient `old` and `activity` fields; serde drops
/// unknown fields here, so they can never reach a rendered report.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRow {
    pub rank: u64,
    pub userid: u64,
    pub name: String,
    /// Accepted problem count.
    pub ac: u64,
    /// Total submission count.
    pub nos: u64,
}

/// Problem metadata from the judge catalogue.
#[derive(Debug, Clone)]
pub struct ProblemInfo {
    /// Internal uHunt problem id.
    pub id: u64,
    /// Judge problem number (volume * 100 + position).
    pub number: u32,
    pub title: String,
}

/// Bidirectional id/number lookup over the problem catalogue.
#[derive(Debug, Default)]
pub struct ProblemIndex {
    by_id: HashMap<u64, ProblemInfo>,
    by_number: HashMap<u32, u64>,
}

impl ProblemIndex {
    pub fn insert(&mut self, info: ProblemInfo) {
        self.by_number.insert(info.number, info.id);
        self.by_id.insert(info.id, info);
    }

    pub fn by_id(&self, id: u64) -> Option<&ProblemInfo> {
        self.by_id.get(&id)
    }

    pub fn by_number(&self, number: u32) -> Option<&ProblemInfo> {
        self.by_number.get(&number).and_then(|id| self.by_id.get(id))
    }

    /// Judge problem number for an internal problem id.
    pub fn number_for(&self, id: u64) -> Option<u32> {
        self.by_id.get(&id).map(|info| info.number)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
