//! # ojcli
//!
//! Command-line client for the UVa Online Judge.
//!
//! `ojcli` submits solution files to the judge and queries the companion
//! [uHunt] statistics API for verdicts, world rankings, and per-volume solve
//! progress, rendering every report as aligned, color-coded terminal tables
//! and bar displays.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ojcli::client::UhuntClient;
//! use ojcli::render::table::BorderStyle;
//! use ojcli::report;
//!
//! # fn main() -> Result<(), ojcli::client::ClientError> {
//! let uhunt = UhuntClient::new()?;
//! let user_id = uhunt.user_id("jdoe")?;
//! let problems = uhunt.problems()?;
//! let rows = uhunt.submissions(user_id, Some(25))?;
//!
//! if rows.is_empty() {
//!     println!("No submissions found.");
//! } else {
//!     for line in report::verdict_report(&rows, &problems, BorderStyle::Double) {
//!         println!("{line}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Data flows one direction through the crate:
//!
//! 1. **[`config`]** — credentials from a small TOML file.
//! 2. **[`client`]** — blocking HTTP against the judge and the uHunt API.
//! 3. **[`model`]** — typed records decoded from API payloads.
//! 4. **[`codes`]** — static verdict/language/volume lookup tables.
//! 5. **[`report`]** — maps records onto the renderers and owns the cell
//!    formatting rules.
//! 6. **[`render`]** — the tabular/bar rendering engine (display widths,
//!    SGR styling, column sizing, borders, proportional bars).
//!
//! [uHunt]: https://uhunt.onlinejudge.org/

pub mod client;
pub mod codes;
pub mod config;
pub mod model;
pub mod render;
pub mod report;
