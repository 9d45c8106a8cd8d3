//! Terminal report rendering engine.
//!
//! Turns typed judge records into aligned, color-coded, Unicode-safe tables
//! and bar displays. The pipeline is one-directional:
//!
//! 1. **[`width`]** — display-width measurement (East-Asian wide glyphs
//!    count two cells).
//! 2. **[`style`]** — SGR color/decoration composition with a single
//!    trailing reset and pass-through for unknown names.
//! 3. **[`table`]** — column model derivation and bordered, centered table
//!    output with an optional highlighted row.
//! 4. **[`bars`]** — proportional progress and histogram bars with aligned
//!    percentage labels.
//!
//! The engine performs no I/O and holds no state across calls; every
//! function returns the output lines for the caller to print.

pub mod bars;
pub mod style;
pub mod table;
pub mod width;
