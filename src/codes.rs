//! Static judge lookup tables.
//!
//! Verdict and language codes arrive from the uHunt API as small integers;
//! these tables map them to display labels and the colors the renderers
//! paint them with. The volume table fixes the judge's problem-numbering
//! buckets and their sizes. Everything here is immutable data passed to the
//! report assembler; there is no process-wide mutable state.

use std::path::Path;

/// Verdict code for an accepted submission.
pub const VERDICT_ACCEPTED: u32 = 90;

/// (code, label, color) for every judge verdict.
const VERDICTS: &[(u32, &str, &str)] = &[
    (10, "Submission Error", "white"),
    (15, "Can't Be Judged", "white"),
    (20, "In Queue", "white"),
    (30, "Compile Error", "yellow"),
    (35, "Restricted Function", "white"),
    (40, "Runtime Error", "cyan"),
    (45, "Output Limit", "white"),
    (50, "Time Limit", "blue"),
    (60, "Memory Limit", "black"),
    (70, "Wrong Answer", "red"),
    (80, "Presentation Error", "magenta"),
    (90, "Accepted", "green"),
];

/// (code, label, color) for every submission language.
const LANGUAGES: &[(u32, &str, &str)] = &[
    (1, "ANSI C", "white"),
    (2, "Java", "magenta"),
    (3, "C++", "yellow"),
    (4, "Pascal", "green"),
    (5, "C++11", "red"),
    (6, "Python 3", "blue"),
];

/// (volume, problem count) in display order. Most volumes hold 100 problems;
/// the last volume of each numbering range is partial.
pub const VOLUMES: &[(u32, u32)] = &[
    (1, 100),
    (2, 100),
    (3, 100),
    (4, 100),
    (5, 100),
    (6, 100),
    (7, 100),
    (8, 100),
    (9, 100),
    (10, 100),
    (11, 100),
    (12, 100),
    (13, 100),
    (14, 100),
    (15, 100),
    (16, 100),
    (17, 61),
    (100, 100),
    (101, 100),
    (102, 100),
    (103, 100),
    (104, 100),
    (105, 100),
    (106, 100),
    (107, 100),
    (108, 100),
    (109, 100),
    (110, 100),
    (111, 100),
    (112, 100),
    (113, 100),
    (114, 100),
    (115, 100),
    (116, 100),
    (117, 100),
    (118, 100),
    (119, 100),
    (120, 100),
    (121, 100),
    (122, 100),
    (123, 100),
    (124, 100),
    (125, 100),
    (126, 100),
    (127, 100),
    (128, 100),
    (129, 100),
    (130, 100),
    (131, 100),
    (132, 100),
    (133, 4),
];

/// Display label for a verdict code. Unknown codes render as `Unknown` so
/// histogram iteration over observed codes stays total.
pub fn verdict_label(code: u32) -> &'static str {
    VERDICTS
        .iter()
        .find(|&&(c, _, _)| c == code)
        .map(|&(_, label, _)| label)
        .unwrap_or("Unknown")
}

/// Display color for a verdict code; unknown codes are white.
pub fn verdict_color(code: u32) -> &'static str {
    VERDICTS
        .iter()
        .find(|&&(c, _, _)| c == code)
        .map(|&(_, _, color)| color)
        .unwrap_or("white")
}

/// Display label for a language code.
pub fn language_label(code: u32) -> &'static str {
    LANGUAGES
        .iter()
        .find(|&&(c, _, _)| c == code)
        .map(|&(_, label, _)| label)
        .unwrap_or("Unknown")
}

/// Display color for a language code; unknown codes are white.
pub fn language_color(code: u32) -> &'static str {
    LANGUAGES
        .iter()
        .find(|&&(c, _, _)| c == code)
        .map(|&(_, _, color)| color)
        .unwrap_or("white")
}

/// Submission code for a language name as the judge spells it
/// (e.g. `"C++11"`, `"Python 3"`).
pub fn language_code(name: &str) -> Option<u32> {
    LANGUAGES
        .iter()
        .find(|&&(_, label, _)| label == name)
        .map(|&(code, _, _)| code)
}

/// Guesses the judge language name from a solution file's extension.
pub fn guess_language(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "c" => Some("ANSI C"),
        "c++" | "cc" | "cpp" | "cxx" => Some("C++"),
        "java" => Some("Java"),
        "pas" => Some("Pascal"),
        "py" => Some("Python 3"),
        _ => None,
    }
}

/// Problem count of a volume, or `None` for volumes outside the table.
pub fn volume_size(volume: u32) -> Option<u32> {
    VOLUMES
        .iter()
        .find(|&&(v, _)| v == volume)
        .map(|&(_, size)| size)
}
