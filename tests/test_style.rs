use ojcli::render::style::{colorize, decorate, strip_sgr, RESET};

#[test]
fn colorize_wraps_with_code_and_reset() {
    assert_eq!(colorize("hi", "red"), "\u{1b}[31mhi\u{1b}[0m");
    assert_eq!(colorize("hi", "green"), "\u{1b}[32mhi\u{1b}[0m");
}

#[test]
fn decorations_have_distinct_codes() {
    assert!(decorate("x", "bold").starts_with("\u{1b}[1m"));
    assert!(decorate("x", "underline").starts_with("\u{1b}[4m"));
    assert!(decorate("x", "reverse").starts_with("\u{1b}[7m"));
}

#[test]
fn unknown_names_pass_through_unchanged() {
    assert_eq!(colorize("hi", "chartreuse"), "hi");
    assert_eq!(colorize("hi", ""), "hi");
    assert_eq!(decorate("hi", "blink"), "hi");
}

#[test]
fn composition_keeps_a_single_trailing_reset() {
    let styled = colorize(&decorate("hi", "bold"), "red");
    assert_eq!(styled.matches(RESET).count(), 1);
    assert!(styled.ends_with(RESET));
}

#[test]
fn triple_composition_still_one_reset() {
    let styled = decorate(&colorize(&decorate("hi", "bold"), "yellow"), "underline");
    assert_eq!(styled.matches(RESET).count(), 1);
    assert!(styled.ends_with(RESET));
}

#[test]
fn interior_styling_is_never_stripped() {
    let inner = colorize("mid", "red");
    let outer = decorate(&format!("a{inner}b"), "bold");
    assert!(outer.contains("\u{1b}[31m"));
}

#[test]
fn strip_sgr_recovers_plain_text() {
    let styled = decorate(&colorize("Wrong Answer", "red"), "bold");
    assert_eq!(strip_sgr(&styled), "Wrong Answer");
    assert_eq!(strip_sgr("no escapes here"), "no escapes here");
}
