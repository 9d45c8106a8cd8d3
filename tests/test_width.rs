use ojcli::render::width::display_width;

#[test]
fn ascii_matches_char_count() {
    assert_eq!(display_width("PROBLEM"), 7);
    assert_eq!(display_width("100 The 3n + 1 problem"), 22);
}

#[test]
fn empty_string_is_zero() {
    assert_eq!(display_width(""), 0);
}

#[test]
fn wide_characters_count_double() {
    assert_eq!(display_width("世界"), 4);
    assert_eq!(display_width("テスト"), 6);
}

#[test]
fn mixed_width_sums_per_character() {
    assert_eq!(display_width("uva世界"), 7);
}
