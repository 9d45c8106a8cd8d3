use ojcli::render::style::strip_sgr;
use ojcli::render::table::{build_columns, render_table, BorderStyle, Cell};
use ojcli::render::width::display_width;

fn sample_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![
            Cell::plain("100 The 3n + 1 problem"),
            Cell::colored("Accepted", "green"),
        ],
        vec![Cell::plain("102"), Cell::colored("Wrong Answer", "red")],
    ]
}

#[test]
fn column_width_is_max_of_header_and_cells() {
    let columns = build_columns(&["PROBLEM", "VERDICT"], &sample_rows());
    assert_eq!(columns[0].width, display_width("100 The 3n + 1 problem"));
    assert_eq!(columns[1].width, display_width("Wrong Answer"));
}

#[test]
fn header_wins_when_longer_than_cells() {
    let rows = vec![vec![Cell::plain("x")]];
    let columns = build_columns(&["SUBMIT TIME"], &rows);
    assert_eq!(columns[0].width, 11);
}

#[test]
fn wide_characters_size_columns() {
    let rows = vec![vec![Cell::plain("世界チャンピオン")]];
    let columns = build_columns(&["NAME"], &rows);
    assert_eq!(columns[0].width, 16);
}

#[test]
fn every_line_has_the_same_display_width() {
    let rows = sample_rows();
    let columns = build_columns(&["PROBLEM", "VERDICT"], &rows);
    let lines = render_table(&columns, &rows, None, BorderStyle::Double);

    let expected = display_width(&strip_sgr(&lines[0]));
    for line in &lines {
        assert_eq!(display_width(&strip_sgr(line)), expected);
    }
}

#[test]
fn wide_cells_keep_the_table_aligned() {
    let rows = vec![
        vec![Cell::plain("1"), Cell::plain("世界チャンピオン")],
        vec![Cell::plain("2"), Cell::plain("ascii name")],
    ];
    let columns = build_columns(&["RANK", "NAME"], &rows);
    let lines = render_table(&columns, &rows, None, BorderStyle::Double);

    let expected = display_width(&strip_sgr(&lines[0]));
    for line in &lines {
        assert_eq!(display_width(&strip_sgr(line)), expected);
    }
}

#[test]
fn odd_slack_pads_to_the_right() {
    let rows = vec![vec![Cell::plain("ab")]];
    let columns = build_columns(&["XYZKW"], &rows);
    let lines = render_table(&columns, &rows, None, BorderStyle::Double);

    // top, header, separator, data row, bottom
    assert_eq!(strip_sgr(&lines[3]), "║  ab   ║");
}

#[test]
fn separator_after_header_and_between_rows() {
    let rows = sample_rows();
    let columns = build_columns(&["PROBLEM", "VERDICT"], &rows);
    let lines = render_table(&columns, &rows, None, BorderStyle::Double);

    assert_eq!(lines.len(), 3 + 2 * rows.len());
    assert!(lines[0].starts_with('╔'));
    assert!(lines[2].starts_with('╠'));
    assert!(lines[4].starts_with('╠'));
    assert!(lines.last().unwrap().starts_with('╚'));
}

#[test]
fn ascii_border_mode() {
    let rows = vec![vec![Cell::plain("ab")]];
    let columns = build_columns(&["AB"], &rows);
    let lines = render_table(&columns, &rows, None, BorderStyle::Ascii);

    assert_eq!(strip_sgr(&lines[0]), "+----+");
    assert_eq!(strip_sgr(&lines[3]), "| ab |");
    assert_eq!(strip_sgr(&lines[4]), "+----+");
}

#[test]
fn header_round_trip() {
    let headers = ["PROBLEM", "VERDICT"];
    let rows = sample_rows();
    let columns = build_columns(&headers, &rows);
    let lines = render_table(&columns, &rows, None, BorderStyle::Double);

    let parsed: Vec<String> = strip_sgr(&lines[1])
        .split('║')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    assert_eq!(parsed, headers);
}

#[test]
fn highlight_styles_only_the_requested_row() {
    let rows = sample_rows();
    let columns = build_columns(&["PROBLEM", "VERDICT"], &rows);
    let lines = render_table(&columns, &rows, Some(1), BorderStyle::Double);

    let highlight = "\u{1b}[1m\u{1b}[33m";
    assert!(!lines[3].contains(highlight));
    assert!(lines[5].contains(highlight));
}

#[test]
fn highlight_layers_over_cell_color() {
    let rows = sample_rows();
    let columns = build_columns(&["PROBLEM", "VERDICT"], &rows);
    let lines = render_table(&columns, &rows, Some(1), BorderStyle::Double);

    // bold + highlight + the cell's own red, innermost last
    assert!(lines[5].contains("\u{1b}[1m\u{1b}[33m\u{1b}[31mWrong Answer"));
}
