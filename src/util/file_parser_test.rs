use super::*;

// =============================================================
// Delimited text
// =============================================================

#[test]
fn delimited_text_drops_blank_lines() {
    assert_eq!(parse_delimited_text("Alpha\n\nBeta\n"), ["Alpha", "Beta"]);
}

#[test]
fn delimited_text_trims_and_handles_crlf() {
    assert_eq!(parse_delimited_text("  Fox \r\n\r\n 42 \r\n"), ["Fox", "42"]);
}

#[test]
fn delimited_text_whitespace_only_lines_are_blank() {
    assert_eq!(parse_delimited_text("A\n   \nB"), ["A", "B"]);
}

#[test]
fn delimited_text_empty_input_is_empty() {
    assert!(parse_delimited_text("").is_empty());
}

// =============================================================
// Workbook cells
// =============================================================

#[test]
fn cell_text_flattens_like_a_sheet_scan() {
    // A 2-row, 1-column sheet with "Fox", a blank, and 42 yields two
    // entries: the blank is skipped, the numeric cell stringified.
    let cells = [
        Data::String("Fox".to_owned()),
        Data::Empty,
        Data::Float(42.0),
    ];
    let items = cells.iter().filter_map(cell_text).collect::<Vec<_>>();
    assert_eq!(items, ["Fox", "42"]);
}

#[test]
fn cell_text_trims_strings_and_skips_whitespace() {
    assert_eq!(cell_text(&Data::String("  spaced  ".to_owned())), Some("spaced".to_owned()));
    assert_eq!(cell_text(&Data::String("   ".to_owned())), None);
}

#[test]
fn cell_text_skips_non_text_non_numeric_cells() {
    assert_eq!(cell_text(&Data::Bool(true)), None);
    assert_eq!(cell_text(&Data::Empty), None);
}

#[test]
fn cell_text_keeps_integer_cells() {
    assert_eq!(cell_text(&Data::Int(7)), Some("7".to_owned()));
}

#[test]
fn format_number_strips_trailing_zero_fraction() {
    assert_eq!(format_number(42.0), "42");
    assert_eq!(format_number(-3.0), "-3");
    assert_eq!(format_number(2.5), "2.5");
}

#[test]
fn parse_workbook_rejects_garbage_bytes() {
    let err = parse_workbook(b"definitely not a spreadsheet").unwrap_err();
    assert!(err.contains("unreadable workbook"), "{err}");
}

// =============================================================
// File-kind detection
// =============================================================

#[test]
fn delimited_detection_by_mime_and_extension() {
    assert!(is_delimited_file("list.csv", ""));
    assert!(is_delimited_file("NAMES.CSV", ""));
    assert!(is_delimited_file("notes.txt", ""));
    assert!(is_delimited_file("whatever.bin", "text/csv"));
    assert!(!is_delimited_file("book.xlsx", "application/vnd.ms-excel"));
}
