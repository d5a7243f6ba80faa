//! Import adapters: delimited text and spreadsheet workbooks in, ordered
//! entry strings out.
//!
//! ERROR HANDLING
//! ==============
//! An unreadable workbook surfaces as `Err(String)` so the caller can
//! report the failure; the entry list is only touched after a successful
//! parse, so there is never a partial import.

#[cfg(test)]
#[path = "file_parser_test.rs"]
mod file_parser_test;

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

/// Split line-oriented text into trimmed, non-empty entries.
pub fn parse_delimited_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Flatten the first sheet of a workbook row-major into entry strings,
/// skipping blank cells.
///
/// # Errors
///
/// Returns an error if the bytes are not a readable workbook or the
/// first sheet cannot be loaded.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<String>, String> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| format!("unreadable workbook: {e}"))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| "workbook has no sheets".to_owned())?
        .map_err(|e| format!("unreadable sheet: {e}"))?;

    let mut items = Vec::new();
    for row in range.rows() {
        for cell in row {
            if let Some(text) = cell_text(cell) {
                items.push(text);
            }
        }
    }
    Ok(items)
}

/// Cell → entry text: trimmed strings and stringified numbers. Every
/// other cell type reads as blank.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Data::Float(f) => Some(format_number(*f)),
        Data::Int(i) => Some(i.to_string()),
        _ => None,
    }
}

/// Integral floats render without the trailing `.0` Excel stores them
/// with.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Delimited-text detection by MIME type or extension; everything else
/// goes through the workbook reader.
pub fn is_delimited_file(name: &str, mime: &str) -> bool {
    if mime == "text/csv" || mime == "text/plain" {
        return true;
    }
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".csv") || lower.ends_with(".txt")
}
