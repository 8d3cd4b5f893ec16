//! Delimited text table parsing.
//!
//! GTFS members are comma-separated text with a mandatory header line.
//! Fields may be wrapped in double quotes to protect embedded commas, and a
//! doubled quote inside a quoted field stands for a literal quote. This is
//! the common subset of RFC 4180 that feed publishers actually produce, plus
//! the deviations seen in the wild: UTF-8 byte order marks, CRLF line
//! endings, stray whitespace around fields, and blank lines between rows.

use crate::error::{FeedError, Result};

/// A parsed text table: one header line plus zero or more data rows.
///
/// Rows are kept positional here. Pairing values with header names happens
/// in [`record`](crate::record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse a complete table from member text.
///
/// A single leading U+FEFF byte order mark is stripped, the text is trimmed,
/// and lines are split on `\n`. Carriage returns left by CRLF endings are
/// absorbed by per-field trimming. Blank lines between rows are skipped.
///
/// # Errors
///
/// Returns [`FeedError::InvalidTable`] when fewer than two lines remain
/// after trimming, since a table without a header and at least the shape of
/// a data line cannot be mapped.
pub fn parse(text: &str) -> Result<Table> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(FeedError::InvalidTable("fewer than two lines"));
    }

    let header = parse_line(lines[0]);
    let rows = lines[1..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line))
        .collect();

    Ok(Table { header, rows })
}

/// Split one line into trimmed fields.
///
/// A quote toggles quoted state; a doubled quote inside a quoted field emits
/// one literal quote; a comma outside quotes ends the field. The final field
/// is emitted at end of line whether or not a quote was closed.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
