//! Console table of the latest notes.
//!
//! ```text
//! | Tue | 2024-03-05 | 17:02:11 | work       | review the release notes |
//! | Tue | 2024-03-05 | 09:15:40 |            | coffee                   |
//! | --- | ---------- | -------- |            |                          |
//! | Mon | 2024-03-04 | 22:48:03 | home sport | evening run              |
//! ```
//!
//! Rows come newest first, straight from the reverse reader. Only the
//! first [`MAX_DAYS`] distinct days are shown.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use notelog::{Entry, LogError};

/// Number of distinct days rendered.
pub const MAX_DAYS: usize = 2;

const COLUMNS: usize = 5;
const WEEKDAY_FORMAT: &str = "%a";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const DIVIDER: [&str; COLUMNS] = ["---", "----------", "--------", "", ""];

type Row = [String; COLUMNS];

/// Renders `entries` as a table on `w`, returning the number of rows written
/// (dividers included).
///
/// Reading stops at the first entry of the third distinct day, so later
/// entries are never decoded.
///
/// # Errors
///
/// The first read error aborts rendering before anything is written.
pub fn write_table<W, I>(w: &mut W, entries: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Result<Entry, LogError>>,
{
    let rows = collect_rows(entries)?;
    if rows.is_empty() {
        return Ok(0);
    }

    let mut widths = [0usize; COLUMNS];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for row in &rows {
        let mut line = String::from("|");
        for (cell, &width) in row.iter().zip(&widths) {
            line.push_str(&format!(" {cell:<width$} |"));
        }
        writeln!(w, "{line}")?;
    }
    w.flush()?;

    Ok(rows.len())
}

fn collect_rows<I>(entries: I) -> Result<Vec<Row>>
where
    I: IntoIterator<Item = Result<Entry, LogError>>,
{
    let mut rows = Vec::new();
    let mut prev_date: Option<NaiveDate> = None;
    let mut days = 0;

    for entry in entries {
        let entry = entry.context("could not read note")?;
        let date = entry.created_at.date_naive();

        if prev_date != Some(date) {
            if days == MAX_DAYS {
                break;
            }
            if prev_date.is_some() {
                rows.push(DIVIDER.map(String::from));
            }
            days += 1;
            prev_date = Some(date);
        }

        rows.push(entry_row(&entry));
    }

    Ok(rows)
}

fn entry_row(entry: &Entry) -> Row {
    let at = entry.created_at;
    [
        at.format(WEEKDAY_FORMAT).to_string(),
        at.format(DATE_FORMAT).to_string(),
        at.format(TIME_FORMAT).to_string(),
        entry.tags.join(" "),
        entry.note.clone(),
    ]
}
