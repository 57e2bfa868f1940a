use chrono::NaiveDate;
use colored::Colorize;

use crate::error::{ArrearsError, Result};
use crate::models::{ExpenseRow, ParsedEntry};

/// Admissible date formats, tried in order; the first success wins. The
/// store mixes both.
const DATE_FORMATS: &[&str] = &["%d-%m-%Y", "%Y-%m-%d"];

pub fn parse_posted_date(raw: &str) -> Result<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date);
        }
    }
    Err(ArrearsError::UnparseableDate(raw.to_string()))
}

/// Turn raw store rows into parsed entries. Rows whose date text matches
/// neither format are skipped with a diagnostic on stderr; a NULL amount
/// counts as zero and a NULL description as empty.
pub fn build_entries(rows: &[ExpenseRow]) -> Vec<ParsedEntry> {
    let mut entries = Vec::new();
    for row in rows {
        let posted = match parse_posted_date(&row.date) {
            Ok(date) => date,
            Err(_) => {
                eprintln!(
                    "{}",
                    format!("Skipping row with invalid date: {}", row.date).yellow()
                );
                continue;
            }
        };
        entries.push(ParsedEntry {
            amount: row.amount.unwrap_or(0.0).abs(),
            description: row.description.clone().unwrap_or_default(),
            date_text: row.date.clone(),
            posted,
        });
    }
    entries
}
