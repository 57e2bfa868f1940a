use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

/// Raw row returned by the expense store query. `amount` and
/// `description` are nullable in the store and surface as `None`.
#[derive(Debug, Clone)]
pub struct ExpenseRow {
    pub date: String,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

/// A store row whose date text resolved to a calendar date. The amount is
/// the absolute value of the stored number; the original date text is
/// carried along for display.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    pub amount: f64,
    pub description: String,
    pub date_text: String,
    pub posted: NaiveDate,
}

/// Calendar month used for grouping and reporting, rendered as `YYYY-MM`.
/// Wraps the first day of the month so ordering and month stepping come
/// straight from chrono.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn pred(self) -> Self {
        Self(self.0 - Months::new(1))
    }

    pub fn succ(self) -> Self {
        Self(self.0 + Months::new(1))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0.year(), self.0.month())
    }
}
