use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::classifier::{classify, span_count, Classification};
use crate::models::{MonthKey, ParsedEntry};

/// One step of the analysis window: classification counts plus every
/// entry posted in that month, whatever its label.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub maid_count: usize,
    pub nanny_count: usize,
    pub entries: Vec<ParsedEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub missing_maid: Vec<MonthKey>,
    pub missing_nanny: Vec<MonthKey>,
    pub months: Vec<MonthlySummary>,
}

/// First month of the analysis window; matches the store query cutoff in
/// `db::WINDOW_START_MS`.
pub fn window_start() -> MonthKey {
    MonthKey::from_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
}

/// Walk the closed window [start, end] one month at a time, classifying
/// each month's entries and unioning their coverage spans into per-service
/// covered-month sets. Everything is derived from the entry list alone;
/// entries posted outside the window never classify and never cover.
pub fn reconcile(entries: &[ParsedEntry], start: MonthKey, end: MonthKey) -> CoverageReport {
    let mut by_month: BTreeMap<MonthKey, Vec<ParsedEntry>> = BTreeMap::new();
    for entry in entries {
        by_month
            .entry(MonthKey::from_date(entry.posted))
            .or_default()
            .push(entry.clone());
    }

    let mut maid_covered: BTreeSet<MonthKey> = BTreeSet::new();
    let mut nanny_covered: BTreeSet<MonthKey> = BTreeSet::new();
    let mut months = Vec::new();

    let mut current = start;
    while current <= end {
        let month_entries = by_month.get(&current).cloned().unwrap_or_default();
        let mut maid_count = 0usize;
        let mut nanny_count = 0usize;

        for entry in &month_entries {
            match classify(&entry.description, entry.amount) {
                Classification::Nanny => {
                    nanny_count += 1;
                    mark_covered(&mut nanny_covered, current, span_count(&entry.description), start);
                }
                Classification::Maid => {
                    maid_count += 1;
                    mark_covered(&mut maid_covered, current, span_count(&entry.description), start);
                }
                Classification::Neither => {}
            }
        }

        months.push(MonthlySummary {
            month: current,
            maid_count,
            nanny_count,
            entries: month_entries,
        });
        current = current.succ();
    }

    CoverageReport {
        missing_maid: missing_in_window(&maid_covered, start, end),
        missing_nanny: missing_in_window(&nanny_covered, start, end),
        months,
    }
}

/// A payment posted in `month` with span `count` covers its own month and
/// the `count - 1` preceding ones, clamped at `floor`. Arrears payments
/// backfill prior gaps; future months are never covered, and months below
/// the window start are outside the report and never recorded.
fn mark_covered(covered: &mut BTreeSet<MonthKey>, month: MonthKey, count: u64, floor: MonthKey) {
    let mut m = month;
    for _ in 0..count {
        if m < floor {
            break;
        }
        covered.insert(m);
        m = m.pred();
    }
}

fn missing_in_window(covered: &BTreeSet<MonthKey>, start: MonthKey, end: MonthKey) -> Vec<MonthKey> {
    let mut missing = Vec::new();
    let mut current = start;
    while current <= end {
        if !covered.contains(&current) {
            missing.push(current);
        }
        current = current.succ();
    }
    missing
}
