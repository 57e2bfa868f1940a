use crate::coverage::CoverageReport;

/// Render the three report sections: missing maid months, missing nanny
/// months, then the raw per-month listing. Plain text only; the layout is
/// a fixed output contract, so no styling and no omitted lines — a month
/// with no entries still gets its line with an empty entry list. Amounts
/// keep float form (`2500.0`, not `2500`).
pub fn format_report(report: &CoverageReport) -> String {
    let mut out = String::new();

    out.push_str("--- MAID STATUS ---\n");
    for month in &report.missing_maid {
        out.push_str(&format!("MISSING MAID: {month}\n"));
    }

    out.push_str("\n--- NANNY STATUS ---\n");
    for month in &report.missing_nanny {
        out.push_str(&format!("MISSING NANNY: {month}\n"));
    }

    out.push_str("\n--- RAW DATA ---\n");
    for summary in &report.months {
        let joined = summary
            .entries
            .iter()
            .map(|e| format!("{:?} ({})", e.amount, e.description))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(&format!("{}: {}\n", summary.month, joined));
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::coverage::MonthlySummary;
    use crate::models::{MonthKey, ParsedEntry};

    fn mk(year: i32, month: u32) -> MonthKey {
        MonthKey::from_date(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
    }

    fn entry(date: &str, amount: f64, description: &str) -> ParsedEntry {
        ParsedEntry {
            amount,
            description: description.to_string(),
            date_text: date.to_string(),
            posted: NaiveDate::parse_from_str(date, "%d-%m-%Y").unwrap(),
        }
    }

    #[test]
    fn test_report_layout_is_exact() {
        let report = CoverageReport {
            missing_maid: vec![mk(2023, 3)],
            missing_nanny: vec![mk(2023, 1), mk(2023, 2), mk(2023, 3)],
            months: vec![
                MonthlySummary {
                    month: mk(2023, 1),
                    maid_count: 1,
                    nanny_count: 0,
                    entries: vec![entry("01-01-2023", 2500.0, "Baiee Jan")],
                },
                MonthlySummary {
                    month: mk(2023, 2),
                    maid_count: 1,
                    nanny_count: 0,
                    entries: vec![entry("01-02-2023", 2800.0, "")],
                },
                MonthlySummary {
                    month: mk(2023, 3),
                    maid_count: 0,
                    nanny_count: 0,
                    entries: vec![],
                },
            ],
        };

        let expected = concat!(
            "--- MAID STATUS ---\n",
            "MISSING MAID: 2023-03\n",
            "\n",
            "--- NANNY STATUS ---\n",
            "MISSING NANNY: 2023-01\n",
            "MISSING NANNY: 2023-02\n",
            "MISSING NANNY: 2023-03\n",
            "\n",
            "--- RAW DATA ---\n",
            "2023-01: 2500.0 (Baiee Jan)\n",
            "2023-02: 2800.0 ()\n",
            "2023-03: \n",
        );
        assert_eq!(format_report(&report), expected);
    }

    #[test]
    fn test_whole_amounts_keep_their_trailing_zero() {
        let report = CoverageReport {
            missing_maid: vec![],
            missing_nanny: vec![],
            months: vec![MonthlySummary {
                month: mk(2023, 1),
                maid_count: 1,
                nanny_count: 1,
                entries: vec![
                    entry("01-01-2023", 2500.0, "Baiee Jan"),
                    entry("09-01-2023", 12000.0, "nanny salary"),
                ],
            }],
        };
        let expected = concat!(
            "--- MAID STATUS ---\n",
            "\n",
            "--- NANNY STATUS ---\n",
            "\n",
            "--- RAW DATA ---\n",
            "2023-01: 2500.0 (Baiee Jan); 12000.0 (nanny salary)\n",
        );
        assert_eq!(format_report(&report), expected);
    }

    #[test]
    fn test_entries_joined_with_semicolons() {
        let report = CoverageReport {
            missing_maid: vec![],
            missing_nanny: vec![],
            months: vec![MonthlySummary {
                month: mk(2023, 1),
                maid_count: 2,
                nanny_count: 0,
                entries: vec![
                    entry("01-01-2023", 2500.0, "Baiee Jan"),
                    entry("20-01-2023", 2800.0, "maid again"),
                ],
            }],
        };
        let rendered = format_report(&report);
        assert!(rendered.contains("2023-01: 2500.0 (Baiee Jan); 2800.0 (maid again)\n"));
    }

    #[test]
    fn test_fractional_amounts_keep_their_fraction() {
        let report = CoverageReport {
            missing_maid: vec![],
            missing_nanny: vec![],
            months: vec![MonthlySummary {
                month: mk(2023, 1),
                maid_count: 0,
                nanny_count: 0,
                entries: vec![entry("01-01-2023", 2500.5, "part payment")],
            }],
        };
        assert!(format_report(&report).contains("2023-01: 2500.5 (part payment)\n"));
    }
}
