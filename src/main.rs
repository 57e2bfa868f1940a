mod classifier;
mod coverage;
mod db;
mod error;
mod models;
mod parser;
mod report;

use std::path::Path;

use chrono::Local;
use clap::Parser;

use models::MonthKey;

const EXPENSE_DB: &str = "expenses.db";

#[derive(Parser)]
#[command(name = "arrears", about = "Flag months with missing maid or nanny payments.")]
struct Cli {}

fn run() -> error::Result<()> {
    let conn = db::open_expense_db(Path::new(EXPENSE_DB))?;
    let rows = db::fetch_household_rows(&conn)?;
    if rows.is_empty() {
        println!("No rows found in database.");
        return Ok(());
    }

    let entries = parser::build_entries(&rows);
    let current = MonthKey::from_date(Local::now().date_naive());
    let report = coverage::reconcile(&entries, coverage::window_start(), current);
    print!("{}", report::format_report(&report));

    Ok(())
}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
