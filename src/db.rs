use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;
use crate::models::ExpenseRow;

/// Epoch-millisecond cutoff matching the start of the analysis window:
/// 2023-01-01T00:00:00Z. The store's `parsedDate` column holds epoch
/// milliseconds and is its chronological sort key.
pub const WINDOW_START_MS: i64 = 1_672_531_200_000;

/// Open the expense store read-only. The database is owned by another
/// application; a missing or unreadable file is a fatal error, and the
/// read-only flags keep this tool from ever creating an empty one.
pub fn open_expense_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    Ok(conn)
}

pub fn fetch_household_rows(conn: &Connection) -> Result<Vec<ExpenseRow>> {
    let mut stmt = conn.prepare(
        "SELECT date, amount, description FROM expenses \
         WHERE category = 'Household' AND subcategory = 'Baiee' AND parsedDate >= ?1 \
         ORDER BY parsedDate ASC",
    )?;
    let rows = stmt
        .query_map([WINDOW_START_MS], |row| {
            Ok(ExpenseRow {
                date: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                amount: row.get(1)?,
                description: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}
