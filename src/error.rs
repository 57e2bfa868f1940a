use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArrearsError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Unparseable date: {0}")]
    UnparseableDate(String),
}

pub type Result<T> = std::result::Result<T, ArrearsError>;
