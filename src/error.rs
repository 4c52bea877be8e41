use chrono::NaiveDate;
use thiserror::Error;

use crate::schedule::Shift;

/// Errors raised while loading a roster table
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed roster CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: invalid date {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: invalid shift {value:?} (expected morning or evening)")]
    InvalidShift { row: usize, value: String },

    #[error("row {row}: {shift} shift for {date} is listed twice")]
    DuplicateShift {
        row: usize,
        date: NaiveDate,
        shift: Shift,
    },
}

/// Errors raised while mounting the page layout
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("page layout has no {{{0}}} mount point")]
    MissingMount(&'static str),
}
