//! Unified error type for the record-keeping core.
//!
//! Validation failures (`MissingField`, `InvalidNumber`) are raised before any
//! write is attempted. Storage failures are surfaced verbatim from `SeaORM`.

use thiserror::Error;

/// All errors produced by the repositories, configuration and shell.
#[derive(Debug, Error)]
pub enum Error {
    /// A required form field was empty or whitespace-only
    #[error("{field} is required")]
    MissingField {
        /// Human-readable field name, e.g. "Client name"
        field: &'static str,
    },

    /// A numeric form field did not parse as a finite number
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber {
        /// Human-readable field name, e.g. "Salary"
        field: &'static str,
        /// The rejected input text
        value: String,
    },

    /// The underlying store is unreachable, locked or corrupted
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Terminal I/O failure in the shell
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors raised by input validation, before any write.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidNumber { .. })
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
