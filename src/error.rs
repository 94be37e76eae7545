//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.
//!
//! Validation findings are never `AppError`s: a failed validation is a
//! successful call that returned a non-empty report. `AppError` covers
//! faults only (I/O, unparseable schema or instance text).

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Schema or instance text that could not be deserialized.
    /// We ignore this for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
