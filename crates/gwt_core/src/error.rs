//! Error types for gwt_core operations.
//!
//! Assertion failures are never errors: a false assertion is data (a counted
//! failure plus a diagnostic line), not a thrown condition. Errors here cover
//! the small fallible surface around diagnostic sinks.

use thiserror::Error;

/// Core error type for gwt_core operations.
#[derive(Error, Debug)]
pub enum GwtError {
    /// I/O error while opening or writing a diagnostic sink.
    #[error("diagnostic sink I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for gwt_core operations.
pub type Result<T> = std::result::Result<T, GwtError>;
