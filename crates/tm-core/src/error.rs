//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `tm-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("hour {0} is outside 0..=23")]
    InvalidHour(u8),

    #[error("traffic level {0} is outside 1..=5")]
    InvalidTrafficLevel(u8),

    #[error("traffic factor {0} is outside 1..=3")]
    InvalidTrafficFactor(u8),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
