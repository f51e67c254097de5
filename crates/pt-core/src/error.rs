//! Toolkit error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `PtError` via `From` impls, or keep them separate and wrap `PtError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `pt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PtError {
    #[error("invalid threshold {0}: must be a non-negative number of seconds")]
    InvalidThreshold(f64),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `pt-*` crates.
pub type PtResult<T> = Result<T, PtError>;
