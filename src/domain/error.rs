//! Error taxonomy for contact operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    /// No record with the requested id.
    #[error("{0}")]
    NotFound(String),

    /// Payload failed validation; the message lists every violation.
    #[error("{0}")]
    InvalidInput(String),

    /// Anything else (store connectivity, decoding, ...). Never shown to callers verbatim.
    #[error("unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

pub type ContactResult<T> = Result<T, ContactError>;
