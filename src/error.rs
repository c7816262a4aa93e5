//! Error types for bindery operations.

use thiserror::Error;

/// Errors that can occur while assembling or writing a book.
///
/// Broken references, missing sections, and filter-excluded targets are
/// deliberately *not* errors: they degrade to skipped content inside the
/// assemblers. This enum covers the orchestration boundary only.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not part of the vault: {0}")]
    NotInVault(String),

    #[error("no entry matches the starting point: {0}")]
    StartNotFound(String),

    #[error("destination already exists: {0}; pass --force to overwrite")]
    DestinationExists(String),

    #[error("invalid settings: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, Error>;
