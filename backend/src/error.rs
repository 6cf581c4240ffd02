//! Error types for the ROTTEN backend.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ArchiveError`] - Payload decoding and zip handling
//! - [`QueryError`] - Query does not match the declared mode
//! - [`ProcessError`] - Top-level trimming errors
//! - [`ServerError`] - HTTP layer errors, mapped to status codes
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::http::StatusCode;
use thiserror::Error;

// =============================================================================
// Archive Errors
// =============================================================================

/// Errors while decoding, reading or writing an archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The payload is not valid Base64.
    #[error("Invalid Base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The payload does not start with a zip signature.
    #[error("Payload is not a zip archive")]
    NotAnArchive,

    /// Archive larger than the configured maximum.
    #[error("Archive is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    /// Too many entries.
    #[error("Archive has more than {0} entries")]
    TooManyEntries(usize),

    /// Entries expand past the configured maximum.
    #[error("Archive expands to more than {0} bytes")]
    TooMuchContent(u64),

    /// Corrupt or unsupported zip.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error.
    #[error("Archive IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Query Errors
// =============================================================================

/// The query part of a request does not match `usedNaturalLanguage`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Natural-language mode without a description.
    #[error("Natural-language mode requires a non-empty description")]
    MissingDescription,

    /// Structured mode without the `fields` object.
    #[error("Structured mode requires the fields object")]
    MissingFields,

    /// Structured mode with an empty field.
    #[error("Structured field '{0}' is empty")]
    BlankField(&'static str),
}

// =============================================================================
// Process Errors (top-level)
// =============================================================================

/// Top-level trimming errors.
///
/// This is the error returned by [`crate::trim::process_archive`] and
/// [`crate::trim::trim_payload`].
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Archive error.
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// Query error.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Processing error.
    #[error("{0}")]
    Process(#[from] ProcessError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status returned for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Process(ProcessError::Query(_)) => StatusCode::BAD_REQUEST,
            ServerError::Process(ProcessError::Archive(archive)) => match archive {
                ArchiveError::Decode(_) => StatusCode::BAD_REQUEST,
                ArchiveError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                ArchiveError::NotAnArchive
                | ArchiveError::TooManyEntries(_)
                | ArchiveError::TooMuchContent(_)
                | ArchiveError::Zip(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ArchiveError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ArchiveError> for ServerError {
    fn from(err: ArchiveError) -> Self {
        ServerError::Process(err.into())
    }
}

impl From<QueryError> for ServerError {
    fn from(err: QueryError) -> Self {
        ServerError::Process(err.into())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Result type for trimming operations.
pub type ProcessResult<T> = Result<T, ProcessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ArchiveError -> ProcessError
        let archive_err = ArchiveError::NotAnArchive;
        let process_err: ProcessError = archive_err.into();
        assert!(process_err.to_string().contains("not a zip"));

        // QueryError -> ServerError
        let server_err: ServerError = QueryError::BlankField("importantDate").into();
        assert!(server_err.to_string().contains("importantDate"));
    }

    #[test]
    fn test_status_codes() {
        let too_large: ServerError = ArchiveError::TooLarge { size: 2, limit: 1 }.into();
        assert_eq!(too_large.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

        let not_zip: ServerError = ArchiveError::NotAnArchive.into();
        assert_eq!(not_zip.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let query: ServerError = QueryError::MissingDescription.into();
        assert_eq!(query.status_code(), StatusCode::BAD_REQUEST);

        let internal = ServerError::Internal("join".into());
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
