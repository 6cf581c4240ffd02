//! # ROTTEN - Relevance Optimized Text Trimming backend
//!
//! Development server and CLI for the contract the ROTTEN frontend speaks:
//! a query plus a Base64 zip of text/JSON files in, a trimmed zip and its
//! file count out.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  /userinput │────▶│   Archive   │────▶│   Trimmer   │────▶│  Re-packed  │
//! │ (JSON+b64)  │     │ (zip, caps) │     │   (trait)   │     │  zip (b64)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rotten::{trim_file, ArchiveLimits, PassThroughTrimmer, Query};
//!
//! let query = Query::NaturalLanguage("Alice and Bob in London".into());
//! let outcome = trim_file(
//!     "in.zip".as_ref(),
//!     "out.zip".as_ref(),
//!     &query,
//!     &PassThroughTrimmer,
//!     &ArchiveLimits::default(),
//! ).unwrap();
//! println!("Kept {} files", outcome.count());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Server configuration and archive limits
//! - [`archive`] - Base64 payloads and zip reading/writing
//! - [`trim`] - Query, `Trimmer` trait and the trimming pipeline
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Archive handling
pub mod archive;

// Trimming
pub mod trim;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ArchiveError, ProcessError, QueryError, ServerError};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{ArchiveLimits, ServerConfig, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT};

// =============================================================================
// Re-exports - Archive
// =============================================================================

pub use archive::{
    decode_payload,
    dedup_entries,
    encode_payload,
    has_zip_signature,
    is_text_name,
    read_entries,
    write_archive,
    ArchiveEntry,
};

// =============================================================================
// Re-exports - Trimming
// =============================================================================

pub use trim::{
    process_archive,
    trim_file,
    trim_payload,
    PassThroughTrimmer,
    Query,
    TrimOutcome,
    Trimmer,
};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{error_response, QueryFields, UserInputRequest, UserInputResponse};

// Server
pub mod server {
    pub use crate::api::server::{router, serve, start_server, AppState};
}
