//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Field Types** - Identity of every required input
//! - **Query Types** - What the user is searching for
//! - **Archive Types** - The uploaded and returned archives
//! - **Status Types** - Transient banner state
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Field Types
// =============================================================================

/// Identity of a required input on the form.
///
/// Used as the key of the form-value registry and to build the
/// aggregated "missing input" message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    /// The uploaded archive
    Archive,
    /// Free-text description (natural-language mode)
    Description,
    /// Desired outcome (structured mode)
    Outcome,
    /// Important date (structured mode)
    Date,
    /// Important people (structured mode)
    People,
    /// Important events (structured mode)
    Events,
    /// Important location (structured mode)
    Location,
}

impl FieldId {
    /// The five structured fields, in display order.
    pub const STRUCTURED: [FieldId; 5] = [
        FieldId::Outcome,
        FieldId::Date,
        FieldId::People,
        FieldId::Events,
        FieldId::Location,
    ];

    /// Every text field kept in the registry.
    pub const TEXT_FIELDS: [FieldId; 6] = [
        FieldId::Description,
        FieldId::Outcome,
        FieldId::Date,
        FieldId::People,
        FieldId::Events,
        FieldId::Location,
    ];

    /// DOM id of the input (used for `<label for=…>`).
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldId::Archive => "file-upload",
            FieldId::Description => "natural-language-text-field",
            FieldId::Outcome => "desired-outcome-text-field",
            FieldId::Date => "important-date-text-field",
            FieldId::People => "important-people-text-field",
            FieldId::Events => "important-events-text-field",
            FieldId::Location => "important-location-text-field",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Archive => "Archive: ",
            FieldId::Description => "Describe what you are looking for: ",
            FieldId::Outcome => "Desired Outcome: ",
            FieldId::Date => "Important Date: ",
            FieldId::People => "Important People: ",
            FieldId::Events => "Important Events: ",
            FieldId::Location => "Important Location: ",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::Archive => "",
            FieldId::Description => "Messages where Alice and Bob talk about the London trip",
            FieldId::Outcome => "Find every conversation about the trip",
            FieldId::Date => "2024-05-17",
            FieldId::People => "Alice, Bob",
            FieldId::Events => "Meeting, flight booking",
            FieldId::Location => "London",
        }
    }

    /// Clause appended to the aggregated error message when this input is missing.
    pub fn missing_message(&self) -> &'static str {
        match self {
            FieldId::Archive => "Please select one .zip archive within the size limit.",
            FieldId::Description => "Please describe what you are looking for.",
            FieldId::Outcome => "Please enter a desired outcome.",
            FieldId::Date => "Please enter an important date.",
            FieldId::People => "Please enter the important people.",
            FieldId::Events => "Please enter the important events.",
            FieldId::Location => "Please enter an important location.",
        }
    }
}

// =============================================================================
// Query Types
// =============================================================================

/// The five discrete fields of a structured query.
///
/// Serialized exactly as the backend expects the `fields` object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredFields {
    pub desired_outcome: String,
    pub important_date: String,
    pub important_people: String,
    pub important_events: String,
    pub important_location: String,
}

/// What the user is searching for. Exactly one mode is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuerySpec {
    NaturalLanguage(String),
    Structured(StructuredFields),
}

// =============================================================================
// Archive Types
// =============================================================================

/// Metadata of a file picked in the native file input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedArchive {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl SelectedArchive {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

/// The processed archive returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultArchive {
    /// `data:` URL ready to be used as a download link
    pub data_url: String,
    /// Decoded size in bytes, computed from the Base64 length
    pub size_bytes: u64,
    /// Number of files in the archive, as reported by the backend
    pub file_count: u64,
    /// Name offered to the browser when downloading
    pub file_name: String,
}

// =============================================================================
// Status Types
// =============================================================================

/// Transient submission status shown in the banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn is_active(&self) -> bool {
        !matches!(self, SubmissionStatus::Idle)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success(msg) | SubmissionStatus::Error(msg) => Some(msg),
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "status-banner",
            SubmissionStatus::Success(_) => "status-banner status-success",
            SubmissionStatus::Error(_) => "status-banner status-error",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Required inputs were missing.
    Validation(String),
    /// The archive could not be read or encoded.
    Encoding(String),
    /// Network/HTTP transport error.
    Network(String),
    /// The backend answered with a non-success status.
    Server { status: u16, status_text: String },
    /// The backend answered successfully but the body was unusable.
    Response(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Encoding(msg) => write!(f, "Could not read the archive: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, status_text } if status_text.is_empty() => {
                write!(f, "Request failed with status {}", status)
            }
            AppError::Server { status, status_text } => {
                write!(f, "Request failed: {} {}", status, status_text)
            }
            AppError::Response(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
