//! Trimming pipeline.
//!
//! ```text
//! Base64 ──▶ decode ──▶ read entries ──▶ Trimmer ──▶ re-pack ──▶ Base64
//!            (400)      (413 / 422)                  (Deflate)
//! ```
//!
//! The [`Trimmer`] trait is the seam where relevance scoring plugs in.
//! The only implementation shipped here, [`PassThroughTrimmer`], keeps
//! every text/JSON document untouched and drops everything else.

use std::fs;
use std::path::Path;

use crate::api::types::QueryFields;
use crate::archive::{decode_payload, dedup_entries, read_entries, write_archive, ArchiveEntry};
use crate::config::ArchiveLimits;
use crate::error::{ArchiveError, ProcessResult};

/// What the user is looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    NaturalLanguage(String),
    Structured(QueryFields),
}

impl Query {
    /// One-line description for logs.
    pub fn describe(&self) -> String {
        match self {
            Query::NaturalLanguage(text) => format!("natural language: {:?}", text),
            Query::Structured(fields) => format!(
                "outcome={:?} date={:?} people={:?} events={:?} location={:?}",
                fields.desired_outcome,
                fields.important_date,
                fields.important_people,
                fields.important_events,
                fields.important_location
            ),
        }
    }
}

/// Decides which entries of an archive are kept, and in what form.
pub trait Trimmer: Send + Sync {
    fn name(&self) -> &'static str;

    fn trim(&self, query: &Query, entries: Vec<ArchiveEntry>) -> Vec<ArchiveEntry>;
}

/// Keeps text and JSON documents unchanged, drops everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughTrimmer;

impl Trimmer for PassThroughTrimmer {
    fn name(&self) -> &'static str {
        "pass-through"
    }

    fn trim(&self, _query: &Query, entries: Vec<ArchiveEntry>) -> Vec<ArchiveEntry> {
        entries.into_iter().filter(ArchiveEntry::is_text).collect()
    }
}

/// Result of one trimming run.
#[derive(Debug, Clone)]
pub struct TrimOutcome {
    /// The re-packed archive
    pub archive: Vec<u8>,
    /// Names of the entries kept, in archive order
    pub kept: Vec<String>,
    /// Number of entries dropped by the trimmer
    pub dropped: usize,
    /// Size of the input archive in bytes
    pub input_bytes: u64,
}

impl TrimOutcome {
    pub fn count(&self) -> usize {
        self.kept.len()
    }
}

/// Trim raw archive bytes.
pub fn process_archive(
    bytes: &[u8],
    query: &Query,
    trimmer: &dyn Trimmer,
    limits: &ArchiveLimits,
) -> ProcessResult<TrimOutcome> {
    let entries = read_entries(bytes, limits)?;
    let total = entries.len();

    let kept = dedup_entries(trimmer.trim(query, entries));
    let archive = write_archive(&kept)?;

    Ok(TrimOutcome {
        archive,
        dropped: total.saturating_sub(kept.len()),
        kept: kept.into_iter().map(|e| e.name).collect(),
        input_bytes: bytes.len() as u64,
    })
}

/// Trim a Base64 payload as received on `/userinput`.
pub fn trim_payload(
    encoded: &str,
    query: &Query,
    trimmer: &dyn Trimmer,
    limits: &ArchiveLimits,
) -> ProcessResult<TrimOutcome> {
    let bytes = decode_payload(encoded)?;
    process_archive(&bytes, query, trimmer, limits)
}

/// Trim an archive on disk and write the result to `output`.
pub fn trim_file(
    input: &Path,
    output: &Path,
    query: &Query,
    trimmer: &dyn Trimmer,
    limits: &ArchiveLimits,
) -> ProcessResult<TrimOutcome> {
    let bytes = fs::read(input).map_err(ArchiveError::from)?;
    let outcome = process_archive(&bytes, query, trimmer, limits)?;
    fs::write(output, &outcome.archive).map_err(ArchiveError::from)?;
    Ok(outcome)
}
