//! Server and archive limits configuration.
//!
//! Values come from the CLI (with `ROTTEN_*` environment fallbacks, see
//! `main.rs`); the defaults match the frontend's enforced upload limit.

use std::path::PathBuf;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Largest decoded archive accepted, in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50_000_000;

/// Maximum number of entries read from one archive.
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Maximum total uncompressed size read from one archive.
pub const DEFAULT_MAX_UNCOMPRESSED_BYTES: u64 = 1 << 30;

/// Headroom on top of the Base64 payload for the rest of the JSON body.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Limits applied while reading an uploaded archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLimits {
    pub max_archive_bytes: u64,
    pub max_entries: usize,
    pub max_uncompressed_bytes: u64,
}

impl Default for ArchiveLimits {
    fn default() -> Self {
        Self {
            max_archive_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_entries: DEFAULT_MAX_ENTRIES,
            max_uncompressed_bytes: DEFAULT_MAX_UNCOMPRESSED_BYTES,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub limits: ArchiveLimits,
    /// Directory of the built frontend (`trunk build` output), served as a fallback
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            limits: ArchiveLimits::default(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn new(port: u16) -> Self {
        Self { port, ..Self::default() }
    }

    /// Request body limit: the Base64 form of the largest archive plus JSON overhead.
    pub fn body_limit(&self) -> usize {
        let max = self.limits.max_archive_bytes as usize;
        max.div_ceil(3) * 4 + BODY_OVERHEAD_BYTES
    }
}
