//! Application configuration.
//!
//! Centralized configuration for the ROTTEN frontend.
//! These are compile-time values; the backend location is the only one
//! expected to change between environments.

/// Backend API base URL.
///
/// The ROTTEN backend that performs the trimming.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Path of the submission endpoint on the backend.
///
/// Older deployments accepted the same body on `/`.
pub const SUBMIT_PATH: &str = "/userinput";

/// Extension filter handed to the native file picker.
pub const ACCEPTED_EXTENSION: &str = ".zip";

/// Media-type header put back in front of the returned Base64 archive.
pub const RESULT_MEDIA_TYPE: &str = "data:application/zip;base64,";

/// How long a status banner stays up before clearing itself.
pub const STATUS_DISMISS_MS: u32 = 5_000;

/// How long a missing field stays highlighted.
pub const FLASH_MS: u32 = 1_200;

/// Bytes per displayed megabyte.
pub const BYTES_PER_MEGABYTE: f64 = 1_000_000.0;

/// Upload size limit, as enforced and as advertised to the user.
///
/// The two are kept separate on purpose: the copy shown to users has
/// historically said "50GB" while the enforced constant is 50,000,000 bytes.
/// [`FileLimits::mismatch`] reports when they disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileLimits {
    /// Largest archive (in bytes) the picker will accept.
    pub max_bytes: u64,
    /// Human-readable limit shown in the instructions.
    pub advertised: &'static str,
}

impl FileLimits {
    pub const DEFAULT: FileLimits = FileLimits {
        max_bytes: 50_000_000,
        advertised: "50GB",
    };

    /// Parse the advertised label into bytes (decimal units).
    pub fn advertised_bytes(&self) -> Option<u64> {
        let label = self.advertised.trim().to_ascii_uppercase();
        let split = label
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(label.len());
        let (number, unit) = label.split_at(split);
        let number: f64 = number.parse().ok()?;
        let multiplier = match unit.trim() {
            "B" | "" => 1.0,
            "KB" => 1e3,
            "MB" => 1e6,
            "GB" => 1e9,
            "TB" => 1e12,
            _ => return None,
        };
        Some((number * multiplier).round() as u64)
    }

    /// Describe the disagreement between the advertised and enforced limit, if any.
    pub fn mismatch(&self) -> Option<String> {
        match self.advertised_bytes() {
            Some(bytes) if bytes == self.max_bytes => None,
            Some(bytes) => Some(format!(
                "advertised upload limit {} ({} bytes) differs from enforced limit {} bytes",
                self.advertised, bytes, self.max_bytes
            )),
            None => Some(format!(
                "advertised upload limit {:?} cannot be compared with enforced limit {} bytes",
                self.advertised, self.max_bytes
            )),
        }
    }
}

impl Default for FileLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Full URL of the submission endpoint.
pub fn submit_url() -> String {
    format!("{}{}", BACKEND_URL, SUBMIT_PATH)
}
