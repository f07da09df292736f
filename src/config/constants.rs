//! Configuration constants.
//!
//! This module defines the constants used throughout the application: network
//! defaults, the SEO rule thresholds, and the sentinel strings that appear in
//! audit records.

use std::time::Duration;

/// Default User-Agent string for HTTP requests.
///
/// A common desktop Chrome string; many sites refuse or degrade responses for
/// unknown agents. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// `Accept` header sent with every page request.
pub const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// `Accept-Language` header sent with every page request.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Per-request fetch timeout in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 15;

/// Headroom added to the fetch timeout to bound a whole audit task (fetch plus
/// analysis), so the client timeout fires first.
pub const AUDIT_TASK_GRACE: Duration = Duration::from_secs(5);

/// Default number of pages analyzed concurrently by the audit runner.
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Largest accepted `--max-concurrency` value.
pub const MAX_CONCURRENCY_LIMIT: usize = 64;

/// Default path of the client/URL store.
pub const DEFAULT_DATA_FILE: &str = "clients_data.json";

// Response and body size limits
/// Maximum response body size in bytes (32MB).
///
/// Far above any real HTML page; bodies past it are reported as fetch errors.
pub const MAX_RESPONSE_BODY_SIZE: usize = 32 * 1024 * 1024;

/// Maximum length of an error message embedded in `Status_Code`.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

// SEO rule thresholds (all inclusive bounds of the healthy range)
/// Shortest title that does not raise a "too short" issue.
pub const TITLE_MIN_CHARS: usize = 30;
/// Longest title that does not raise a "too long" issue.
pub const TITLE_MAX_CHARS: usize = 60;
/// Shortest meta description that does not raise a "too short" issue.
pub const META_DESC_MIN_CHARS: usize = 50;
/// Longest meta description that does not raise a "too long" issue.
pub const META_DESC_MAX_CHARS: usize = 160;
/// Pages with fewer words than this are reported as thin content.
pub const THIN_CONTENT_WORDS: usize = 300;
/// Size of the opening-words window checked for the primary keyword.
pub const FIRST_WORDS_WINDOW: usize = 100;

// Sentinel values
/// Marks a field that was not evaluated or could not be computed.
pub const NOT_AVAILABLE: &str = "N/A";
/// Marks an evaluated list that came out empty.
pub const NONE_LABEL: &str = "None";
/// Affirmative flag value.
pub const YES: &str = "Yes";
/// Negative flag value.
pub const NO: &str = "No";
/// Assumed robots directive when no `<meta name="robots">` is present.
pub const DEFAULT_META_ROBOTS: &str = "index, follow";
/// Basename reported for an `<img>` without a `src` attribute.
pub const UNKNOWN_IMAGE_SRC: &str = "unknown_src";
/// `last_audit` value of a URL that has never been audited.
pub const NEVER_AUDITED: &str = "Never";
/// Format of `last_audit` timestamps.
pub const AUDIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
