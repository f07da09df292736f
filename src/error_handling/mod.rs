//! Error handling.
//!
//! Error types are split by the layer that raises them:
//! - **Initialization**: logger and HTTP client setup
//! - **Config**: invalid settings
//! - **Fetch**: transport failures while retrieving a page
//! - **Store / Import**: client/URL persistence and bulk import
//!
//! Page analysis itself never returns an error; fetch failures are folded into
//! the error-shaped `AnalysisResult`.

mod types;

// Re-export public API
pub use types::{ConfigError, FetchError, ImportError, InitializationError, StoreError};
