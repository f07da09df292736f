//! seo_audit library: on-page SEO analysis for tracked client URLs
//!
//! This library fetches a page, extracts its structural SEO signals (title,
//! meta description, canonical link, headings, content volume, links, images,
//! structured data), checks primary and secondary keyword placement, and emits
//! a fixed-shape audit record with a prioritized list of issues.
//!
//! Around the analyzer sit a JSON-file store of clients and their tracked URLs,
//! a CSV bulk importer, a concurrent audit runner and CSV/JSONL report export.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::initialization::init_client;
//! use seo_audit::{Config, SchemaTaxonomy, SeoAnalyzer};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client(&Config::default())?;
//! let analyzer = SeoAnalyzer::new(client, SchemaTaxonomy::default());
//!
//! let result = analyzer
//!     .analyze("https://example.com/", "example", &["domain".to_string()])
//!     .await;
//! println!("{}: {:?}", result.status_code, result.issues());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching and audit runs require a Tokio runtime. The analysis stages
//! themselves ([`analyze_document`] and the `parse` functions) are synchronous.

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod issues;
pub mod keywords;
pub mod parse;
pub mod run;
pub mod schema;
pub mod store;
mod utils;

// Re-export public API
pub use analysis::{
    analyze_document, AnalysisInput, AnalysisResult, SeoAnalyzer, StatusCode, RESULT_KEYS,
};
pub use config::{Config, LogFormat, LogLevel};
pub use export::{export_csv, export_jsonl, export_report, ExportFormat};
pub use run::{run_audit, AuditReport, AuditRow};
pub use schema::{classify_schema_types, SchemaClassification, SchemaTaxonomy};
pub use store::{ClientStore, Priority, TrackedUrl, UrlStatus};
