//! Command-line interface definition.
//!
//! Lives in the library so the argument surface can be parsed in tests.
//!
//! # Examples
//!
//! ```bash
//! # One-off analysis
//! seo_audit analyze https://example.com/ --keyword example --secondary domain,iana
//!
//! # Track a URL and audit everything
//! seo_audit client add Acme
//! seo_audit url add Acme https://acme.test/widgets --keyword widgets
//! seo_audit audit --output report.csv
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_DATA_FILE, DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS,
};
use crate::config::{Config, LogFormat, LogLevel};
use crate::export::ExportFormat;
use crate::store::{Priority, UrlStatus};

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(
    name = "seo_audit",
    about = "Audits on-page SEO signals of tracked client URLs."
)]
pub struct Cli {
    /// Options shared by every subcommand
    #[command(flatten)]
    pub global: GlobalOpts,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Options accepted by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// JSON file holding tracked clients and URLs
    #[arg(long, global = true, value_parser, default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum pages analyzed concurrently during an audit
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,
}

impl GlobalOpts {
    /// Library configuration built from the flags.
    pub fn to_config(&self) -> Config {
        Config {
            data_file: self.data_file.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            max_concurrency: self.max_concurrency,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a single URL and print the result
    Analyze(AnalyzeArgs),

    /// Manage clients
    Client {
        /// Client action
        #[command(subcommand)]
        action: ClientCommand,
    },

    /// Manage tracked URLs
    Url {
        /// URL action
        #[command(subcommand)]
        action: UrlCommand,
    },

    /// Replace all clients and URLs with the contents of a CSV file
    Import {
        /// CSV with Client_ID, Target_URL, Primary_Keyword and Secondary_Keyword_* columns
        #[arg(value_parser)]
        file: PathBuf,
    },

    /// Audit tracked URLs and write a report
    Audit(AuditArgs),
}

/// Output format of `analyze`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ResultFormat {
    /// Pretty-printed JSON object
    #[default]
    Json,
    /// One `key: value` line per field
    Plain,
}

/// Arguments of `analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Absolute URL of the page
    pub url: String,

    /// Primary keyword (omit to skip primary keyword checks)
    #[arg(long, short = 'k', default_value = "")]
    pub keyword: String,

    /// Comma-separated secondary keywords
    #[arg(long, short = 's', value_delimiter = ',')]
    pub secondary: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ResultFormat::Json)]
    pub format: ResultFormat,
}

/// Client actions.
#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// Add a client
    Add {
        /// Client name
        name: String,
    },
    /// Remove a client and all its URLs
    Remove {
        /// Client name
        name: String,
    },
    /// List clients and their tracked URLs
    List,
}

/// Tracked URL actions. URLs are addressed by client and position.
#[derive(Debug, Subcommand)]
pub enum UrlCommand {
    /// Track a URL for a client
    Add {
        /// Client name
        client: String,
        /// Page URL
        url: String,
        /// Primary keyword
        #[arg(long, short = 'k', default_value = "")]
        keyword: String,
        /// Comma-separated secondary keywords
        #[arg(long, short = 's', value_delimiter = ',')]
        secondary: Vec<String>,
    },
    /// Stop tracking a URL
    Remove {
        /// Client name
        client: String,
        /// Position in `client list`
        index: usize,
    },
    /// Change the workflow status of a URL
    SetStatus {
        /// Client name
        client: String,
        /// Position in `client list`
        index: usize,
        /// New status
        #[arg(value_enum)]
        status: UrlStatus,
    },
    /// Change the priority of a URL
    SetPriority {
        /// Client name
        client: String,
        /// Position in `client list`
        index: usize,
        /// New priority
        #[arg(value_enum)]
        priority: Priority,
    },
    /// Replace the notes of a URL
    SetNotes {
        /// Client name
        client: String,
        /// Position in `client list`
        index: usize,
        /// Notes text
        notes: String,
    },
}

/// Arguments of `audit`.
#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Only audit this client's URLs
    #[arg(long)]
    pub client: Option<String>,

    /// Report file (stdout if omitted)
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}
