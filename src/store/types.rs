//! Tracked URL records and their workflow enums.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

use crate::config::NEVER_AUDITED;

/// Optimization workflow state of a tracked URL.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display, AsRefStr,
)]
pub enum UrlStatus {
    /// Not worked on yet
    #[default]
    Pending,
    /// Currently being optimized
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    /// Optimization finished
    Optimized,
    /// Needs another look
    Review,
}

/// Work priority of a tracked URL.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display, AsRefStr,
)]
pub enum Priority {
    /// Do first
    High,
    /// Default priority
    #[default]
    Medium,
    /// Do last
    Low,
}

/// One URL tracked for a client, with the keywords it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedUrl {
    /// Page URL
    pub url: String,
    /// Primary keyword; may be empty
    #[serde(default)]
    pub primary_keyword: String,
    /// Secondary keywords in order
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    /// Workflow state
    #[serde(default)]
    pub status: UrlStatus,
    /// Work priority
    #[serde(default)]
    pub priority: Priority,
    /// `"Never"` or the `%Y-%m-%d %H:%M` time of the last audit
    #[serde(default = "never_audited")]
    pub last_audit: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

fn never_audited() -> String {
    NEVER_AUDITED.to_string()
}

impl TrackedUrl {
    /// A freshly tracked URL: pending, medium priority, never audited.
    pub fn new(
        url: impl Into<String>,
        primary_keyword: impl Into<String>,
        secondary_keywords: Vec<String>,
    ) -> Self {
        Self {
            url: url.into(),
            primary_keyword: primary_keyword.into(),
            secondary_keywords,
            status: UrlStatus::default(),
            priority: Priority::default(),
            last_audit: never_audited(),
            notes: String::new(),
        }
    }

    /// True once the URL has been audited at least once.
    pub fn is_audited(&self) -> bool {
        self.last_audit != NEVER_AUDITED
    }
}
