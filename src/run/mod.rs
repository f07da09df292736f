//! Audit runs over the tracked URLs of the store.
//!
//! Every URL is analyzed in its own task, bounded by a semaphore of
//! `max_concurrency` permits. Tasks share only the HTTP client; a failing or
//! panicking task yields an error-shaped row and never aborts the run.

mod task;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use log::{info, warn};

use crate::analysis::{AnalysisResult, SeoAnalyzer, StatusCode};
use crate::config::{Config, AUDIT_TIMESTAMP_FORMAT};
use crate::error_handling::StoreError;
use crate::initialization::{init_client, init_semaphore};
use crate::schema::SchemaTaxonomy;
use crate::store::{ClientStore, TrackedUrl};

use task::{audit_url_task, AuditTarget};

/// One audited URL with its tracking data.
#[derive(Debug, Clone)]
pub struct AuditRow {
    /// Client the URL belongs to
    pub client: String,
    /// Position of the URL within the client's list
    pub index: usize,
    /// Tracking data, with `last_audit` already updated
    pub tracked: TrackedUrl,
    /// Analysis outcome
    pub result: AnalysisResult,
}

/// Summary of an audit run.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Rows in store order
    pub rows: Vec<AuditRow>,
    /// Number of URLs audited
    pub total: usize,
    /// URLs that produced a success-shaped result
    pub succeeded: usize,
    /// URLs that produced an error-shaped result
    pub failed: usize,
    /// Wall-clock duration of the run
    pub elapsed_seconds: f64,
}

/// Audits every tracked URL, or only those of `client_filter`.
///
/// Each analyzed URL gets its `last_audit` set to the run's timestamp,
/// whatever the outcome.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the HTTP client cannot be
/// built, `client_filter` names an unknown client, or the store cannot be
/// written. Per-URL failures are reported in the rows instead.
///
/// # Example
///
/// ```no_run
/// use seo_audit::{run_audit, ClientStore, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::default();
/// let mut store = ClientStore::open(&config.data_file)?;
/// let report = run_audit(&config, &mut store, None).await?;
/// println!("{} audited, {} failed", report.total, report.failed);
/// # Ok(())
/// # }
/// ```
pub async fn run_audit(
    config: &Config,
    store: &mut ClientStore,
    client_filter: Option<&str>,
) -> Result<AuditReport> {
    config.validate().context("Invalid configuration")?;
    let start_time = Instant::now();

    if let Some(client) = client_filter {
        if store.urls(client).is_none() {
            return Err(StoreError::UnknownClient(client.to_string()).into());
        }
    }

    let targets: Vec<AuditTarget> = store
        .clients()
        .iter()
        .filter(|(client, _)| client_filter.map_or(true, |filter| filter == client.as_str()))
        .flat_map(|(client, urls)| {
            urls.iter().enumerate().map(move |(index, tracked)| AuditTarget {
                client: client.clone(),
                index,
                tracked: tracked.clone(),
            })
        })
        .collect();
    info!(
        "Auditing {} URLs with concurrency {}",
        targets.len(),
        config.max_concurrency
    );

    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let analyzer = Arc::new(SeoAnalyzer::new(client, SchemaTaxonomy::default()));
    let semaphore = init_semaphore(config.max_concurrency);
    let task_timeout = config.task_timeout();

    let mut tasks = Vec::with_capacity(targets.len());
    for target in &targets {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .context("Concurrency semaphore closed")?;
        tasks.push(tokio::spawn(audit_url_task(
            Arc::clone(&analyzer),
            target.clone(),
            permit,
            task_timeout,
        )));
    }

    let outcomes = futures::future::join_all(tasks).await;
    let timestamp = Local::now().format(AUDIT_TIMESTAMP_FORMAT).to_string();

    let mut rows = Vec::with_capacity(targets.len());
    for (target, outcome) in targets.into_iter().zip(outcomes) {
        let result = outcome.unwrap_or_else(|join_error| {
            warn!("Audit task for {} panicked: {join_error}", target.tracked.url);
            AnalysisResult::error(StatusCode::from_failure(join_error))
        });

        store
            .mark_audited(&target.client, target.index, &timestamp)
            .with_context(|| format!("Failed to record audit of {}", target.tracked.url))?;
        let mut tracked = target.tracked;
        tracked.last_audit = timestamp.clone();

        rows.push(AuditRow {
            client: target.client,
            index: target.index,
            tracked,
            result,
        });
    }

    let failed = rows.iter().filter(|row| row.result.is_error()).count();
    let report = AuditReport {
        total: rows.len(),
        succeeded: rows.len() - failed,
        failed,
        rows,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    };
    info!(
        "Audit finished: {} URLs, {} succeeded, {} failed in {:.1}s",
        report.total, report.succeeded, report.failed, report.elapsed_seconds
    );
    Ok(report)
}
