//! Per-URL audit task.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{info, warn};
use tokio::sync::OwnedSemaphorePermit;

use crate::analysis::{AnalysisInput, AnalysisResult, SeoAnalyzer, StatusCode};
use crate::store::TrackedUrl;

/// One tracked URL scheduled for analysis.
#[derive(Debug, Clone)]
pub(super) struct AuditTarget {
    pub client: String,
    pub index: usize,
    pub tracked: TrackedUrl,
}

impl AuditTarget {
    fn input(&self) -> AnalysisInput {
        AnalysisInput::new(
            self.tracked.url.clone(),
            self.tracked.primary_keyword.clone(),
            self.tracked.secondary_keywords.clone(),
        )
    }
}

/// Analyzes one target, bounded by `task_timeout`.
///
/// The permit is held until the analysis finishes. A timeout produces the
/// error-shaped result rather than failing the run.
pub(super) async fn audit_url_task(
    analyzer: Arc<SeoAnalyzer>,
    target: AuditTarget,
    _permit: OwnedSemaphorePermit,
    task_timeout: Duration,
) -> AnalysisResult {
    let start = Instant::now();
    let input = target.input();

    let result = match tokio::time::timeout(task_timeout, analyzer.analyze_input(&input)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                "Audit of {} timed out after {}s",
                input.url,
                task_timeout.as_secs()
            );
            AnalysisResult::error(StatusCode::from_failure(format!(
                "audit timed out after {} seconds",
                task_timeout.as_secs()
            )))
        }
    };

    info!(
        "[{}] {} -> {} ({} issues, {:.2}s)",
        target.client,
        input.url,
        result.status_code,
        result.issues().len(),
        start.elapsed().as_secs_f64()
    );
    result
}
