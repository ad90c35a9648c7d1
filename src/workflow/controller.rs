//! Workflow controller - crawl-job orchestration logic
//!
//! This module drives one crawl job at a time through the full lifecycle:
//! - Validating the crawl configuration before any network call
//! - Requesting and curating the analyze preview
//! - Submitting the job and polling its status at a fixed interval
//! - Reporting progress and failures through the injected notifier
//!
//! All transitions go through `&mut self`, so at most one remote call per
//! kind is ever in flight; the poll loop awaits each status response before
//! sleeping for the next tick.

use crate::api::{ApiClient, JobStatus};
use crate::config::{validate_crawl_config, Config, CrawlConfig};
use crate::notify::{Notice, Notifier};
use crate::pattern::matches_any;
use crate::workflow::job::JobSnapshot;
use crate::workflow::state::{Outcome, Phase};
use crate::workflow::WorkflowError;
use std::sync::Arc;
use std::time::Duration;

/// Called when a job completes, with the final status snapshot
///
/// Embedders hook document-list refreshes here.
pub type CompletionHook = Box<dyn Fn(&JobStatus) + Send + Sync>;

/// Drives the analyze / curate / start / poll / stop workflow
///
/// Owns the crawl configuration, the discovered-URL preview, and the active
/// job snapshot. At most one job is active per controller.
pub struct WorkflowController {
    crawl: CrawlConfig,
    poll_interval: Duration,
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    phase: Phase,
    discovered: Vec<String>,
    job: Option<JobSnapshot>,
    on_complete: Option<CompletionHook>,
}

impl WorkflowController {
    /// Creates a controller in the Idle phase
    pub fn new(
        crawl: CrawlConfig,
        poll_interval: Duration,
        api: ApiClient,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            crawl,
            poll_interval,
            api,
            notifier,
            phase: Phase::Idle,
            discovered: Vec::new(),
            job: None,
            on_complete: None,
        }
    }

    /// Creates a controller from a loaded configuration
    pub fn from_config(config: &Config, api: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(
            config.crawl.clone(),
            Duration::from_millis(config.workflow.poll_interval_ms),
            api,
            notifier,
        )
    }

    /// Registers a hook invoked once when a job completes
    pub fn with_completion_hook(mut self, hook: CompletionHook) -> Self {
        self.on_complete = Some(hook);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The curated preview of pages a started crawl would ingest
    pub fn discovered(&self) -> &[String] {
        &self.discovered
    }

    /// The active job, if one is running
    pub fn job(&self) -> Option<&JobSnapshot> {
        self.job.as_ref()
    }

    /// Submits the crawl configuration for analysis
    ///
    /// Only available from Idle. Validation failures block before any
    /// network call. On success the preview is populated (minus excluded
    /// URLs) and the workflow moves to Analyzed; an empty preview keeps it
    /// Idle. On failure the workflow stays Idle and the error is surfaced
    /// once through the notifier.
    pub async fn analyze(&mut self) -> Result<Phase, WorkflowError> {
        self.require("analyze", Phase::can_analyze)?;

        if let Err(e) = validate_crawl_config(&self.crawl) {
            self.notifier
                .notify(Notice::Error, &format!("Invalid crawl configuration: {}", e));
            return Err(WorkflowError::Config(e));
        }

        match self.api.analyze(&self.crawl).await {
            Ok(urls) => {
                let found = urls.len();
                let kept: Vec<String> = urls
                    .into_iter()
                    .filter(|url| !matches_any(&self.crawl.exclude_patterns, url))
                    .collect();

                if kept.len() < found {
                    tracing::info!(
                        "Excluded {} of {} discovered URLs by pattern",
                        found - kept.len(),
                        found
                    );
                }

                if kept.is_empty() {
                    self.notifier
                        .notify(Notice::Info, "Analysis found no pages to ingest");
                    return Ok(self.phase);
                }

                self.notifier.notify(
                    Notice::Success,
                    &format!("Found {} pages to ingest", kept.len()),
                );
                self.discovered = kept;
                self.phase = Phase::Analyzed;
                Ok(self.phase)
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::Error, &format!("Site analysis failed: {}", e));
                Err(e.into())
            }
        }
    }

    /// Removes one URL from the preview before the crawl starts
    ///
    /// When the last URL is removed the workflow falls back to Idle; it is
    /// never Analyzed with an empty preview.
    pub fn remove_url(&mut self, index: usize) -> Result<Phase, WorkflowError> {
        self.require("remove_url", Phase::can_start)?;

        if index >= self.discovered.len() {
            return Err(WorkflowError::UnknownUrl(index));
        }

        let removed = self.discovered.remove(index);
        tracing::debug!("Removed {} from preview", removed);

        if self.discovered.is_empty() {
            self.notifier
                .notify(Notice::Info, "Preview is empty; analysis discarded");
            self.phase = Phase::Idle;
        }

        Ok(self.phase)
    }

    /// Discards the preview and returns to Idle
    ///
    /// Available from any phase except Running (a running job must be
    /// stopped, not cancelled).
    pub fn cancel(&mut self) -> Result<Phase, WorkflowError> {
        self.require("cancel", |phase| !phase.is_running())?;

        self.discovered.clear();
        self.job = None;
        self.phase = Phase::Idle;
        Ok(self.phase)
    }

    /// Starts the crawl job for the curated preview
    ///
    /// Only available from Analyzed with a non-empty preview; an empty
    /// preview is rejected without any network call. On success the preview
    /// is consumed and polling may begin; on failure the workflow reverts to
    /// Analyzed with the preview intact.
    pub async fn start(&mut self) -> Result<Phase, WorkflowError> {
        self.require("start", Phase::can_start)?;

        if self.discovered.is_empty() {
            return Err(WorkflowError::NothingToStart);
        }

        match self.api.start(&self.crawl, &self.discovered).await {
            Ok(job_id) => {
                self.notifier.notify(
                    Notice::Info,
                    &format!(
                        "Crawl job {} started for {} pages",
                        job_id,
                        self.discovered.len()
                    ),
                );
                self.discovered.clear();
                self.job = Some(JobSnapshot::new(job_id));
                self.phase = Phase::Running;
                Ok(self.phase)
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::Error, &format!("Failed to start crawl: {}", e));
                Err(e.into())
            }
        }
    }

    /// Performs one status poll of the running job
    ///
    /// Returns the resulting phase. A completed job, a job-reported error,
    /// or a failed poll all end the workflow; the job snapshot is cleared on
    /// every terminal transition.
    pub async fn poll_once(&mut self) -> Result<Phase, WorkflowError> {
        self.require("poll", Phase::is_running)?;

        let job_id = match self.job.as_ref() {
            Some(job) => job.job_id().to_string(),
            None => {
                return Err(WorkflowError::InvalidPhase {
                    operation: "poll",
                    phase: self.phase,
                })
            }
        };

        match self.api.status(&job_id).await {
            Ok(status) => {
                if let Some(error) = &status.error {
                    self.notifier
                        .notify(Notice::Error, &format!("Crawl failed: {}", error));
                    return Ok(self.finish(Outcome::Failed));
                }

                if status.completed {
                    let message = if status.errors > 0 {
                        format!(
                            "{} pages processed successfully, {} errors",
                            status.success, status.errors
                        )
                    } else {
                        format!("{} pages processed successfully", status.processed)
                    };
                    self.notifier.notify(Notice::Success, &message);

                    if let Some(hook) = &self.on_complete {
                        hook(&status);
                    }
                    return Ok(self.finish(Outcome::Completed));
                }

                tracing::info!(
                    "Job {}: {}/{} pages ({}%), current: {}",
                    job_id,
                    status.processed,
                    status.total,
                    status.percent(),
                    status.current_url.as_deref().unwrap_or("-")
                );

                if let Some(job) = self.job.as_mut() {
                    job.update(status);
                }
                Ok(self.phase)
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::Error, &format!("Status poll failed: {}", e));
                Ok(self.finish(Outcome::Failed))
            }
        }
    }

    /// Polls at the configured interval until the workflow is terminal
    ///
    /// One status request is in flight at a time: each poll is awaited
    /// before the interval sleep begins.
    pub async fn run_to_completion(&mut self) -> Result<Phase, WorkflowError> {
        self.require("run_to_completion", Phase::is_running)?;

        loop {
            let phase = self.poll_once().await?;
            if phase.is_terminal() {
                return Ok(phase);
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Asks the backend to stop the running job
    ///
    /// Polling is abandoned whether or not the stop request succeeds; a
    /// failed stop call is surfaced but the workflow still ends as Stopped.
    pub async fn stop(&mut self) -> Result<Phase, WorkflowError> {
        self.require("stop", Phase::is_running)?;

        let job_id = match self.job.as_ref() {
            Some(job) => job.job_id().to_string(),
            None => {
                return Err(WorkflowError::InvalidPhase {
                    operation: "stop",
                    phase: self.phase,
                })
            }
        };

        match self.api.stop(&job_id).await {
            Ok(()) => {
                self.notifier
                    .notify(Notice::Info, &format!("Crawl job {} stopped", job_id));
            }
            Err(e) => {
                self.notifier.notify(
                    Notice::Error,
                    &format!("Stop request failed ({}); abandoning job {}", e, job_id),
                );
            }
        }

        Ok(self.finish(Outcome::Stopped))
    }

    /// Ends the workflow: clears the job and records the outcome
    fn finish(&mut self, outcome: Outcome) -> Phase {
        self.job = None;
        self.phase = Phase::Done(outcome);
        tracing::debug!("Workflow finished: {}", self.phase);
        self.phase
    }

    fn require(
        &self,
        operation: &'static str,
        allowed: impl Fn(&Phase) -> bool,
    ) -> Result<(), WorkflowError> {
        if allowed(&self.phase) {
            Ok(())
        } else {
            Err(WorkflowError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }
}
