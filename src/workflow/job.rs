use crate::api::JobStatus;

/// Client-side handle on the active server-side job
///
/// Holds the job id and the latest status snapshot; each poll replaces the
/// snapshot wholesale. Discarded when the workflow reaches a terminal phase.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    job_id: String,
    latest: Option<JobStatus>,
}

impl JobSnapshot {
    pub fn new(job_id: String) -> Self {
        Self {
            job_id,
            latest: None,
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Latest status reported by the backend, if any poll has landed
    pub fn latest(&self) -> Option<&JobStatus> {
        self.latest.as_ref()
    }

    pub fn update(&mut self, status: JobStatus) {
        self.latest = Some(status);
    }

    /// Progress percentage from the latest snapshot, 0 before the first poll
    pub fn percent(&self) -> u32 {
        self.latest.as_ref().map(JobStatus::percent).unwrap_or(0)
    }
}
