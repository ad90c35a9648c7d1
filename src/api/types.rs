use crate::config::{ContentType, CrawlConfig};
use serde::{Deserialize, Serialize};

/// Crawl parameters as the backend expects them on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlRequest {
    pub target_url: String,
    pub depth: u32,
    pub limit: u32,
    pub content_types: Vec<ContentType>,
    pub exclude_patterns: Vec<String>,
}

impl From<&CrawlConfig> for CrawlRequest {
    fn from(config: &CrawlConfig) -> Self {
        Self {
            target_url: config.target_url.clone(),
            depth: config.depth,
            limit: config.limit,
            content_types: config.content_types.clone(),
            exclude_patterns: config.exclude_patterns.clone(),
        }
    }
}

/// Body for the start call: crawl parameters plus the curated URL list
#[derive(Debug, Clone, Serialize)]
pub struct StartRequest {
    #[serde(flatten)]
    pub config: CrawlRequest,
    pub urls: Vec<String>,
}

/// Body for the stop call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopRequest {
    pub job_id: String,
}

/// Response to the analyze call
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response to the start call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response to the stop call
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Latest snapshot of a server-side crawl job
///
/// The client never accumulates job history; each status poll replaces the
/// previous snapshot wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    #[serde(default)]
    pub processed: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub success: u32,
    #[serde(default)]
    pub errors: u32,
    #[serde(default)]
    pub current_url: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl JobStatus {
    /// Progress as an integer percentage, 0 when the total is unknown
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((u64::from(self.processed.min(self.total)) * 100) / u64::from(self.total)) as u32
    }

    /// True once the job will make no further progress
    pub fn is_terminal(&self) -> bool {
        self.completed || self.error.is_some()
    }
}
