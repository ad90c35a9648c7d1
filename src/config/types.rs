use serde::Deserialize;

/// Main configuration structure for crawlctl
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub workflow: WorkflowConfig,
}

/// Remote backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the crawl-ingestion backend
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Chatbot whose knowledge base receives the crawled pages
    #[serde(rename = "chatbot-id")]
    pub chatbot_id: String,

    /// Path to the file holding the bearer token
    #[serde(rename = "token-path")]
    pub token_path: String,

    /// Per-request timeout in milliseconds
    #[serde(rename = "request-timeout-ms", default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

/// Crawl job configuration submitted to the backend
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Absolute URL of the site to ingest
    #[serde(rename = "target-url")]
    pub target_url: String,

    /// Maximum link depth to follow from the target URL
    pub depth: u32,

    /// Maximum number of pages to ingest
    pub limit: u32,

    /// Content types the backend should ingest
    #[serde(rename = "content-types")]
    pub content_types: Vec<ContentType>,

    /// Glob or substring patterns for URLs to skip
    #[serde(rename = "exclude-patterns", default)]
    pub exclude_patterns: Vec<String>,
}

/// Content types the backend knows how to ingest
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Pdf,
    Doc,
}

/// Client-side workflow behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowConfig {
    /// Delay between status polls in milliseconds
    #[serde(rename = "poll-interval-ms", default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30_000
}

fn default_poll_interval() -> u64 {
    2_000
}
