//! Crawlctl: a workflow client for crawl-ingestion jobs
//!
//! This crate drives a remote website-ingestion backend for a chatbot's
//! knowledge base: analyze a target site, curate the discovered pages,
//! start a crawl job, poll its status, and stop it on request.

pub mod api;
pub mod auth;
pub mod config;
pub mod notify;
pub mod pattern;
pub mod workflow;

use thiserror::Error;

/// Main error type for crawlctl operations
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Credential error: {0}")]
    Auth(#[from] AuthError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Workflow error: {0}")]
    Workflow(#[from] workflow::WorkflowError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Credential store errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No credential stored")]
    Missing,

    #[error("Failed to access credential store: {0}")]
    Io(#[from] std::io::Error),
}

/// Remote API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] ::url::ParseError),

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: String },

    #[error("Server rejected {endpoint}: {message}")]
    Rejected { endpoint: String, message: String },

    #[error("Malformed response from {endpoint}: {message}")]
    Malformed { endpoint: String, message: String },

    #[error("Credential error: {0}")]
    Auth(#[from] AuthError),
}

/// Result type alias for crawlctl operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

// Re-export commonly used types
pub use api::{ApiClient, JobStatus};
pub use config::{Config, CrawlConfig};
pub use notify::{ConsoleNotifier, Notice, Notifier};
pub use workflow::{Outcome, Phase, WorkflowController};
