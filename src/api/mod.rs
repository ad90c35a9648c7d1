//! Remote crawl-ingestion API
//!
//! Wire types and the HTTP client for the backend's four crawl endpoints:
//! analyze, start, status, and stop.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{AnalyzeResponse, CrawlRequest, JobStatus, StartRequest, StopRequest};
