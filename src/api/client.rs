//! HTTP client for the crawl-ingestion backend
//!
//! This module owns all network plumbing for the four crawl endpoints:
//! - Building the reqwest client with timeouts and a user agent
//! - Attaching the bearer token from the credential store
//! - Decoding success payloads and surfacing backend-reported errors
//! - Classifying transport failures (timeout, connect, other)

use crate::api::types::{
    AckResponse, AnalyzeResponse, CrawlRequest, JobStatus, StartRequest, StartResponse,
    StopRequest,
};
use crate::auth::CredentialStore;
use crate::config::{ApiConfig, CrawlConfig};
use crate::{ApiError, ApiResult, AuthError};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;

/// Client for one chatbot's crawl endpoints
///
/// Holds the base URL, the chatbot id, and the credential store it reads the
/// bearer token from on every request. All collaborators receive the client
/// by reference; nothing is process-global.
pub struct ApiClient {
    http: Client,
    base_url: String,
    chatbot_id: String,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Creates a client from backend configuration and a credential store
    pub fn new(config: &ApiConfig, credentials: Arc<dyn CredentialStore>) -> ApiResult<Self> {
        let http = build_http_client(Duration::from_millis(config.request_timeout_ms))?;

        // Normalize so path construction is join-free
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            chatbot_id: config.chatbot_id.clone(),
            credentials,
        })
    }

    /// Asks the backend to discover the pages a crawl of `config` would ingest
    ///
    /// Returns the discovered URLs in the order the backend reported them.
    pub async fn analyze(&self, config: &CrawlConfig) -> ApiResult<Vec<String>> {
        let endpoint = self.endpoint("analyze");
        let body = CrawlRequest::from(config);

        tracing::debug!("POST {} (target: {})", endpoint, config.target_url);
        let request = self.http.post(&endpoint).json(&body);
        let response = self.send(request, &endpoint).await?;
        let parsed: AnalyzeResponse = self.decode(response, &endpoint).await?;

        if !parsed.success {
            return Err(rejected(&endpoint, parsed.error));
        }

        Ok(parsed.urls)
    }

    /// Submits a crawl job for the curated URL list
    ///
    /// Returns the server-assigned job id.
    pub async fn start(&self, config: &CrawlConfig, urls: &[String]) -> ApiResult<String> {
        let endpoint = self.endpoint("start");
        let body = StartRequest {
            config: CrawlRequest::from(config),
            urls: urls.to_vec(),
        };

        tracing::debug!("POST {} ({} urls)", endpoint, urls.len());
        let request = self.http.post(&endpoint).json(&body);
        let response = self.send(request, &endpoint).await?;
        let parsed: StartResponse = self.decode(response, &endpoint).await?;

        if !parsed.success {
            return Err(rejected(&endpoint, parsed.error));
        }

        parsed.job_id.ok_or_else(|| ApiError::Malformed {
            endpoint,
            message: "start response missing jobId".to_string(),
        })
    }

    /// Fetches the latest snapshot of a running job
    pub async fn status(&self, job_id: &str) -> ApiResult<JobStatus> {
        let endpoint = format!("{}/{}", self.endpoint("status"), job_id);

        tracing::trace!("GET {}", endpoint);
        let request = self.http.get(&endpoint);
        let response = self.send(request, &endpoint).await?;
        self.decode(response, &endpoint).await
    }

    /// Asks the backend to stop a running job
    pub async fn stop(&self, job_id: &str) -> ApiResult<()> {
        let endpoint = self.endpoint("stop");
        let body = StopRequest {
            job_id: job_id.to_string(),
        };

        tracing::debug!("POST {} (job: {})", endpoint, job_id);
        let request = self.http.post(&endpoint).json(&body);
        let response = self.send(request, &endpoint).await?;
        let parsed: AckResponse = self.decode(response, &endpoint).await?;

        if !parsed.success {
            return Err(rejected(&endpoint, parsed.error));
        }

        Ok(())
    }

    fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/api/chatbots/{}/crawl/{}",
            self.base_url, self.chatbot_id, operation
        )
    }

    /// Attaches the bearer token and sends, classifying transport failures
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> ApiResult<Response> {
        let token = self
            .credentials
            .read()?
            .ok_or(ApiError::Auth(AuthError::Missing))?;

        match request.bearer_auth(token).send().await {
            Ok(response) => Ok(response),
            Err(e) if e.is_timeout() => Err(ApiError::Timeout {
                endpoint: endpoint.to_string(),
            }),
            Err(e) => Err(ApiError::Transport {
                endpoint: endpoint.to_string(),
                source: e,
            }),
        }
    }

    /// Decodes a success payload, or surfaces a backend-reported error
    ///
    /// Non-2xx bodies are parsed as JSON (falling back to an empty object);
    /// the `error` field wins over the HTTP status text when present.
    async fn decode<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> ApiResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let parsed: serde_json::Value =
                serde_json::from_str(&body).unwrap_or_else(|_| serde_json::json!({}));

            let message = parsed
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| status_text(status));

            return Err(ApiError::Rejected {
                endpoint: endpoint.to_string(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        serde_json::from_str(&body).map_err(|e| ApiError::Malformed {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

/// Builds the HTTP client with explicit timeouts
fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("crawlctl/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .build()
}

fn rejected(endpoint: &str, error: Option<String>) -> ApiError {
    ApiError::Rejected {
        endpoint: endpoint.to_string(),
        message: error.unwrap_or_else(|| "backend reported failure".to_string()),
    }
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}
