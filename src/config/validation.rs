use crate::config::types::{ApiConfig, Config, CrawlConfig, WorkflowConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)?;
    validate_crawl_config(&config.crawl)?;
    validate_workflow_config(&config.workflow)?;
    Ok(())
}

/// Validates backend connection configuration
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.chatbot_id.is_empty() {
        return Err(ConfigError::Validation(
            "chatbot_id cannot be empty".to_string(),
        ));
    }

    if config.token_path.is_empty() {
        return Err(ConfigError::Validation(
            "token_path cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_ms < 1000 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_ms must be >= 1000ms, got {}ms",
            config.request_timeout_ms
        )));
    }

    Ok(())
}

/// Validates a crawl job configuration
pub fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if !is_valid_target_url(&config.target_url) {
        return Err(ConfigError::InvalidUrl(format!(
            "target_url must be an absolute http(s) URL, got '{}'",
            config.target_url
        )));
    }

    if config.depth < 1 {
        return Err(ConfigError::Validation(format!(
            "depth must be >= 1, got {}",
            config.depth
        )));
    }

    if config.limit < 1 {
        return Err(ConfigError::Validation(format!(
            "limit must be >= 1, got {}",
            config.limit
        )));
    }

    if config.content_types.is_empty() {
        return Err(ConfigError::Validation(
            "content_types must name at least one type".to_string(),
        ));
    }

    for (i, ct) in config.content_types.iter().enumerate() {
        if config.content_types[..i].contains(ct) {
            return Err(ConfigError::Validation(format!(
                "content_types contains duplicate entry '{:?}'",
                ct
            )));
        }
    }

    for pattern in &config.exclude_patterns {
        if pattern.trim().is_empty() {
            return Err(ConfigError::Validation(
                "exclude_patterns cannot contain empty patterns".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates client-side workflow configuration
fn validate_workflow_config(config: &WorkflowConfig) -> Result<(), ConfigError> {
    if config.poll_interval_ms < 250 {
        return Err(ConfigError::Validation(format!(
            "poll_interval_ms must be >= 250ms, got {}ms",
            config.poll_interval_ms
        )));
    }

    Ok(())
}

/// Checks whether a string is a usable crawl target
///
/// Accepts exactly the strings that parse as absolute URLs with an http or
/// https scheme and a host. Relative paths, bare words, and non-web schemes
/// are rejected before any network call is made.
pub fn is_valid_target_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            (url.scheme() == "http" || url.scheme() == "https") && url.host_str().is_some()
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::ContentType;

    fn crawl_config() -> CrawlConfig {
        CrawlConfig {
            target_url: "https://example.com".to_string(),
            depth: 2,
            limit: 50,
            content_types: vec![ContentType::Text],
            exclude_patterns: vec![],
        }
    }

    #[test]
    fn test_is_valid_target_url() {
        assert!(is_valid_target_url("https://example.com"));
        assert!(is_valid_target_url("http://example.com/docs?page=1"));
        assert!(is_valid_target_url("https://sub.example.com/path"));

        assert!(!is_valid_target_url(""));
        assert!(!is_valid_target_url("example.com"));
        assert!(!is_valid_target_url("/relative/path"));
        assert!(!is_valid_target_url("not a url"));
        assert!(!is_valid_target_url("ftp://example.com"));
        assert!(!is_valid_target_url("mailto:user@example.com"));
    }

    #[test]
    fn test_valid_crawl_config() {
        assert!(validate_crawl_config(&crawl_config()).is_ok());
    }

    #[test]
    fn test_crawl_config_rejects_bad_target() {
        let mut config = crawl_config();
        config.target_url = "example.com".to_string();
        assert!(matches!(
            validate_crawl_config(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_crawl_config_rejects_zero_depth() {
        let mut config = crawl_config();
        config.depth = 0;
        assert!(matches!(
            validate_crawl_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_crawl_config_rejects_zero_limit() {
        let mut config = crawl_config();
        config.limit = 0;
        assert!(validate_crawl_config(&config).is_err());
    }

    #[test]
    fn test_crawl_config_rejects_empty_content_types() {
        let mut config = crawl_config();
        config.content_types = vec![];
        assert!(validate_crawl_config(&config).is_err());
    }

    #[test]
    fn test_crawl_config_rejects_duplicate_content_types() {
        let mut config = crawl_config();
        config.content_types = vec![ContentType::Text, ContentType::Pdf, ContentType::Text];
        assert!(validate_crawl_config(&config).is_err());
    }

    #[test]
    fn test_crawl_config_rejects_blank_pattern() {
        let mut config = crawl_config();
        config.exclude_patterns = vec!["*.pdf".to_string(), "  ".to_string()];
        assert!(validate_crawl_config(&config).is_err());
    }

    #[test]
    fn test_api_config_rejects_non_web_scheme() {
        let config = ApiConfig {
            base_url: "ftp://backend.example.com".to_string(),
            chatbot_id: "bot-1".to_string(),
            token_path: "/tmp/token".to_string(),
            request_timeout_ms: 30_000,
        };
        assert!(validate_api_config(&config).is_err());
    }

    #[test]
    fn test_api_config_rejects_short_timeout() {
        let config = ApiConfig {
            base_url: "https://backend.example.com".to_string(),
            chatbot_id: "bot-1".to_string(),
            token_path: "/tmp/token".to_string(),
            request_timeout_ms: 10,
        };
        assert!(validate_api_config(&config).is_err());
    }
}
