//! Configuration module for crawlctl
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files: the backend connection, the crawl job parameters, and the
//! client-side workflow settings.
//!
//! # Example
//!
//! ```no_run
//! use crawlctl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawling {} to depth {}", config.crawl.target_url, config.crawl.depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ApiConfig, Config, ContentType, CrawlConfig, WorkflowConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

// Re-export validation helpers used by the workflow layer
pub use validation::{is_valid_target_url, validate_crawl_config};
