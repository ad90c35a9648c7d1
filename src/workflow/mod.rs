//! Crawl-job workflow
//!
//! This module contains the client-side core: the phase state machine, the
//! active-job snapshot, and the controller that coordinates validation,
//! analyze/start/stop calls, and status polling for one job at a time.

mod controller;
mod job;
mod state;

pub use controller::{CompletionHook, WorkflowController};
pub use job::JobSnapshot;
pub use state::{Outcome, Phase};

use thiserror::Error;

/// Errors that can occur while driving the workflow
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{operation} is not available while the workflow is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("Invalid crawl configuration: {0}")]
    Config(#[from] crate::ConfigError),

    #[error("No discovered URL at index {0}")]
    UnknownUrl(usize),

    #[error("No discovered URLs to start a crawl with")]
    NothingToStart,

    #[error("API error: {0}")]
    Api(#[from] crate::ApiError),
}

/// Result type for workflow operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;
