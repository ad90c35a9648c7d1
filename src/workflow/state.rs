/// Workflow phase definitions for the crawl-job lifecycle
///
/// One controller drives one job at a time through these phases.
use std::fmt;

/// How a finished workflow ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The backend reported the job completed
    Completed,

    /// The user asked for the job to stop
    Stopped,

    /// The job or a status poll reported an error
    Failed,
}

/// Current phase of the crawl workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No analysis has been accepted yet
    Idle,

    /// The backend returned a URL preview awaiting curation
    Analyzed,

    /// A job was submitted and is being polled
    Running,

    /// The workflow ended; no further transitions except cancel-to-Idle
    Done(Outcome),
}

impl Phase {
    /// Returns true if the workflow reached a terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Returns true if a job is currently being polled
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns true if analyze may be submitted from this phase
    pub fn can_analyze(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if the URL preview may be curated or consumed
    pub fn can_start(&self) -> bool {
        matches!(self, Self::Analyzed)
    }

    /// Returns a short lowercase label for logs and display
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Analyzed => "analyzed",
            Self::Running => "running",
            Self::Done(Outcome::Completed) => "completed",
            Self::Done(Outcome::Stopped) => "stopped",
            Self::Done(Outcome::Failed) => "failed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
