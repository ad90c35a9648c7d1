//! User-facing notification seam
//!
//! The controller reports progress and failures through an injected
//! [`Notifier`], chosen at construction time. The default writes through
//! `tracing`; tests inject [`MemoryNotifier`] to assert on what was said.

use std::sync::Mutex;

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Success,
    Error,
}

/// Delivery seam for user-facing feedback
pub trait Notifier: Send + Sync {
    fn notify(&self, level: Notice, message: &str);
}

/// Default notifier: structured log output
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: Notice, message: &str) {
        match level {
            Notice::Info => tracing::info!("{}", message),
            Notice::Success => tracing::info!("✓ {}", message),
            Notice::Error => tracing::error!("{}", message),
        }
    }
}

/// Recording notifier for tests
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<(Notice, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything notified so far
    pub fn notices(&self) -> Vec<(Notice, String)> {
        self.notices.lock().expect("notifier lock poisoned").clone()
    }

    /// Counts notices at the given level
    pub fn count(&self, level: Notice) -> usize {
        self.notices().iter().filter(|(l, _)| *l == level).count()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, level: Notice, message: &str) {
        self.notices
            .lock()
            .expect("notifier lock poisoned")
            .push((level, message.to_string()));
    }
}
