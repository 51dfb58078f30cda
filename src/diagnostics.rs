//! Diagnostic sink abstraction.
//!
//! The structure builder never fails on a bad request; it degrades and
//! reports through this sink. The sink is injectable so callers can route
//! warnings elsewhere and tests can assert a warning was or was not emitted.

use std::sync::Mutex;
use tracing::warn;

/// Advisory warning capability used by the structure builder.
pub trait Diagnostics {
    fn warn(&self, message: &str);
}

/// Default sink: forwards to the active `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Capturing sink for tests and embedders that collect warnings themselves.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
