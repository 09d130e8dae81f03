//! Analytics sinks: the collectors events are handed to.

use std::cell::RefCell;

use thiserror::Error;

use super::event::TrackedEvent;

/// Why a sink could not accept an event.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The collector object exists but exposes no callable `trackEvent`.
    #[error("analytics sink has no callable `{0}`")]
    NotCallable(&'static str),
    /// The collector was called and reported a failure.
    #[error("analytics sink rejected event: {0}")]
    Rejected(String),
    /// The payload could not be encoded for the collector.
    #[error("failed to encode analytics payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// External collector of structured usage events.
///
/// Implementations must not block; anything slow belongs to the collector
/// itself.
pub trait AnalyticsSink {
    fn track_event(&self, event_name: &str, payload: &TrackedEvent) -> Result<(), SinkError>;
}

/// Sink that writes every event to the `analytics` tracing target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn track_event(&self, event_name: &str, payload: &TrackedEvent) -> Result<(), SinkError> {
        let body = serde_json::to_string(payload)?;
        tracing::info!(target: "analytics", event = event_name, "{body}");
        Ok(())
    }
}

/// In-memory sink keeping every `(event_name, payload)` pair it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: RefCell<Vec<(String, TrackedEvent)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, TrackedEvent)> {
        self.calls.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

impl AnalyticsSink for RecordingSink {
    fn track_event(&self, event_name: &str, payload: &TrackedEvent) -> Result<(), SinkError> {
        self.calls
            .borrow_mut()
            .push((event_name.to_string(), payload.clone()));
        Ok(())
    }
}
