//! Click and selection tracking for the analytics collector.
//!
//! UI handlers call [`EventTracker::track_click`] or
//! [`EventTracker::track_selection_change`]. The tracker asks its
//! [`AnalyticsPort`] for a sink and a [`PageContext`]; when both are there it
//! builds a [`TrackedEvent`] and hands it to the sink, otherwise the call is a
//! silent no-op. Nothing is buffered or retried.
//!
//! Ports:
//! - `BrowserPort` (wasm32): `window.bluemixAnalytics` + `window.digitalData`.
//! - [`StaticPort`]: explicitly supplied collaborators (desktop, tests).

mod config;
mod context;
mod event;
mod hooks;
mod port;
mod sink;
mod tracker;

#[cfg(target_arch = "wasm32")]
mod browser;

use std::rc::Rc;

use crate::core::platform::Platform;

pub use config::{AnalyticsConfig, ConfigError, PageConfig};
pub use context::PageContext;
pub use event::{TrackedEvent, CUSTOM_EVENT, OBJECT_BUTTON, OBJECT_SELECT_COMBOBOX};
pub use hooks::{use_event_tracker, use_tracker_provider};
pub use port::{AnalyticsPort, StaticPort};
pub use sink::{AnalyticsSink, LogSink, RecordingSink, SinkError};
pub use tracker::{EventTracker, TrackerStats};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserPort;

/// Tracker wired to this platform's port, using the embedded config.
pub fn platform_tracker() -> EventTracker {
    let config = AnalyticsConfig::embedded();

    #[cfg(target_arch = "wasm32")]
    let port: Rc<dyn AnalyticsPort> = Rc::new(BrowserPort);

    #[cfg(not(target_arch = "wasm32"))]
    let port: Rc<dyn AnalyticsPort> = Rc::new(StaticPort::local(&config.page));

    tracing::debug!(
        target: "analytics",
        platform = Platform::current().as_str(),
        enabled = config.enabled,
        "event tracker ready"
    );
    EventTracker::new(port, config)
}
