//! Presence-gated, fire-and-forget event emission.

use std::cell::Cell;
use std::rc::Rc;

use super::config::AnalyticsConfig;
use super::context::PageContext;
use super::event::TrackedEvent;
use super::port::{AnalyticsPort, StaticPort};

/// Counters describing what happened to each tracking call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrackerStats {
    /// Events handed to the sink successfully.
    pub emitted: u64,
    /// Calls dropped because analytics is turned off in config.
    pub disabled: u64,
    /// Calls dropped because no sink was loaded.
    pub missing_sink: u64,
    /// Calls dropped because no page context was available.
    pub missing_context: u64,
    /// Calls where the sink was reached but reported an error.
    pub sink_failures: u64,
}

impl TrackerStats {
    /// Every call that did not reach a sink.
    pub fn skipped(&self) -> u64 {
        self.disabled + self.missing_sink + self.missing_context
    }
}

#[derive(Debug, Default)]
struct Counters {
    emitted: Cell<u64>,
    disabled: Cell<u64>,
    missing_sink: Cell<u64>,
    missing_context: Cell<u64>,
    sink_failures: Cell<u64>,
}

fn bump(counter: &Cell<u64>) {
    counter.set(counter.get().saturating_add(1));
}

/// Turns UI interactions into [`TrackedEvent`]s and hands them to whatever
/// sink the port currently offers.
///
/// Safe to call from any handler in any environment: a missing sink or page
/// context is a silent no-op, and sink errors are logged and swallowed.
/// Clones share the same port and counters.
#[derive(Clone)]
pub struct EventTracker {
    port: Rc<dyn AnalyticsPort>,
    config: Rc<AnalyticsConfig>,
    counters: Rc<Counters>,
}

impl EventTracker {
    pub fn new(port: Rc<dyn AnalyticsPort>, config: AnalyticsConfig) -> Self {
        Self {
            port,
            config: Rc::new(config),
            counters: Rc::new(Counters::default()),
        }
    }

    pub fn with_port(port: impl AnalyticsPort + 'static) -> Self {
        Self::new(Rc::new(port), AnalyticsConfig::default())
    }

    /// Tracker that never emits.
    pub fn detached() -> Self {
        Self::with_port(StaticPort::detached())
    }

    /// Report a click as `"Button Clicked: {action}"`.
    pub fn track_click(&self, action: &str, object_type: &str) {
        self.emit(|ctx| TrackedEvent::click(ctx, action, object_type));
    }

    /// Report a language pick as `"Language Changed to: {selected_label}"`.
    pub fn track_selection_change(&self, selected_label: &str) {
        self.emit(|ctx| TrackedEvent::selection_change(ctx, selected_label));
    }

    pub fn stats(&self) -> TrackerStats {
        let c = &self.counters;
        TrackerStats {
            emitted: c.emitted.get(),
            disabled: c.disabled.get(),
            missing_sink: c.missing_sink.get(),
            missing_context: c.missing_context.get(),
            sink_failures: c.sink_failures.get(),
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    fn emit(&self, build: impl FnOnce(&PageContext) -> TrackedEvent) {
        if !self.config.enabled {
            bump(&self.counters.disabled);
            tracing::debug!(target: "analytics", "disabled; event dropped");
            return;
        }
        let Some(sink) = self.port.sink() else {
            bump(&self.counters.missing_sink);
            tracing::debug!(target: "analytics", "no sink loaded; event dropped");
            return;
        };
        let Some(context) = self.port.page_context() else {
            bump(&self.counters.missing_context);
            tracing::debug!(target: "analytics", "no page context; event dropped");
            return;
        };

        let event = build(&context);
        match sink.track_event(&self.config.event_name, &event) {
            Ok(()) => bump(&self.counters.emitted),
            Err(err) => {
                bump(&self.counters.sink_failures);
                tracing::warn!(target: "analytics", action = %event.action, "{err}");
            }
        }
    }
}

impl std::fmt::Debug for EventTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventTracker")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

impl PartialEq for EventTracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.counters, &other.counters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{AnalyticsSink, RecordingSink, SinkError, CUSTOM_EVENT, OBJECT_BUTTON};
    use serde_json::json;

    fn context() -> PageContext {
        PageContext::new(
            json!({ "productTitle": "Qiskit Ignis", "analytics": "Qiskit" }),
            "https://qiskit.org/ignis",
            "/ignis",
        )
    }

    fn recording(context: Option<PageContext>) -> (EventTracker, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::new());
        let port = StaticPort::new(Some(sink.clone()), context);
        (EventTracker::with_port(port), sink)
    }

    struct NoTrackEvent;

    impl AnalyticsSink for NoTrackEvent {
        fn track_event(&self, _: &str, _: &TrackedEvent) -> Result<(), SinkError> {
            Err(SinkError::NotCallable("trackEvent"))
        }
    }

    #[test]
    fn absent_sink_is_a_no_op() {
        let tracker = EventTracker::with_port(StaticPort::new(None, Some(context())));
        tracker.track_click("GitHub Repository", OBJECT_BUTTON);
        tracker.track_selection_change("French");

        let stats = tracker.stats();
        assert_eq!(stats.emitted, 0);
        assert_eq!(stats.missing_sink, 2);
    }

    #[test]
    fn absent_context_is_a_no_op_even_with_sink() {
        let (tracker, sink) = recording(None);
        tracker.track_click("GitHub Repository", OBJECT_BUTTON);

        assert!(sink.is_empty());
        assert_eq!(tracker.stats().missing_context, 1);
    }

    #[test]
    fn click_emits_one_custom_event() {
        let (tracker, sink) = recording(Some(context()));
        tracker.track_click("GitHub Repository", "Button");

        let calls = sink.calls();
        assert_eq!(calls.len(), 1);
        let (name, event) = &calls[0];
        assert_eq!(name, CUSTOM_EVENT);
        assert_eq!(
            serde_json::to_value(event).unwrap(),
            json!({
                "productTitle": { "productTitle": "Qiskit Ignis", "analytics": "Qiskit" },
                "category": "Qiskit",
                "url": "https://qiskit.org/ignis",
                "path": "/ignis",
                "action": "Button Clicked: GitHub Repository",
                "objectType": "Button",
                "successFlag": true,
            })
        );
    }

    #[test]
    fn selection_change_formats_action() {
        let (tracker, sink) = recording(Some(context()));
        tracker.track_selection_change("French");

        let calls = sink.calls();
        let (_, event) = &calls[0];
        assert_eq!(event.action, "Language Changed to: French");
        assert_eq!(event.object_type, "Select Combobox");
    }

    #[test]
    fn identical_calls_are_not_deduplicated() {
        let (tracker, sink) = recording(Some(context()));
        tracker.track_click("GitHub Repository", OBJECT_BUTTON);
        tracker.track_click("GitHub Repository", OBJECT_BUTTON);

        let calls = sink.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(tracker.stats().emitted, 2);
    }

    #[test]
    fn sink_without_track_event_is_counted_not_raised() {
        let port = StaticPort::new(Some(Rc::new(NoTrackEvent)), Some(context()));
        let tracker = EventTracker::with_port(port);
        tracker.track_click("Copy Code Sample", OBJECT_BUTTON);

        let stats = tracker.stats();
        assert_eq!(stats.sink_failures, 1);
        assert_eq!(stats.emitted, 0);
    }

    #[test]
    fn disabled_config_drops_events() {
        let sink = Rc::new(RecordingSink::new());
        let port = StaticPort::new(Some(sink.clone()), Some(context()));
        let config = AnalyticsConfig {
            enabled: false,
            ..AnalyticsConfig::default()
        };
        let tracker = EventTracker::new(Rc::new(port), config);
        tracker.track_click("GitHub Repository", OBJECT_BUTTON);

        assert!(sink.is_empty());
        assert_eq!(tracker.stats().disabled, 1);
        assert_eq!(tracker.stats().skipped(), 1);
    }

    #[test]
    fn configured_event_name_is_used() {
        let sink = Rc::new(RecordingSink::new());
        let port = StaticPort::new(Some(sink.clone()), Some(context()));
        let config = AnalyticsConfig {
            event_name: "Ignis Event".into(),
            ..AnalyticsConfig::default()
        };
        EventTracker::new(Rc::new(port), config).track_click("x", OBJECT_BUTTON);

        assert_eq!(sink.calls()[0].0, "Ignis Event");
    }

    #[test]
    fn clones_share_counters() {
        let (tracker, _sink) = recording(Some(context()));
        let clone = tracker.clone();
        clone.track_click("x", OBJECT_BUTTON);
        assert_eq!(tracker.stats().emitted, 1);
        assert_eq!(tracker, clone);
    }
}
