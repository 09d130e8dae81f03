//! End-to-end use of the tracker through the crate's public API, the way the
//! page's click and language handlers drive it.

use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;
use ui::analytics::{
    AnalyticsConfig, AnalyticsPort, AnalyticsSink, EventTracker, PageContext, RecordingSink,
    StaticPort, CUSTOM_EVENT, OBJECT_BUTTON,
};

/// Port whose sink "finishes loading" after some number of lookups,
/// like a third-party script that arrives late.
struct LateLoadingPort {
    sink: Rc<RecordingSink>,
    lookups_before_ready: Cell<u32>,
}

impl AnalyticsPort for LateLoadingPort {
    fn sink(&self) -> Option<Rc<dyn AnalyticsSink>> {
        let remaining = self.lookups_before_ready.get();
        if remaining > 0 {
            self.lookups_before_ready.set(remaining - 1);
            return None;
        }
        Some(self.sink.clone())
    }

    fn page_context(&self) -> Option<PageContext> {
        Some(PageContext::for_product(
            "Qiskit Ignis",
            "Qiskit",
            "https://qiskit.org/ignis",
            "/ignis",
        ))
    }
}

#[test]
fn events_flow_once_the_sink_loads() {
    let sink = Rc::new(RecordingSink::new());
    let port = LateLoadingPort {
        sink: sink.clone(),
        lookups_before_ready: Cell::new(2),
    };
    let tracker = EventTracker::with_port(port);

    tracker.track_click("Qiskit Ignis: GitHub Repository", OBJECT_BUTTON);
    tracker.track_click("Qiskit Ignis: GitHub Repository", OBJECT_BUTTON);
    assert!(sink.is_empty());

    tracker.track_click("Qiskit Ignis: GitHub Repository", OBJECT_BUTTON);
    tracker.track_selection_change("Français");

    let stats = tracker.stats();
    assert_eq!(stats.missing_sink, 2);
    assert_eq!(stats.emitted, 2);

    let calls = sink.calls();
    assert!(calls.iter().all(|(name, _)| name == CUSTOM_EVENT));
    assert_eq!(calls[0].1.action, "Button Clicked: Qiskit Ignis: GitHub Repository");
    assert_eq!(calls[1].1.action, "Language Changed to: Français");
    assert_eq!(calls[1].1.category, Some(json!("Qiskit")));
}

#[test]
fn context_without_category_still_emits() {
    let sink = Rc::new(RecordingSink::new());
    let context = PageContext::new(json!({ "productTitle": "Qiskit Ignis" }), "u", "/");
    let tracker = EventTracker::with_port(StaticPort::new(Some(sink.clone()), Some(context)));

    tracker.track_click("Qiskit Ignis: Copy Code Sample", OBJECT_BUTTON);

    let calls = sink.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.category, None);
}

#[test]
fn local_port_uses_configured_page() {
    let config = AnalyticsConfig::from_str(
        r#"
        [page]
        product = "Qiskit Aqua"
        analytics_category = "Elements"
        url = "app://aqua/"
        path = "/aqua"
        "#,
    )
    .unwrap();

    let port = StaticPort::local(&config.page);
    let context = port.page_context().unwrap();
    assert_eq!(context.page_info["productTitle"], "Qiskit Aqua");
    assert_eq!(context.category(), Some(&json!("Elements")));
    assert_eq!(context.path, "/aqua");
    assert!(port.sink().is_some());

    let tracker = EventTracker::new(Rc::new(port), config);
    tracker.track_click("GitHub Repository", OBJECT_BUTTON);
    assert_eq!(tracker.stats().emitted, 1);
}

#[test]
fn detached_tracker_never_emits() {
    let tracker = EventTracker::detached();
    tracker.track_click("anything", OBJECT_BUTTON);
    tracker.track_selection_change("English");
    assert_eq!(tracker.stats().skipped(), 2);
    assert_eq!(tracker.stats().emitted, 0);
}

#[test]
fn platform_tracker_reads_embedded_config() {
    let tracker = ui::analytics::platform_tracker();
    assert_eq!(tracker.config().event_name, CUSTOM_EVENT);
    tracker.track_click("GitHub Repository", OBJECT_BUTTON);
    assert_eq!(tracker.stats().emitted, 1);
}
