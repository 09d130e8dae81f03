//! Dioxus glue: share one tracker across the component tree.

use dioxus::prelude::*;

use super::tracker::EventTracker;

/// Install `tracker` as the app-wide tracker (call once in the root component).
pub fn use_tracker_provider(init: impl FnOnce() -> EventTracker) -> EventTracker {
    use_context_provider(init)
}

/// The tracker provided by an ancestor, or a detached one that never emits.
pub fn use_event_tracker() -> EventTracker {
    use_hook(|| try_consume_context::<EventTracker>().unwrap_or_else(EventTracker::detached))
}
