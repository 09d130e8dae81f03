//! Browser port: reads the collector and the page data layer off `window`.
//!
//! Both globals are injected by third-party scripts that load asynchronously
//! and only in production deployments, so they are looked up on every call.

use std::rc::Rc;

use js_sys::{Function, Reflect, JSON};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

use super::context::PageContext;
use super::event::TrackedEvent;
use super::port::AnalyticsPort;
use super::sink::{AnalyticsSink, SinkError};

/// Global holding the analytics collector.
const SINK_GLOBAL: &str = "bluemixAnalytics";
/// Global holding the page data layer (`digitalData.page.pageInfo`).
const DATA_LAYER_GLOBAL: &str = "digitalData";
const TRACK_EVENT: &str = "trackEvent";

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPort;

impl AnalyticsPort for BrowserPort {
    fn sink(&self) -> Option<Rc<dyn AnalyticsSink>> {
        let window = web_sys::window()?;
        let target = lookup(&window, SINK_GLOBAL)?;
        Some(Rc::new(JsSink { target }))
    }

    fn page_context(&self) -> Option<PageContext> {
        let window = web_sys::window()?;
        let data_layer = lookup(&window, DATA_LAYER_GLOBAL)?;

        let page_info = lookup(&data_layer, "page")
            .and_then(|page| lookup(&page, "pageInfo"))
            .and_then(|info| to_json(&info))
            .unwrap_or_else(|| {
                tracing::debug!(target: "analytics", "data layer has no page.pageInfo");
                Value::Null
            });

        let location = window.location();
        Some(PageContext::new(
            page_info,
            location.href().unwrap_or_default(),
            location.pathname().unwrap_or_default(),
        ))
    }
}

/// The `window.bluemixAnalytics` object.
struct JsSink {
    target: JsValue,
}

impl AnalyticsSink for JsSink {
    fn track_event(&self, event_name: &str, payload: &TrackedEvent) -> Result<(), SinkError> {
        let track = Reflect::get(&self.target, &JsValue::from_str(TRACK_EVENT))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(SinkError::NotCallable(TRACK_EVENT))?;

        let body = serde_json::to_string(payload)?;
        let payload = JSON::parse(&body).map_err(|err| SinkError::Rejected(describe(&err)))?;
        track
            .call2(&self.target, &JsValue::from_str(event_name), &payload)
            .map_err(|err| SinkError::Rejected(describe(&err)))?;
        Ok(())
    }
}

/// `target[key]`, treating `undefined` and `null` as absent.
fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn to_json(value: &JsValue) -> Option<Value> {
    let text = JSON::stringify(value).ok()?.as_string()?;
    serde_json::from_str(&text).ok()
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
