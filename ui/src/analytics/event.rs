//! The event record handed to an analytics sink.

use serde::Serialize;
use serde_json::Value;

use super::context::PageContext;

/// Event name every UI interaction is reported under.
pub const CUSTOM_EVENT: &str = "Custom Event";

/// Object type tag for button-like elements (links styled as buttons included).
pub const OBJECT_BUTTON: &str = "Button";

/// Object type tag for the language picker.
pub const OBJECT_SELECT_COMBOBOX: &str = "Select Combobox";

/// A single tracked UI interaction.
///
/// Built from a [`PageContext`] right before emission and dropped afterwards.
/// Field names serialize in the camelCase shape the collector expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedEvent {
    pub product_title: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    pub url: String,
    pub path: String,
    pub action: String,
    pub object_type: String,
    pub success_flag: bool,
}

impl TrackedEvent {
    /// `"Button Clicked: {action}"` event for a click on `object_type`.
    pub fn click(context: &PageContext, action: &str, object_type: &str) -> Self {
        Self::from_context(context, click_action(action), object_type.to_string())
    }

    /// `"Language Changed to: {label}"` event for the language picker.
    pub fn selection_change(context: &PageContext, selected_label: &str) -> Self {
        Self::from_context(
            context,
            selection_action(selected_label),
            OBJECT_SELECT_COMBOBOX.to_string(),
        )
    }

    fn from_context(context: &PageContext, action: String, object_type: String) -> Self {
        Self {
            product_title: context.page_info.clone(),
            category: context.category().cloned(),
            url: context.url.clone(),
            path: context.path.clone(),
            action,
            object_type,
            success_flag: true,
        }
    }
}

fn click_action(action: &str) -> String {
    format!("Button Clicked: {action}")
}

fn selection_action(label: &str) -> String {
    format!("Language Changed to: {label}")
}
