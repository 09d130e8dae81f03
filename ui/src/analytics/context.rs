//! Descriptor of the page an event was raised on.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Key inside `page_info` holding the analytics category.
const CATEGORY_KEY: &str = "analytics";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    /// Opaque page descriptor, forwarded as-is as the event's product title.
    pub page_info: Value,
    pub url: String,
    pub path: String,
}

impl PageContext {
    pub fn new(page_info: Value, url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            page_info,
            url: url.into(),
            path: path.into(),
        }
    }

    /// Context for a page described only by product name and category.
    ///
    /// Shapes `page_info` the same way the hosted site's data layer does
    /// (`{ "productTitle": .., "analytics": .. }`).
    pub fn for_product(
        product: &str,
        category: &str,
        url: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::new(
            json!({ "productTitle": product, CATEGORY_KEY: category }),
            url,
            path,
        )
    }

    /// `page_info.analytics`, if the descriptor carries one.
    pub fn category(&self) -> Option<&Value> {
        self.page_info.get(CATEGORY_KEY)
    }
}
