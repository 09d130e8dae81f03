//! Analytics settings, embedded from `analytics.toml` at the crate root.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::event::CUSTOM_EVENT;

const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/analytics.toml"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid analytics config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// When false the tracker drops every event as if no sink were loaded.
    pub enabled: bool,
    /// Name every event is reported under.
    pub event_name: String,
    /// Page description for ports that cannot read one from their host.
    pub page: PageConfig,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            event_name: CUSTOM_EVENT.to_string(),
            page: PageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub product: String,
    pub analytics_category: String,
    pub url: String,
    pub path: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            product: "Qiskit Ignis".to_string(),
            analytics_category: "Qiskit".to_string(),
            url: "app://ignis/".to_string(),
            path: "/".to_string(),
        }
    }
}

impl AnalyticsConfig {
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The config shipped with the crate; defaults if it fails to parse.
    pub fn embedded() -> Self {
        Self::from_str(EMBEDDED_CONFIG).unwrap_or_else(|err| {
            tracing::warn!(target: "analytics", "{err}; using defaults");
            Self::default()
        })
    }
}
