//! Site configuration.
//!
//! Every field has a default matching the published page, so an absent or
//! partial configuration block is fine. The host reads the block from a
//! `<script type="application/json">` element and passes its text to
//! [`SiteConfig::from_json_str`]; on error it logs and keeps the defaults.

use core::time::Duration;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::loader::DEFAULT_RESOURCE;
use crate::messages::{Locale, Messages};
use crate::theme::THEME_STORAGE_KEY;

/// Id of the optional configuration element.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Configuration parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid site configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// DOM element ids the controllers bind to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub theme_toggle: String,
    pub search_input: String,
    pub featured_only: String,
    pub projects: String,
    pub empty_state: String,
    pub load_error: String,
    pub contact_form: String,
    pub form_status: String,
    pub send_button: String,
    pub nav_toggle: String,
    pub nav_panel: String,
    pub year: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_toggle: "themeToggle".into(),
            search_input: "searchInput".into(),
            featured_only: "featuredOnly".into(),
            projects: "projects".into(),
            empty_state: "emptyState".into(),
            load_error: "loadError".into(),
            contact_form: "contactForm".into(),
            form_status: "formStatus".into(),
            send_button: "sendBtn".into(),
            nav_toggle: "navToggle".into(),
            nav_panel: "primary-nav".into(),
            year: "year".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Project list, relative to the page URL.
    pub resource: String,
    /// Search input idle interval in milliseconds.
    pub debounce_ms: u64,
    pub theme_storage_key: String,
    pub locale: Locale,
    /// `tracing` level name (`error` .. `trace`).
    pub log_level: String,
    pub ids: ElementIds,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            resource: DEFAULT_RESOURCE.into(),
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            theme_storage_key: THEME_STORAGE_KEY.into(),
            locale: Locale::default(),
            log_level: "info".into(),
            ids: ElementIds::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    /// Parsed log level; unknown names fall back to `INFO`.
    #[must_use]
    pub fn max_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::INFO)
    }
}
