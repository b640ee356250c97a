//! Build-time Configuration
//!
//! Values are baked in when the bundle is compiled, so they are read with
//! `option_env!` and resolved once at startup.

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `TODO_API_BASE`, absolute or relative to the page origin
    pub api_base: String,
    /// `TODO_LOG`, an `EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_API_BASE"), option_env!("TODO_LOG"))
    }

    fn from_values(api_base: Option<&str>, log_filter: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            api_base: pick(api_base, DEFAULT_API_BASE),
            log_filter: pick(log_filter, DEFAULT_LOG_FILTER),
        }
    }

    /// Absolute base URL without a trailing slash.
    ///
    /// A relative base is joined onto `origin`; without an origin it must
    /// already be absolute.
    pub fn resolve_api_base(&self, origin: Option<&str>) -> Result<String, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            base: self.api_base.clone(),
            reason,
        };

        let url = match origin {
            Some(origin) => Url::parse(origin)
                .and_then(|o| o.join(&self.api_base))
                .map_err(|e| invalid(e.to_string()))?,
            None => Url::parse(&self.api_base).map_err(|e| invalid(e.to_string()))?,
        };

        if url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }

        Ok(url.as_str().trim_end_matches('/').to_string())
    }
}

/// `window.location.origin` of the hosting page
pub fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}
