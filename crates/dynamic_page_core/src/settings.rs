use std::collections::BTreeMap;

use crate::error::HandlerError;

pub const PARAM_NAME_KEY: &str = "PARAM_NAME";
pub const BUCKET_NAME_KEY: &str = "BUCKET_NAME";
pub const HTML_ESCAPE_VALUE_KEY: &str = "HTML_ESCAPE_VALUE";

/// Key-value lookup over the handler's environment configuration.
pub trait ConfigProvider {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvConfigProvider;

impl ConfigProvider for EnvConfigProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapConfigProvider {
    values: BTreeMap<String, String>,
}

impl MapConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for MapConfigProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// How the saved string is interpolated into HTML.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ValueEncoding {
    /// Inserted as-is; markup in the value is not neutralized.
    #[default]
    Verbatim,
    HtmlEscaped,
}

/// Only an absent key counts as missing; empty values pass through.
pub fn require(provider: &dyn ConfigProvider, key: &str) -> Result<String, HandlerError> {
    provider.get(key).ok_or_else(|| HandlerError::missing(key))
}

pub fn value_encoding(provider: &dyn ConfigProvider) -> ValueEncoding {
    match provider.get(HTML_ESCAPE_VALUE_KEY) {
        Some(raw) if is_truthy(&raw) => ValueEncoding::HtmlEscaped,
        _ => ValueEncoding::Verbatim,
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_reports_absent_key() {
        let provider = MapConfigProvider::new();
        let error = require(&provider, PARAM_NAME_KEY).expect_err("key is absent");
        assert_eq!(error, HandlerError::missing(PARAM_NAME_KEY));
    }

    #[test]
    fn require_passes_empty_value_through() {
        let provider = MapConfigProvider::new().with(PARAM_NAME_KEY, "");
        assert_eq!(require(&provider, PARAM_NAME_KEY), Ok(String::new()));
    }

    #[test]
    fn map_provider_returns_configured_values() {
        let provider = MapConfigProvider::new()
            .with(PARAM_NAME_KEY, "greeting")
            .with(BUCKET_NAME_KEY, "mybucket");
        assert_eq!(provider.get(BUCKET_NAME_KEY).as_deref(), Some("mybucket"));
        assert_eq!(provider.get("OTHER"), None);
    }

    #[test]
    fn env_provider_distinguishes_absent_from_empty() {
        let set_key = "DYNAMIC_PAGE_SETTINGS_TEST_EMPTY_VALUE";
        let unset_key = "DYNAMIC_PAGE_SETTINGS_TEST_NEVER_SET";
        std::env::set_var(set_key, "");
        std::env::remove_var(unset_key);

        let provider = EnvConfigProvider;
        assert_eq!(provider.get(set_key), Some(String::new()));
        assert_eq!(provider.get(unset_key), None);
        assert_eq!(require(&provider, set_key), Ok(String::new()));
        assert_eq!(
            require(&provider, unset_key),
            Err(HandlerError::missing(unset_key))
        );

        std::env::remove_var(set_key);
    }

    #[test]
    fn value_encoding_defaults_to_verbatim() {
        assert_eq!(
            value_encoding(&MapConfigProvider::new()),
            ValueEncoding::Verbatim
        );
        for raw in ["", "0", "false", "nope"] {
            let provider = MapConfigProvider::new().with(HTML_ESCAPE_VALUE_KEY, raw);
            assert_eq!(value_encoding(&provider), ValueEncoding::Verbatim, "{raw}");
        }
    }

    #[test]
    fn value_encoding_accepts_truthy_flags() {
        for raw in ["1", "true", "TRUE", " yes ", "On"] {
            let provider = MapConfigProvider::new().with(HTML_ESCAPE_VALUE_KEY, raw);
            assert_eq!(
                value_encoding(&provider),
                ValueEncoding::HtmlEscaped,
                "{raw}"
            );
        }
    }
}
