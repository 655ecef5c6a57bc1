//! Message source configuration

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Where message bundles live and how the request locale is negotiated
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageSourceConfig {
    /// Bundle path prefix; files are `<basename>_<locale>.toml`
    #[serde(default = "default_basename")]
    pub basename: String,

    /// Advisory refresh period in seconds. Bundles are loaded once at
    /// startup and not reloaded.
    #[serde(default = "default_cache_seconds")]
    pub cache_seconds: u64,

    /// Locale used when neither `lang` nor `Accept-Language` selects one
    #[serde(default)]
    pub default_locale: Language,

    /// Query parameter that overrides `Accept-Language`
    #[serde(default = "default_param_name")]
    pub param_name: String,
}

impl Default for MessageSourceConfig {
    fn default() -> Self {
        Self {
            basename: default_basename(),
            cache_seconds: default_cache_seconds(),
            default_locale: Language::default(),
            param_name: default_param_name(),
        }
    }
}

impl MessageSourceConfig {
    /// Create from `I18N_BASENAME`, `I18N_CACHE_SECONDS` and
    /// `I18N_DEFAULT_LOCALE`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            basename: std::env::var("I18N_BASENAME").unwrap_or(defaults.basename),
            cache_seconds: std::env::var("I18N_CACHE_SECONDS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.cache_seconds),
            default_locale: std::env::var("I18N_DEFAULT_LOCALE")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.default_locale),
            param_name: defaults.param_name,
        }
    }

    pub fn with_basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = basename.into();
        self
    }

    pub fn with_default_locale(mut self, locale: Language) -> Self {
        self.default_locale = locale;
        self
    }
}

fn default_basename() -> String {
    String::from("i18n/messages")
}

fn default_cache_seconds() -> u64 {
    3600
}

fn default_param_name() -> String {
    String::from("lang")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_source_defaults() {
        let config = MessageSourceConfig::default();
        assert_eq!(config.basename, "i18n/messages");
        assert_eq!(config.cache_seconds, 3600);
        assert_eq!(config.default_locale, Language::Chinese);
        assert_eq!(config.param_name, "lang");
    }

    #[test]
    fn test_locale_parses_from_file() {
        let config: MessageSourceConfig = toml::from_str(r#"default_locale = "en_US""#).unwrap();
        assert_eq!(config.default_locale, Language::English);
        assert_eq!(config.basename, "i18n/messages");
    }

    #[test]
    fn test_builder() {
        let config = MessageSourceConfig::default()
            .with_basename("/etc/hse/messages")
            .with_default_locale(Language::English);
        assert_eq!(config.basename, "/etc/hse/messages");
        assert_eq!(config.default_locale, Language::English);
    }
}
