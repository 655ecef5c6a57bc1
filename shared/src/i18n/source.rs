//! Message bundle storage

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::MessageSourceConfig;
use crate::errors::I18nError;
use crate::types::Language;

/// Backing store for localized message text
pub trait MessageSource: Send + Sync {
    /// Raw (uninterpolated) text for `key` in `locale`
    ///
    /// `Ok(None)` means the key is unknown in every bundle the lookup
    /// falls back to.
    fn lookup(&self, key: &str, locale: Language) -> Result<Option<String>, I18nError>;
}

/// Message source built from TOML bundles
///
/// Bundles are named `<basename>_<locale>.toml` with an optional
/// locale-less `<basename>.toml`. Nested tables flatten to dotted keys, so
/// `[message] success = "..."` and `"message.success" = "..."` are the same
/// entry. Bundles are read once; edits on disk require a restart.
#[derive(Debug, Clone, Default)]
pub struct BundleMessageSource {
    bundles: HashMap<Language, HashMap<String, String>>,
    base: HashMap<String, String>,
    default_locale: Language,
}

impl BundleMessageSource {
    /// Load bundles from disk, falling back to the compiled-in bundles for
    /// each locale whose file is not present
    pub fn load(config: &MessageSourceConfig) -> Result<Self, I18nError> {
        let mut source = Self {
            default_locale: config.default_locale,
            ..Default::default()
        };

        for locale in Language::ALL {
            let path = format!("{}_{}.toml", config.basename, locale.locale());
            let entries = if Path::new(&path).exists() {
                info!("Loading message bundle from {}", path);
                parse_bundle(&path, &read_bundle(&path)?)?
            } else {
                debug!("Message bundle {} not found, using embedded bundle", path);
                parse_bundle(locale.locale(), embedded_bundle(locale))?
            };
            source.bundles.insert(locale, entries);
        }

        let base_path = format!("{}.toml", config.basename);
        if Path::new(&base_path).exists() {
            info!("Loading base message bundle from {}", base_path);
            source.base = parse_bundle(&base_path, &read_bundle(&base_path)?)?;
        }

        Ok(source)
    }

    /// Source with only the compiled-in bundles
    pub fn embedded(default_locale: Language) -> Result<Self, I18nError> {
        let mut source = Self {
            default_locale,
            ..Default::default()
        };
        for locale in Language::ALL {
            source
                .bundles
                .insert(locale, parse_bundle(locale.locale(), embedded_bundle(locale))?);
        }
        Ok(source)
    }

    /// Empty source; add bundles with [`with_bundle`](Self::with_bundle)
    pub fn new(default_locale: Language) -> Self {
        Self {
            default_locale,
            ..Default::default()
        }
    }

    /// Replace the bundle of `locale` with the parsed TOML `content`
    pub fn with_bundle(mut self, locale: Language, content: &str) -> Result<Self, I18nError> {
        let entries = parse_bundle(locale.locale(), content)?;
        self.bundles.insert(locale, entries);
        Ok(self)
    }

    /// Replace the locale-less base bundle
    pub fn with_base(mut self, content: &str) -> Result<Self, I18nError> {
        self.base = parse_bundle("base", content)?;
        Ok(self)
    }

    pub fn default_locale(&self) -> Language {
        self.default_locale
    }

    /// Number of keys in the bundle of `locale`
    pub fn len(&self, locale: Language) -> usize {
        self.bundles.get(&locale).map_or(0, HashMap::len)
    }
}

impl MessageSource for BundleMessageSource {
    fn lookup(&self, key: &str, locale: Language) -> Result<Option<String>, I18nError> {
        let found = self
            .bundles
            .get(&locale)
            .and_then(|bundle| bundle.get(key))
            .or_else(|| {
                self.bundles
                    .get(&self.default_locale)
                    .and_then(|bundle| bundle.get(key))
            })
            .or_else(|| self.base.get(key));
        Ok(found.cloned())
    }
}

fn embedded_bundle(locale: Language) -> &'static str {
    match locale {
        Language::Chinese => include_str!("../../i18n/messages_zh_CN.toml"),
        Language::English => include_str!("../../i18n/messages_en_US.toml"),
    }
}

fn read_bundle(path: &str) -> Result<String, I18nError> {
    fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_string(),
        source,
    })
}

fn parse_bundle(name: &str, content: &str) -> Result<HashMap<String, String>, I18nError> {
    let table: toml::Table = toml::from_str(content).map_err(|source| I18nError::Parse {
        name: name.to_string(),
        source,
    })?;
    let mut entries = HashMap::new();
    flatten("", &toml::Value::Table(table), &mut entries);
    Ok(entries)
}

fn flatten(prefix: &str, value: &toml::Value, entries: &mut HashMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, entries);
            }
        }
        toml::Value::String(text) => {
            entries.insert(prefix.to_string(), text.clone());
        }
        other => {
            entries.insert(prefix.to_string(), other.to_string());
        }
    }
}
