//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Supported message locales
///
/// Serialized with the underscore locale tag used by the message bundle
/// file names (`zh_CN`, `en_US`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "zh_CN", alias = "zh", alias = "zh-CN")]
    Chinese,
    #[serde(rename = "en_US", alias = "en", alias = "en-US")]
    English,
}

impl Default for Language {
    fn default() -> Self {
        Language::Chinese
    }
}

impl Language {
    /// Every supported locale, default first
    pub const ALL: [Language; 2] = [Language::Chinese, Language::English];

    /// Pick the best supported language from an `Accept-Language` header
    ///
    /// Entries are weighed by their `q` value; unsupported languages and
    /// entries with `q=0` are skipped. Returns `None` when nothing in the
    /// header is supported.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut preferred: Option<(Language, f32)> = None;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = match parts.next() {
                Some(tag) if !tag.trim().is_empty() => tag.trim(),
                _ => continue,
            };
            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            if quality <= 0.0 {
                continue;
            }
            let Ok(language) = tag.parse::<Language>() else {
                continue;
            };
            match preferred {
                Some((_, best)) if best >= quality => {}
                _ => preferred = Some((language, quality)),
            }
        }

        preferred.map(|(language, _)| language)
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    /// Locale tag as used in bundle file names
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Chinese => "zh_CN",
            Language::English => "en_US",
        }
    }

    /// BCP 47 tag, as sent in `Content-Language`
    pub fn language_tag(&self) -> &'static str {
        match self {
            Language::Chinese => "zh-CN",
            Language::English => "en-US",
        }
    }

    /// Get native language name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Chinese => "中文",
            Language::English => "English",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.locale())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    /// Accepts `zh_CN`, `zh-CN`, `zh`, `en_US`, `en-US`, `en` and any other
    /// region of a supported language, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let primary = normalized.split('-').next().unwrap_or_default();
        match primary {
            "zh" | "chinese" | "中文" => Ok(Language::Chinese),
            "en" | "english" => Ok(Language::English),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
