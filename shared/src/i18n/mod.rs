//! Internationalized messages
//!
//! - `source` - TOML message bundles
//! - `resolver` - key + arguments + locale to display text
//! - `context` - ambient per-request locale
//! - `format` - positional placeholder interpolation

pub mod context;
pub mod format;
pub mod resolver;
pub mod source;

pub use context::{current_locale, message, message_in, message_or, I18nContext};
pub use format::format_message;
pub use resolver::MessageResolver;
pub use source::{BundleMessageSource, MessageSource};
