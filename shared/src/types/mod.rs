//! Type definitions module with domain-specific sub-modules
//!
//! This module organizes types into logical categories:
//! - `language` - Supported locales and `Accept-Language` negotiation
//! - `message_code` - Catalog of outcome codes and their bundle keys
//! - `response` - The API response envelope

pub mod language;
pub mod message_code;
pub mod response;

// Re-export commonly used types at module level
pub use language::Language;
pub use message_code::{MessageCode, FAIL_CODE, SUCCESS_CODE};
pub use response::ApiResponse;
