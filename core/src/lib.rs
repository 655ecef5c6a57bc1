//! # HSE Core
//!
//! Error hierarchy, token service and audit field filling shared by HSE
//! backend services.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
