//! Domain-specific error types and error handling.
//!
//! - [`BaseError`] - framework level failure with a code and message
//! - [`ServiceError`] - expected business failure, same shape
//! - [`TokenError`] - token issuing and verification failures

mod base;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use base::BaseError;
pub use service::{ServiceError, ServiceResult};
pub use types::TokenError;
