//! Token service module for JWT management
//!
//! Issues HMAC-signed identity tokens, verifies them, and maps a verified
//! token to the [`LoginUser`](crate::domain::entities::LoginUser) it stands for.

mod service;

#[cfg(test)]
mod tests;

pub use service::{TokenService, USER_ID_CLAIM};
