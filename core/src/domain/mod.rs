//! Domain layer containing entities shared across services.

pub mod entities;

pub use entities::{AuditFields, Auditable, Claims, LoginUser, RESERVED_CLAIMS};
