//! Domain entities shared by HSE services.

pub mod audit;
pub mod login_user;
pub mod token;

pub use audit::{AuditFields, Auditable};
pub use login_user::LoginUser;
pub use token::{Claims, RESERVED_CLAIMS};
