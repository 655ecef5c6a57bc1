//! Services built on the domain entities.

pub mod audit;
pub mod token;

pub use audit::{ActorProvider, AuditFieldFiller, SystemActor};
pub use token::TokenService;
