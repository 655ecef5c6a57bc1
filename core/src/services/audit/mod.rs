//! Audit field filling for persisted records.

mod actor;
mod filler;

pub use actor::{ActorProvider, SystemActor, SYSTEM_ACTOR};
pub use filler::AuditFieldFiller;

#[cfg(test)]
mod tests;
