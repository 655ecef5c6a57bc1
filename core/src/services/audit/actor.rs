//! Sources of the identity stamped into audit fields

/// Actor recorded when no user identity is wired in
pub const SYSTEM_ACTOR: &str = "system";

/// Supplies the identity responsible for a write
pub trait ActorProvider: Send + Sync {
    fn current_actor(&self) -> String;
}

/// Always reports [`SYSTEM_ACTOR`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemActor;

impl ActorProvider for SystemActor {
    fn current_actor(&self) -> String {
        SYSTEM_ACTOR.to_string()
    }
}

impl<F> ActorProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn current_actor(&self) -> String {
        self()
    }
}
