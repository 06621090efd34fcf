//! Error types surfaced by the runtime API.
//!
//! Wraps failures from rules loading, actor lookups, and spawn execution so
//! hosts can bubble them up with consistent context.
use thiserror::Error;

use facility_core::{ActorId, RoleViewError, RulesError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("actor {0} is not registered")]
    UnknownActor(ActorId),

    #[error(transparent)]
    RoleView(#[from] RoleViewError),

    #[error("invalid wave rules")]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("spawn executor {executor} failed for actor {actor}: {reason}")]
    Spawn {
        executor: &'static str,
        actor: ActorId,
        reason: String,
    },
}
