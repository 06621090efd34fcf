//! Per-actor role façades.

use crate::error::{ErrorSeverity, RuleError};
use crate::faction::{Faction, LeadingFaction, Side};
use crate::role::RoleId;
use crate::types::{ActorId, RoleColor};

/// Read-only identity shared by every role view.
///
/// Classification is recomputed from [`role_id`](Self::role_id) on every call,
/// so a view never reports a stale faction.
pub trait RoleView {
    /// Actor this view belongs to.
    fn owner(&self) -> ActorId;

    fn role_id(&self) -> RoleId;

    fn faction(&self) -> Faction {
        self.role_id().faction()
    }

    fn side(&self) -> Side {
        self.role_id().side()
    }

    fn leading_faction(&self) -> LeadingFaction {
        self.role_id().leading_faction()
    }

    fn full_name(&self) -> &'static str {
        self.role_id().full_name()
    }

    fn color(&self) -> RoleColor {
        self.role_id().color()
    }
}

/// View for roles without specialized capabilities, including the `None` role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasicRole {
    owner: ActorId,
    role: RoleId,
}

impl BasicRole {
    pub const fn new(owner: ActorId, role: RoleId) -> Self {
        Self { owner, role }
    }

    /// View for an actor that has no role yet.
    pub const fn none(owner: ActorId) -> Self {
        Self::new(owner, RoleId::None)
    }
}

impl RoleView for BasicRole {
    fn owner(&self) -> ActorId {
        self.owner
    }

    fn role_id(&self) -> RoleId {
        self.role
    }
}

/// Errors raised while binding a role view.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoleViewError {
    #[error("actor {actor} has role {actual}, expected {expected}")]
    RoleMismatch {
        actor: ActorId,
        expected: RoleId,
        actual: RoleId,
    },
}

impl RuleError for RoleViewError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RoleMismatch { .. } => "ROLE_MISMATCH",
        }
    }
}
