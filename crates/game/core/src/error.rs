//! Common error infrastructure for facility-core.
//!
//! Most operations in this crate cannot fail: classification is total, missing
//! capabilities are `None`, and an exhausted faction yields a zero-sized wave.
//! The few real errors (binding a view to the wrong role, malformed rules
//! tables) implement [`RuleError`] so callers can tell input problems from
//! configuration defects.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input; the caller should branch and carry on.
    ///
    /// Examples: view requested for an actor with another role
    Validation,

    /// Broken configuration or invariant; should be caught during development.
    ///
    /// Examples: wave table missing a spawnable faction
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all facility-core errors.
pub trait RuleError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
