//! Faction, side, and leading-faction classification.
//!
//! Every grouping here is derived, never stored: an actor's faction is always
//! recomputed from its [`RoleId`](crate::RoleId) so it cannot go stale after a
//! role change. The functions are total over closed enums and allocation-free,
//! which makes them safe to call on every tick.

/// In-simulation team an actor fights for.
///
/// Roles belonging to the same team map to the same faction regardless of the
/// abilities each role carries.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    /// Anomalous entities.
    Scps,
    /// Facility military (guards and task forces).
    FoundationForces,
    /// Facility research staff.
    Scientists,
    /// Insurgency combatants.
    ChaosInsurgency,
    /// Detainees; aligned with the insurgency.
    ClassD,
    /// Alive but outside every team (tutorial-like roles).
    OtherAlive,
    /// Spectating or otherwise not in play.
    Dead,
    /// No role assigned yet.
    #[default]
    None,
}

/// Coarse alignment used for win-condition scoring.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Scp,
    /// Facility forces: military and scientists.
    Mtf,
    /// Insurgents and detainees.
    ChaosInsurgency,
    Tutorial,
    #[default]
    None,
}

/// Which group a faction counts towards when the round outcome is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LeadingFaction {
    ChaosInsurgency,
    FacilityForces,
    Anomalies,
    Draw,
}

impl Faction {
    /// Factions that can receive respawn waves.
    pub const SPAWNABLE: [Faction; 2] = [Faction::FoundationForces, Faction::ChaosInsurgency];

    /// Returns the alignment this faction scores for.
    pub const fn side(self) -> Side {
        match self {
            Faction::Scps => Side::Scp,
            Faction::FoundationForces | Faction::Scientists => Side::Mtf,
            Faction::ChaosInsurgency | Faction::ClassD => Side::ChaosInsurgency,
            Faction::OtherAlive => Side::Tutorial,
            Faction::Dead | Faction::None => Side::None,
        }
    }

    /// Returns the leading group this faction contributes to.
    pub const fn leading(self) -> LeadingFaction {
        match self {
            Faction::ClassD | Faction::ChaosInsurgency => LeadingFaction::ChaosInsurgency,
            Faction::FoundationForces | Faction::Scientists => LeadingFaction::FacilityForces,
            Faction::Scps => LeadingFaction::Anomalies,
            Faction::OtherAlive | Faction::Dead | Faction::None => LeadingFaction::Draw,
        }
    }

    /// Returns true for the none-sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Faction::None)
    }

    /// Returns true if waves can be proposed for this faction.
    pub const fn is_spawnable(self) -> bool {
        matches!(self, Faction::FoundationForces | Faction::ChaosInsurgency)
    }
}
