//! Role identifiers and their classification.
//!
//! [`RoleId`] is the closed set of roles the host can assign. Classification
//! into [`Faction`], [`Side`] and [`LeadingFaction`] is a pure table lookup;
//! presentation metadata (names and colors) lives next to it so callers never
//! need to reach into the host's role objects for either.
//!
//! Role views in [`view`] and [`scp173`] wrap an actor's capability set
//! behind a typed façade.

pub mod scp173;
pub mod view;

pub use scp173::Scp173Role;
pub use view::{BasicRole, RoleView, RoleViewError};

use crate::faction::{Faction, LeadingFaction, Side};
use crate::types::RoleColor;

/// Identifier of a playable role, including the `None` sentinel.
///
/// Discriminants match the host's wire values so raw identifiers can be
/// converted with [`RoleId::from_raw`].
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
#[repr(i8)]
pub enum RoleId {
    #[default]
    None = -1,
    Scp173 = 0,
    ClassD = 1,
    Spectator = 2,
    Scp106 = 3,
    NtfSpecialist = 4,
    Scp049 = 5,
    Scientist = 6,
    Scp079 = 7,
    ChaosConscript = 8,
    Scp096 = 9,
    Scp0492 = 10,
    NtfSergeant = 11,
    NtfCaptain = 12,
    NtfPrivate = 13,
    Tutorial = 14,
    FacilityGuard = 15,
    Scp939 = 16,
    CustomRole = 17,
    ChaosRifleman = 18,
    ChaosMarauder = 19,
    ChaosRepressor = 20,
    Overwatch = 21,
    Filmmaker = 22,
}

impl RoleId {
    /// Every role in wire order, starting with the sentinel.
    pub const ALL: [RoleId; 24] = [
        RoleId::None,
        RoleId::Scp173,
        RoleId::ClassD,
        RoleId::Spectator,
        RoleId::Scp106,
        RoleId::NtfSpecialist,
        RoleId::Scp049,
        RoleId::Scientist,
        RoleId::Scp079,
        RoleId::ChaosConscript,
        RoleId::Scp096,
        RoleId::Scp0492,
        RoleId::NtfSergeant,
        RoleId::NtfCaptain,
        RoleId::NtfPrivate,
        RoleId::Tutorial,
        RoleId::FacilityGuard,
        RoleId::Scp939,
        RoleId::CustomRole,
        RoleId::ChaosRifleman,
        RoleId::ChaosMarauder,
        RoleId::ChaosRepressor,
        RoleId::Overwatch,
        RoleId::Filmmaker,
    ];

    /// Converts a raw host identifier; values outside the table yield `None`.
    pub fn from_raw(raw: i8) -> Option<RoleId> {
        Self::ALL.iter().copied().find(|role| role.raw() == raw)
    }

    /// Host wire value of this role.
    #[inline]
    pub const fn raw(self) -> i8 {
        self as i8
    }

    /// Returns the faction this role fights for.
    ///
    /// The `None` sentinel maps to [`Faction::None`]; roles that are not in
    /// play (spectators, overwatch, custom placeholders) map to [`Faction::Dead`].
    pub const fn faction(self) -> Faction {
        match self {
            RoleId::ChaosConscript
            | RoleId::ChaosMarauder
            | RoleId::ChaosRepressor
            | RoleId::ChaosRifleman => Faction::ChaosInsurgency,
            RoleId::Scientist => Faction::Scientists,
            RoleId::ClassD => Faction::ClassD,
            RoleId::Scp049
            | RoleId::Scp939
            | RoleId::Scp0492
            | RoleId::Scp079
            | RoleId::Scp096
            | RoleId::Scp106
            | RoleId::Scp173 => Faction::Scps,
            RoleId::FacilityGuard
            | RoleId::NtfCaptain
            | RoleId::NtfPrivate
            | RoleId::NtfSergeant
            | RoleId::NtfSpecialist => Faction::FoundationForces,
            RoleId::Tutorial => Faction::OtherAlive,
            RoleId::None => Faction::None,
            RoleId::Spectator | RoleId::CustomRole | RoleId::Overwatch | RoleId::Filmmaker => {
                Faction::Dead
            }
        }
    }

    /// Returns the alignment of this role's faction.
    #[inline]
    pub const fn side(self) -> Side {
        self.faction().side()
    }

    /// Returns the leading group this role's faction scores for.
    #[inline]
    pub const fn leading_faction(self) -> LeadingFaction {
        self.faction().leading()
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, RoleId::None)
    }

    /// Returns true if the role is in play (neither dead nor unassigned).
    pub const fn is_alive(self) -> bool {
        !matches!(self.faction(), Faction::Dead | Faction::None)
    }

    /// Human-readable role name.
    pub const fn full_name(self) -> &'static str {
        match self {
            RoleId::None => "None",
            RoleId::Scp173 => "SCP-173",
            RoleId::ClassD => "Class-D Personnel",
            RoleId::Spectator => "Spectator",
            RoleId::Scp106 => "SCP-106",
            RoleId::NtfSpecialist => "Nine-Tailed Fox Specialist",
            RoleId::Scp049 => "SCP-049",
            RoleId::Scientist => "Scientist",
            RoleId::Scp079 => "SCP-079",
            RoleId::ChaosConscript => "Chaos Insurgency Conscript",
            RoleId::Scp096 => "SCP-096",
            RoleId::Scp0492 => "SCP-049-2",
            RoleId::NtfSergeant => "Nine-Tailed Fox Sergeant",
            RoleId::NtfCaptain => "Nine-Tailed Fox Captain",
            RoleId::NtfPrivate => "Nine-Tailed Fox Private",
            RoleId::Tutorial => "Tutorial",
            RoleId::FacilityGuard => "Facility Guard",
            RoleId::Scp939 => "SCP-939",
            RoleId::CustomRole => "Custom Role",
            RoleId::ChaosRifleman => "Chaos Insurgency Rifleman",
            RoleId::ChaosMarauder => "Chaos Insurgency Marauder",
            RoleId::ChaosRepressor => "Chaos Insurgency Repressor",
            RoleId::Overwatch => "Overwatch",
            RoleId::Filmmaker => "Filmmaker",
        }
    }

    /// Display color of the role. The `None` sentinel is white.
    pub const fn color(self) -> RoleColor {
        match self {
            RoleId::None | RoleId::Spectator | RoleId::CustomRole => RoleColor::WHITE,
            RoleId::Scp173
            | RoleId::Scp106
            | RoleId::Scp049
            | RoleId::Scp079
            | RoleId::Scp096
            | RoleId::Scp0492
            | RoleId::Scp939 => RoleColor::rgb(0xec, 0x22, 0x22),
            RoleId::ClassD => RoleColor::rgb(0xff, 0x8e, 0x00),
            RoleId::Scientist => RoleColor::rgb(0xff, 0xff, 0x7c),
            RoleId::NtfPrivate => RoleColor::rgb(0x70, 0xc3, 0xff),
            RoleId::NtfSergeant | RoleId::NtfSpecialist => RoleColor::rgb(0x00, 0x96, 0xff),
            RoleId::NtfCaptain => RoleColor::rgb(0x00, 0x3d, 0xca),
            RoleId::FacilityGuard => RoleColor::rgb(0x5b, 0x63, 0x70),
            RoleId::ChaosConscript
            | RoleId::ChaosRifleman
            | RoleId::ChaosMarauder
            | RoleId::ChaosRepressor => RoleColor::rgb(0x00, 0x8f, 0x1c),
            RoleId::Tutorial => RoleColor::rgb(0xff, 0x00, 0xb0),
            RoleId::Overwatch => RoleColor::rgb(0x00, 0xff, 0xff),
            RoleId::Filmmaker => RoleColor::rgb(0x00, 0x00, 0x00),
        }
    }
}

/// Classifies a raw host identifier.
///
/// Identifiers this table does not know (for example, sent by a newer host)
/// are treated as out of play rather than rejected.
pub fn faction_of_raw(raw: i8) -> Faction {
    RoleId::from_raw(raw).map_or(Faction::Dead, RoleId::faction)
}
