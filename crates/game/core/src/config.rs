//! Respawn wave rules and tunable parameters.

use crate::error::{ErrorSeverity, RuleError};
use crate::faction::Faction;
use crate::role::RoleId;

/// Wave parameters for one spawnable faction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamWave {
    pub faction: Faction,
    /// Upper bound on actors admitted in a single wave.
    pub max_wave_size: u32,
    /// Role given to the first actor of a wave.
    pub leader: RoleId,
    /// Role given to every other actor of a wave.
    pub member: RoleId,
}

impl TeamWave {
    pub const fn new(faction: Faction, max_wave_size: u32, leader: RoleId, member: RoleId) -> Self {
        Self {
            faction,
            max_wave_size,
            leader,
            member,
        }
    }
}

/// Rules governing the respawn ticket economy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveRules {
    /// Tickets granted to a faction that proposes a wave with an empty balance.
    #[cfg_attr(feature = "serde", serde(default = "WaveRules::default_replenish"))]
    pub replenish_tickets: u32,

    /// Per-faction wave table. Factions without an entry cannot spawn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub teams: Vec<TeamWave>,
}

impl WaveRules {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REPLENISH_TICKETS: u32 = 5;
    pub const DEFAULT_MAX_WAVE_SIZE: u32 = 12;

    /// Stock rules: both spawnable factions with the default wave size.
    pub fn new() -> Self {
        Self {
            replenish_tickets: Self::DEFAULT_REPLENISH_TICKETS,
            teams: vec![
                TeamWave::new(
                    Faction::FoundationForces,
                    Self::DEFAULT_MAX_WAVE_SIZE,
                    RoleId::NtfCaptain,
                    RoleId::NtfPrivate,
                ),
                TeamWave::new(
                    Faction::ChaosInsurgency,
                    Self::DEFAULT_MAX_WAVE_SIZE,
                    RoleId::ChaosRepressor,
                    RoleId::ChaosRifleman,
                ),
            ],
        }
    }

    /// Rules with no team table; every faction has a cap of zero.
    pub fn empty() -> Self {
        Self {
            replenish_tickets: Self::DEFAULT_REPLENISH_TICKETS,
            teams: Vec::new(),
        }
    }

    #[cfg(feature = "serde")]
    fn default_replenish() -> u32 {
        Self::DEFAULT_REPLENISH_TICKETS
    }

    /// Overrides the wave size of `faction`, keeping its roles if it already exists.
    #[must_use]
    pub fn with_max_wave_size(mut self, faction: Faction, max_wave_size: u32) -> Self {
        match self.teams.iter_mut().find(|team| team.faction == faction) {
            Some(team) => team.max_wave_size = max_wave_size,
            None => {
                let (leader, member) = default_roster(faction);
                self.teams
                    .push(TeamWave::new(faction, max_wave_size, leader, member));
            }
        }
        self
    }

    #[must_use]
    pub fn with_replenish_tickets(mut self, replenish_tickets: u32) -> Self {
        self.replenish_tickets = replenish_tickets;
        self
    }

    /// Wave parameters for `faction`. Always `None` for the none-sentinel.
    pub fn team(&self, faction: Faction) -> Option<&TeamWave> {
        if faction.is_none() {
            return None;
        }
        self.teams.iter().find(|team| team.faction == faction)
    }

    /// Wave size cap for `faction`; zero when the faction has no entry.
    pub fn max_wave_size(&self, faction: Faction) -> u32 {
        self.team(faction).map_or(0, |team| team.max_wave_size)
    }

    /// Checks the table for configuration defects.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.replenish_tickets == 0 {
            return Err(RulesError::ZeroReplenish);
        }

        for (index, team) in self.teams.iter().enumerate() {
            if !team.faction.is_spawnable() {
                return Err(RulesError::NotSpawnable(team.faction));
            }
            if self.teams[..index].iter().any(|t| t.faction == team.faction) {
                return Err(RulesError::DuplicateTeam(team.faction));
            }
            for role in [team.leader, team.member] {
                if role.faction() != team.faction {
                    return Err(RulesError::RoleOutsideFaction {
                        faction: team.faction,
                        role,
                    });
                }
            }
        }

        for faction in Faction::SPAWNABLE {
            if self.team(faction).is_none() {
                return Err(RulesError::MissingTeam(faction));
            }
        }

        Ok(())
    }
}

impl Default for WaveRules {
    fn default() -> Self {
        Self::new()
    }
}

fn default_roster(faction: Faction) -> (RoleId, RoleId) {
    match faction {
        Faction::ChaosInsurgency => (RoleId::ChaosRepressor, RoleId::ChaosRifleman),
        _ => (RoleId::NtfCaptain, RoleId::NtfPrivate),
    }
}

/// Configuration defects in a [`WaveRules`] table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("replenish_tickets must be positive")]
    ZeroReplenish,

    #[error("faction {0} cannot receive respawn waves")]
    NotSpawnable(Faction),

    #[error("faction {0} is listed more than once")]
    DuplicateTeam(Faction),

    #[error("spawnable faction {0} has no wave entry")]
    MissingTeam(Faction),

    #[error("role {role} does not belong to faction {faction}")]
    RoleOutsideFaction { faction: Faction, role: RoleId },
}

impl RuleError for RulesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroReplenish => "ZERO_REPLENISH",
            Self::NotSpawnable(_) => "NOT_SPAWNABLE",
            Self::DuplicateTeam(_) => "DUPLICATE_TEAM",
            Self::MissingTeam(_) => "MISSING_TEAM",
            Self::RoleOutsideFaction { .. } => "ROLE_OUTSIDE_FACTION",
        }
    }
}
