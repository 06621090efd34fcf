//! Spawn execution for committed waves.

use facility_core::{CommittedWave, RoleId, SpawnPlacement, placement_or_origin};
use tracing::debug;

use crate::error::{Result, RuntimeError};
use crate::registry::ActorRegistry;

/// Turns a committed wave into live actors.
pub trait SpawnExecutor {
    /// Returns a human-readable name for this executor (used in logging and errors).
    fn name(&self) -> &'static str;

    fn spawn_wave(&mut self, wave: &CommittedWave) -> Result<()>;
}

/// Executor that assigns wave roles in an [`ActorRegistry`].
///
/// The first actor of the wave gets the team's leader role, every other actor
/// the member role. Each placement comes from the host's [`SpawnPlacement`],
/// falling back to the origin.
pub struct RegistrySpawner<'a, P: SpawnPlacement + ?Sized> {
    registry: &'a mut ActorRegistry,
    placement: &'a P,
}

impl<'a, P: SpawnPlacement + ?Sized> RegistrySpawner<'a, P> {
    pub fn new(registry: &'a mut ActorRegistry, placement: &'a P) -> Self {
        Self {
            registry,
            placement,
        }
    }
}

impl<P: SpawnPlacement + ?Sized> SpawnExecutor for RegistrySpawner<'_, P> {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn spawn_wave(&mut self, wave: &CommittedWave) -> Result<()> {
        let Some(team) = &wave.team else {
            return Ok(());
        };

        if let Some(&actor) = wave
            .actors
            .iter()
            .find(|&&actor| !self.registry.contains(actor))
        {
            return Err(RuntimeError::Spawn {
                executor: self.name(),
                actor,
                reason: "actor disconnected before spawn".into(),
            });
        }

        for (index, &actor) in wave.actors.iter().enumerate() {
            let role: RoleId = if index == 0 { team.leader } else { team.member };
            let placement = placement_or_origin(self.placement, role);
            self.registry.assign_role(actor, role, Some(placement))?;

            debug!(
                target: "runtime::spawn",
                %actor,
                %role,
                x = placement.position.x,
                y = placement.position.y,
                z = placement.position.z,
                "Actor spawned"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use facility_core::{ActorId, Faction, Placement, Vec3, WaveRules};

    use super::*;

    struct FixedPoints;

    impl SpawnPlacement for FixedPoints {
        fn random_placement(&self, role: RoleId) -> Option<Placement> {
            (role == RoleId::ChaosRepressor)
                .then(|| Placement::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO))
        }
    }

    fn chaos_wave(actors: Vec<ActorId>) -> CommittedWave {
        CommittedWave {
            faction: Faction::ChaosInsurgency,
            team: WaveRules::default().team(Faction::ChaosInsurgency).cloned(),
            actors,
            tickets_consumed: 3,
            tickets_remaining: 2,
            grants: Vec::new(),
        }
    }

    #[test]
    fn leader_then_members() {
        let mut registry = ActorRegistry::new();
        for id in 1..=3 {
            registry.connect(ActorId(id));
        }

        let wave = chaos_wave(vec![ActorId(2), ActorId(1), ActorId(3)]);
        RegistrySpawner::new(&mut registry, &FixedPoints)
            .spawn_wave(&wave)
            .unwrap();

        assert_eq!(registry.role(ActorId(2)), Some(RoleId::ChaosRepressor));
        assert_eq!(registry.role(ActorId(1)), Some(RoleId::ChaosRifleman));
        assert_eq!(registry.role(ActorId(3)), Some(RoleId::ChaosRifleman));

        let leader = registry.get(ActorId(2)).unwrap();
        assert_eq!(leader.placement().unwrap().position, Vec3::new(1.0, 2.0, 3.0));
        let member = registry.get(ActorId(1)).unwrap();
        assert_eq!(member.placement(), Some(Placement::ORIGIN));
    }

    #[test]
    fn missing_actor_fails_the_spawn() {
        let mut registry = ActorRegistry::new();
        registry.connect(ActorId(1));
        registry
            .assign_role(ActorId(1), RoleId::Spectator, None)
            .unwrap();

        let wave = chaos_wave(vec![ActorId(1), ActorId(5)]);
        let err = RegistrySpawner::new(&mut registry, &FixedPoints)
            .spawn_wave(&wave)
            .unwrap_err();

        assert!(matches!(
            err,
            RuntimeError::Spawn {
                actor: ActorId(5),
                ..
            }
        ));
        // The wave is all or nothing.
        assert_eq!(registry.role(ActorId(1)), Some(RoleId::Spectator));
        assert_eq!(registry.get(ActorId(1)).unwrap().placement(), None);
    }

    #[test]
    fn wave_without_team_is_a_no_op() {
        let mut registry = ActorRegistry::new();
        registry.connect(ActorId(1));

        let wave = CommittedWave {
            team: None,
            ..chaos_wave(Vec::new())
        };
        RegistrySpawner::new(&mut registry, &FixedPoints)
            .spawn_wave(&wave)
            .unwrap();

        assert_eq!(registry.role(ActorId(1)), Some(RoleId::None));
    }
}
