//! Per-tick orchestration of one player against any number of enemies.
//!
//! The arena owns every combatant and the random source. Positions and
//! collision stay with the host engine, which answers range queries through
//! the [`Spatial`] trait passed into [`Arena::advance`].

use crate::combat::{resolve_attack, AttackReport};
use crate::core::config::CombatConfig;
use crate::core::events::{EnemyId, EntityId, GameEvent, Rejection};
use crate::core::number::PowerNumber;
use crate::enemy::{in_strike_reach, DamageTaken, Enemy};
use crate::player::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Range queries answered by the host's physics.
pub trait Spatial {
    /// Enemies inside the player's hit geometry at this instant.
    fn enemies_in_reach(&self) -> Vec<EnemyId>;

    /// Distance from an enemy to the player, `None` if the host does not
    /// know where the enemy is.
    fn distance_to_player(&self, enemy: EnemyId) -> Option<f32>;
}

pub struct Arena<R: Rng = StdRng> {
    config: CombatConfig,
    player: Player,
    enemies: BTreeMap<EnemyId, Enemy>,
    next_enemy_id: u32,
    rng: R,
}

impl Arena<StdRng> {
    pub fn from_entropy(config: CombatConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }

    pub fn seeded(config: CombatConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Arena<R> {
    pub fn new(config: CombatConfig, rng: R) -> Self {
        let player = Player::new(&config.player);
        Self {
            config,
            player,
            enemies: BTreeMap::new(),
            next_enemy_id: 1,
            rng,
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(&id)
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.values()
    }

    pub fn living_enemies(&self) -> usize {
        self.enemies.values().filter(|e| e.is_alive()).count()
    }

    pub fn spawn_enemy(&mut self, number: PowerNumber) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        self.enemies
            .insert(id, Enemy::new(id, number, &self.config.enemy));
        tracing::debug!(enemy = %id, number = number.value(), "enemy spawned");
        id
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.player.drain_events()
    }

    /// Runs one tick.
    ///
    /// Order: player timer, enemy timers, the player's hit check, enemy hit
    /// checks, enemy AI, despawn of expired corpses. Knockback and death
    /// delays started by the player's hit only run for the part of the step
    /// after the hit instant. Returns the player's attack report when the
    /// hit check ran this tick.
    pub fn advance(&mut self, delta_time: f64, spatial: &impl Spatial) -> Option<AttackReport> {
        let after_hit = self.player.advance_to_strike(delta_time);
        let swings = self.advance_enemies(delta_time);
        let report = after_hit.map(|after_hit| self.strike(spatial, after_hit));

        self.land_enemy_swings(&swings, spatial);
        self.think(spatial);
        self.remove_expired();
        report
    }

    /// Resolves the player's hit check against everything in reach.
    fn strike(&mut self, spatial: &impl Spatial, after_hit: f64) -> AttackReport {
        let mut defenders: Vec<(EnemyId, PowerNumber)> = Vec::new();
        for id in spatial.enemies_in_reach() {
            if defenders.iter().any(|(seen, _)| *seen == id) {
                continue;
            }
            match self.enemies.get(&id) {
                Some(enemy) if enemy.is_alive() => defenders.push((id, enemy.number)),
                Some(_) => self.player.reject(Rejection::TargetAlreadyDead),
                None => tracing::trace!(enemy = %id, "unknown enemy in reach"),
            }
        }

        let report = resolve_attack(self.player.number(), &defenders, &mut self.rng);

        for result in report.targets() {
            let hit = result.decision.is_hit();
            self.player.emit(GameEvent::DamageDealt {
                target: EntityId::Enemy(result.target),
                amount: result.damage,
                hit,
            });
            if !hit {
                continue;
            }
            let Some(enemy) = self.enemies.get_mut(&result.target) else {
                continue;
            };
            let taken = enemy.receive_damage(result.damage);
            if taken != DamageTaken::Ignored {
                enemy.catch_up(after_hit);
            }
            if taken == DamageTaken::Killed {
                let number = enemy.number;
                self.player
                    .emit(GameEvent::EntityDied(EntityId::Enemy(result.target)));
                self.player.on_enemy_defeated(number);
            }
        }

        report
    }

    /// Advances every enemy's timers and returns the ones whose swing
    /// reached its hit instant.
    fn advance_enemies(&mut self, delta_time: f64) -> Vec<EnemyId> {
        self.enemies
            .values_mut()
            .filter_map(|enemy| enemy.advance(delta_time).struck.then_some(enemy.id))
            .collect()
    }

    /// Applies enemy hits. Enemies killed earlier in the same tick and
    /// players already down take no part.
    fn land_enemy_swings(&mut self, swings: &[EnemyId], spatial: &impl Spatial) {
        let damage = self.config.enemy.attack_damage;
        for &id in swings {
            if self.player.is_dead() {
                return;
            }
            if !self.enemies.get(&id).is_some_and(|enemy| enemy.is_alive()) {
                continue;
            }
            match spatial.distance_to_player(id) {
                Some(distance) if in_strike_reach(distance, &self.config.enemy) => {
                    tracing::debug!(enemy = %id, damage, "enemy hit the player");
                    self.player.receive_damage(damage);
                }
                _ => tracing::trace!(enemy = %id, "enemy swing missed"),
            }
        }
    }

    fn think(&mut self, spatial: &impl Spatial) {
        if self.player.is_dead() {
            return;
        }
        let player_number = self.player.number();
        for enemy in self.enemies.values_mut() {
            let distance = spatial.distance_to_player(enemy.id);
            enemy.think(player_number, distance, &self.config.enemy);
        }
    }

    fn remove_expired(&mut self) {
        let expired: Vec<EnemyId> = self
            .enemies
            .values()
            .filter(|e| e.is_removable())
            .map(|e| e.id)
            .collect();
        for id in expired {
            self.enemies.remove(&id);
            tracing::trace!(enemy = %id, "enemy removed");
            self.player.emit(GameEvent::EntityRemoved(EntityId::Enemy(id)));
        }
    }
}
