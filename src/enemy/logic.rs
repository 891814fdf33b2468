use super::types::{DamageTaken, Enemy, EnemyIntent, EnemyTick, Lifecycle};
use crate::core::config::EnemyConfig;
use crate::core::number::PowerNumber;
use crate::timing::Countdown;

/// Max life is the enemy's number plus a flat bonus, never below 1.
pub fn max_life_for(number: PowerNumber, base_health_bonus: i64) -> u64 {
    let raw = number.value().saturating_add(base_health_bonus);
    raw.max(1) as u64
}

/// Picks the enemy's behaviour for this frame.
///
/// `distance` is `None` when the spatial collaborator has no position for
/// the enemy, which is treated like being out of sight. An enemy whose
/// number is zero or below counts as already beaten: it never chases or
/// attacks, only flees.
pub fn decide_intent(
    enemy_number: PowerNumber,
    player_number: PowerNumber,
    distance: Option<f32>,
    config: &EnemyConfig,
) -> EnemyIntent {
    let Some(distance) = distance else {
        return EnemyIntent::Idle;
    };
    if distance > config.detection_range {
        return EnemyIntent::Idle;
    }
    if enemy_number.is_defeated() || enemy_number < player_number {
        return EnemyIntent::Flee;
    }
    if distance > config.attack_range {
        EnemyIntent::Chase
    } else {
        EnemyIntent::Attack
    }
}

/// Whether the player is close enough to take an enemy hit.
pub fn in_strike_reach(distance: f32, config: &EnemyConfig) -> bool {
    distance <= config.attack_range + config.attack_reach_slack
}

impl Enemy {
    /// Applies damage and starts knockback. Dead enemies ignore damage.
    pub fn receive_damage(&mut self, amount: u64) -> DamageTaken {
        if self.is_dead() {
            return DamageTaken::Ignored;
        }

        self.life = self.life.saturating_sub(amount);
        tracing::debug!(
            enemy = %self.id,
            damage = amount,
            life = self.life,
            max_life = self.max_life,
            "enemy took damage"
        );

        if self.life == 0 {
            self.die();
            return DamageTaken::Killed;
        }

        self.knockback.trigger();
        DamageTaken::Wounded {
            remaining: self.life,
        }
    }

    /// Refreshes the AI intent and starts an attack when in range.
    ///
    /// Knocked back or dead enemies keep their previous state and do not
    /// start new attacks.
    pub fn think(
        &mut self,
        player_number: PowerNumber,
        distance: Option<f32>,
        config: &EnemyConfig,
    ) -> EnemyIntent {
        if self.is_dead() {
            self.intent = EnemyIntent::Idle;
            return self.intent;
        }
        if self.is_knocked_back() {
            return self.intent;
        }

        self.intent = decide_intent(self.number, player_number, distance, config);
        if self.intent == EnemyIntent::Attack && self.attack.request() {
            tracing::trace!(enemy = %self.id, "enemy attack started");
        }
        self.intent
    }

    pub fn advance(&mut self, delta_time: f64) -> EnemyTick {
        match &mut self.lifecycle {
            Lifecycle::Dead { removal } => EnemyTick {
                struck: false,
                expired: removal.advance(delta_time),
            },
            Lifecycle::Alive => {
                self.knockback.advance(delta_time);
                EnemyTick {
                    struck: self.attack.advance(delta_time),
                    expired: false,
                }
            }
        }
    }

    /// Runs the knockback or death delay started by a hit that landed part
    /// way through a step, for the time left in that step.
    pub fn catch_up(&mut self, after_hit: f64) {
        match &mut self.lifecycle {
            Lifecycle::Dead { removal } => {
                removal.advance(after_hit);
            }
            Lifecycle::Alive => self.knockback.advance(after_hit),
        }
    }

    fn die(&mut self) {
        tracing::debug!(enemy = %self.id, number = self.number.value(), "enemy died");
        self.knockback.cancel();
        self.attack.reset();
        self.intent = EnemyIntent::Idle;
        self.lifecycle = Lifecycle::Dead {
            removal: Countdown::start(self.removal_delay),
        };
    }
}
