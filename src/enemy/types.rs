use crate::core::config::EnemyConfig;
use crate::core::events::EnemyId;
use crate::core::number::PowerNumber;
use crate::timing::{AttackTimer, Countdown, Knockback};
use serde::{Deserialize, Serialize};

use super::logic::max_life_for;

/// What the enemy wants its movement controller to do this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyIntent {
    #[default]
    Idle,
    Chase,
    Flee,
    /// Stand still and swing.
    Attack,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Lifecycle {
    Alive,
    /// Terminal. Despawn once the countdown runs out.
    Dead { removal: Countdown },
}

/// Result of sending damage to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageTaken {
    /// The enemy was already dead; nothing changed.
    Ignored,
    Wounded { remaining: u64 },
    Killed,
}

/// What one `advance` step produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemyTick {
    /// The enemy's own attack reached its hit instant.
    pub struck: bool,
    /// The death delay ran out during this step.
    pub expired: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub number: PowerNumber,
    pub(super) life: u64,
    pub(super) max_life: u64,
    pub(super) knockback: Knockback,
    pub(super) attack: AttackTimer,
    pub(super) lifecycle: Lifecycle,
    pub(super) intent: EnemyIntent,
    pub(super) removal_delay: f64,
}

impl Enemy {
    pub fn new(id: EnemyId, number: PowerNumber, config: &EnemyConfig) -> Self {
        let max_life = max_life_for(number, config.base_health_bonus);
        Self {
            id,
            number,
            life: max_life,
            max_life,
            knockback: Knockback::new(config.knockback_seconds),
            attack: AttackTimer::new(
                config.attack_windup_seconds(),
                config.attack_recovery_seconds(),
            ),
            lifecycle: Lifecycle::Alive,
            intent: EnemyIntent::Idle,
            removal_delay: config.removal_delay_seconds,
        }
    }

    pub fn life(&self) -> u64 {
        self.life
    }

    pub fn max_life(&self) -> u64 {
        self.max_life
    }

    pub fn intent(&self) -> EnemyIntent {
        self.intent
    }

    pub fn attack(&self) -> &AttackTimer {
        &self.attack
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Alive)
    }

    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    pub fn is_knocked_back(&self) -> bool {
        self.knockback.is_active()
    }

    /// Dead and past the death delay.
    pub fn is_removable(&self) -> bool {
        match self.lifecycle {
            Lifecycle::Alive => false,
            Lifecycle::Dead { removal } => !removal.is_running(),
        }
    }
}
