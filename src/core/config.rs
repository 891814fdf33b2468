//! Tunable combat parameters.
//!
//! Every section defaults to the values in [`crate::core::constants`], so a
//! JSON file only has to name the fields it overrides.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub starting_number: i64,
    pub max_lives: u32,
    pub initial_lives: u32,
    /// Delay between the attack request and the hit check.
    pub attack_windup_seconds: f64,
    /// Lockout after the hit check before the next request is accepted.
    pub attack_cooldown_seconds: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            starting_number: PLAYER_STARTING_NUMBER,
            max_lives: PLAYER_MAX_LIVES,
            initial_lives: PLAYER_INITIAL_LIVES,
            attack_windup_seconds: PLAYER_ATTACK_WINDUP_SECONDS,
            attack_cooldown_seconds: PLAYER_ATTACK_COOLDOWN_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Added to the enemy's number to get its max life.
    pub base_health_bonus: i64,
    pub detection_range: f32,
    pub attack_range: f32,
    /// Extra distance tolerated at the hit instant.
    pub attack_reach_slack: f32,
    /// Minimum time between two attack starts.
    pub attack_cooldown_seconds: f64,
    pub attack_duration_seconds: f64,
    pub attack_damage: u32,
    pub knockback_seconds: f64,
    pub removal_delay_seconds: f64,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            base_health_bonus: ENEMY_BASE_HEALTH_BONUS,
            detection_range: ENEMY_DETECTION_RANGE,
            attack_range: ENEMY_ATTACK_RANGE,
            attack_reach_slack: ENEMY_ATTACK_REACH_SLACK,
            attack_cooldown_seconds: ENEMY_ATTACK_COOLDOWN_SECONDS,
            attack_duration_seconds: ENEMY_ATTACK_DURATION_SECONDS,
            attack_damage: ENEMY_ATTACK_DAMAGE,
            knockback_seconds: ENEMY_KNOCKBACK_SECONDS,
            removal_delay_seconds: ENEMY_REMOVAL_DELAY_SECONDS,
        }
    }
}

impl EnemyConfig {
    /// Time from attack start to the hit check.
    pub fn attack_windup_seconds(&self) -> f64 {
        self.attack_duration_seconds * ENEMY_ATTACK_HIT_FRACTION
    }

    /// Time from the hit check until another attack may start.
    pub fn attack_recovery_seconds(&self) -> f64 {
        let cycle = self
            .attack_cooldown_seconds
            .max(self.attack_duration_seconds);
        (cycle - self.attack_windup_seconds()).max(0.0)
    }
}

impl CombatConfig {
    pub fn from_json_str(json: &str) -> io::Result<Self> {
        serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
