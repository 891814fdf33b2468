//! Simulation configuration.

use crate::core::config::CombatConfig;
use crate::core::constants::TICK_INTERVAL_MS;
use crate::reward::RewardOperation;

/// How the simulated player folds pending rewards in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardPolicy {
    Always(RewardOperation),
    /// Multiply when that yields the bigger number, otherwise add.
    Greedy,
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Enemies fought one after another, by power number
    pub enemy_numbers: Vec<i64>,

    /// Distance the enemy keeps from the player
    pub enemy_distance: f32,

    /// Maximum ticks per run before timeout
    pub max_ticks_per_run: u64,

    /// Simulated frame time in seconds
    pub tick_seconds: f64,

    pub reward_policy: RewardPolicy,

    /// Buy lives back whenever the number stays positive after paying
    pub auto_heal: bool,

    pub combat: CombatConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            enemy_numbers: vec![1, 2, 3, 5, 8, 13],
            enemy_distance: 1.0,
            max_ticks_per_run: 100_000,
            tick_seconds: TICK_INTERVAL_MS as f64 / 1000.0,
            reward_policy: RewardPolicy::Greedy,
            auto_heal: true,
            combat: CombatConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Single enemy with the player's own number: every swing is a coin flip.
    /// Leaves every other setting alone.
    pub fn even_duel(mut self, number: i64) -> Self {
        self.combat.player.starting_number = number;
        self.enemy_numbers = vec![number];
        self
    }

    /// Enemies `1..=length`, always multiplying, which forces the multiply
    /// penalty into play.
    pub fn gauntlet(mut self, length: usize) -> Self {
        self.enemy_numbers = (1..=length as i64).collect();
        self.reward_policy = RewardPolicy::Always(RewardOperation::Product);
        self
    }
}
