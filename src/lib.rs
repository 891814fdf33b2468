//! Number's Wrath - number economy and combat resolution.
//!
//! Every combatant carries a single integer power number. Comparing two
//! numbers decides hit or miss, half the attacker's number is the damage,
//! and a defeated enemy's number becomes a reward the player folds into
//! their own number by sum or product. Lives are bought back with number.
//!
//! [`Arena`] ticks a player against enemies; the engine-facing host feeds it
//! frame time and answers range queries through [`Spatial`].

pub mod arena;
pub mod build_info;
pub mod combat;
pub mod core;
pub mod enemy;
pub mod heal;
pub mod player;
pub mod reward;
pub mod settings;
pub mod simulator;
pub mod timing;

pub use arena::{Arena, Spatial};
pub use combat::{resolve_attack, AttackReport, HitDecision};
pub use crate::core::{
    CombatConfig, EnemyConfig, EnemyId, EntityId, EventQueue, GameEvent, PlayerConfig,
    PowerNumber, Rejection,
};
pub use enemy::{Enemy, EnemyIntent};
pub use heal::{heal_cost, try_heal, HealOutcome};
pub use player::Player;
pub use reward::{PendingRewardGate, RewardOperation};
pub use settings::{AudioSettings, SettingsStore};
pub use timing::{AttackPhase, AttackTimer};
