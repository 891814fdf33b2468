//! Shared numeric type, tuning constants, configuration and output events.

pub mod config;
pub mod constants;
pub mod events;
pub mod number;

pub use config::{CombatConfig, EnemyConfig, PlayerConfig};
pub use events::{EnemyId, EntityId, EventQueue, GameEvent, Rejection};
pub use number::PowerNumber;
