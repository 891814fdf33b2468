//! Monte Carlo balance simulator.
//!
//! Plays scripted runs through [`Arena`](crate::arena::Arena) to measure:
//! - Hit rate at a given number gap
//! - How often a player survives an enemy sequence
//! - How fast the number grows under each reward policy
//! - How often heals get bought once the multiply surcharge applies

mod config;
mod report;
mod runner;

pub use config::{RewardPolicy, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
