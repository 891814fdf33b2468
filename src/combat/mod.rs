//! Combat resolution: hit decisions and damage.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
