//! Enemy combatants: life, knockback, death and AI intent.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
