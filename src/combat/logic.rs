//! Hit decisions and damage.
//!
//! These are pure functions of the two power numbers and a random draw, so
//! the arena, the simulator and the tests all share exactly one rule set.

use super::types::{AttackReport, HitDecision, TargetResult};
use crate::core::constants::*;
use crate::core::events::EnemyId;
use crate::core::number::PowerNumber;
use rand::Rng;
use std::cmp::Ordering;

/// Chance that `attacker` misses `defender`.
pub fn miss_probability(attacker: PowerNumber, defender: PowerNumber) -> f64 {
    match defender.cmp(&attacker) {
        Ordering::Less => MISS_CHANCE_WEAKER_DEFENDER,
        Ordering::Equal => MISS_CHANCE_EQUAL_DEFENDER,
        Ordering::Greater => MISS_CHANCE_STRONGER_DEFENDER,
    }
}

/// Decides a hit from a uniform draw in `[0, 1)`.
pub fn decide_hit(attacker: PowerNumber, defender: PowerNumber, roll: f64) -> HitDecision {
    if roll < miss_probability(attacker, defender) {
        HitDecision::Miss
    } else {
        HitDecision::Hit
    }
}

/// Draws once from `rng` and decides the hit.
pub fn resolve(attacker: PowerNumber, defender: PowerNumber, rng: &mut impl Rng) -> HitDecision {
    let roll: f64 = rng.gen();
    decide_hit(attacker, defender, roll)
}

/// Damage of a landed hit: `max(1, attacker / 2)`.
pub fn hit_damage(attacker: PowerNumber) -> u64 {
    let half = attacker.half().value();
    if half <= 0 {
        MIN_HIT_DAMAGE
    } else {
        (half as u64).max(MIN_HIT_DAMAGE)
    }
}

/// Resolves one strike against every defender in reach.
///
/// Each defender gets its own draw; a miss on one never short-circuits the
/// rest.
pub fn resolve_attack(
    attacker: PowerNumber,
    defenders: &[(EnemyId, PowerNumber)],
    rng: &mut impl Rng,
) -> AttackReport {
    if defenders.is_empty() {
        tracing::debug!("attack: no enemies in range");
        return AttackReport::NoTargets;
    }

    let damage = hit_damage(attacker);
    let results: Vec<TargetResult> = defenders
        .iter()
        .map(|&(target, defender)| {
            let decision = resolve(attacker, defender, rng);
            if !decision.is_hit() {
                tracing::debug!(
                    %target,
                    defender = defender.value(),
                    attacker = attacker.value(),
                    "attack missed"
                );
            }
            TargetResult {
                target,
                decision,
                damage: if decision.is_hit() { damage } else { 0 },
            }
        })
        .collect();

    let report = AttackReport::Resolved(results);
    if !report.any_hit() {
        tracing::debug!("attack: no enemies damaged");
    }
    report
}
