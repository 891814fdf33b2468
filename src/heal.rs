//! Heal pricing.
//!
//! Healing spends power number to buy back a life. The price grows with the
//! life tier, and players who lean on multiplication pay a surcharge once
//! they pass the multiply threshold.

use crate::core::constants::*;
use crate::core::number::PowerNumber;
use serde::{Deserialize, Serialize};

/// Result of a heal attempt. On failure `number` and `lives` are the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealOutcome {
    pub success: bool,
    pub number: PowerNumber,
    pub lives: u32,
    pub cost: u64,
}

/// Base price by life tier.
pub fn base_heal_cost(lives: u32) -> u64 {
    if lives >= HEAL_TIER_HIGH_LIVES {
        HEAL_COST_HIGH
    } else if lives >= HEAL_TIER_MID_LIVES {
        HEAL_COST_MID
    } else {
        HEAL_COST_LOW
    }
}

/// Extra price for multiplication abuse: `ceil(0.5 * m * 0.1 * lives)` once
/// `m` is strictly above the threshold, zero otherwise.
pub fn multiply_surcharge(lives: u32, multiply_count: u32) -> u64 {
    if multiply_count <= HEAL_MULTIPLY_PENALTY_THRESHOLD {
        return 0;
    }
    let product = u64::from(multiply_count) * u64::from(lives);
    product.div_ceil(HEAL_SURCHARGE_DIVISOR)
}

pub fn heal_cost(lives: u32, multiply_count: u32) -> u64 {
    (base_heal_cost(lives) + multiply_surcharge(lives, multiply_count)).max(HEAL_MIN_COST)
}

/// Buys one life if there is room for it and the number can pay.
pub fn try_heal(
    number: PowerNumber,
    lives: u32,
    max_lives: u32,
    multiply_count: u32,
) -> HealOutcome {
    let cost = heal_cost(lives, multiply_count);
    let refused = HealOutcome {
        success: false,
        number,
        lives,
        cost,
    };

    if lives >= max_lives || !number.can_afford(cost) {
        return refused;
    }

    HealOutcome {
        success: true,
        number: number.pay(cost),
        lives: lives.saturating_add(1).min(max_lives),
        cost,
    }
}
