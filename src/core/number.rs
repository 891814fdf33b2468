//! The power number shared by the player and every enemy.
//!
//! All arithmetic saturates at the `i64` bounds: a long run of product
//! commits pins the number at `i64::MAX` instead of wrapping negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PowerNumber(i64);

impl PowerNumber {
    pub const MAX: PowerNumber = PowerNumber(i64::MAX);
    pub const MIN: PowerNumber = PowerNumber(i64::MIN);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub fn saturating_add(self, other: PowerNumber) -> PowerNumber {
        PowerNumber(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: PowerNumber) -> PowerNumber {
        PowerNumber(self.0.saturating_sub(other.0))
    }

    pub fn saturating_mul(self, other: PowerNumber) -> PowerNumber {
        PowerNumber(self.0.saturating_mul(other.0))
    }

    /// Floor division by two (rounds toward negative infinity).
    pub fn half(self) -> PowerNumber {
        PowerNumber(self.0.div_euclid(2))
    }

    /// Enemies at or below zero count as beaten.
    pub fn is_defeated(self) -> bool {
        self.0 <= 0
    }

    /// Whether this number can pay `cost` without going below zero.
    pub fn can_afford(self, cost: u64) -> bool {
        self.0 >= 0 && (self.0 as u64) >= cost
    }

    /// Subtracts an unsigned cost, saturating at `i64::MIN`.
    pub fn pay(self, cost: u64) -> PowerNumber {
        let cost = i64::try_from(cost).unwrap_or(i64::MAX);
        PowerNumber(self.0.saturating_sub(cost))
    }
}

impl From<i64> for PowerNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<PowerNumber> for i64 {
    fn from(value: PowerNumber) -> Self {
        value.0
    }
}

impl Add for PowerNumber {
    type Output = PowerNumber;

    fn add(self, rhs: PowerNumber) -> PowerNumber {
        self.saturating_add(rhs)
    }
}

impl Sub for PowerNumber {
    type Output = PowerNumber;

    fn sub(self, rhs: PowerNumber) -> PowerNumber {
        self.saturating_sub(rhs)
    }
}

impl Mul for PowerNumber {
    type Output = PowerNumber;

    fn mul(self, rhs: PowerNumber) -> PowerNumber {
        self.saturating_mul(rhs)
    }
}

impl fmt::Display for PowerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
