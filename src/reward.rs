//! The pending reward slot.
//!
//! Killing an enemy does not change the player's number right away. The
//! enemy's number waits here until the player picks how to fold it in.

use crate::core::number::PowerNumber;
use serde::{Deserialize, Serialize};

/// How a pending reward is folded into the player's number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardOperation {
    Sum,
    Product,
}

impl RewardOperation {
    /// Saturating `base + reward` or `base * reward`.
    pub fn apply(self, base: PowerNumber, reward: PowerNumber) -> PowerNumber {
        match self {
            RewardOperation::Sum => base.saturating_add(reward),
            RewardOperation::Product => base.saturating_mul(reward),
        }
    }
}

/// A reward taken out of the gate, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedReward {
    pub operation: RewardOperation,
    pub number: PowerNumber,
}

impl CommittedReward {
    pub fn apply_to(self, base: PowerNumber) -> PowerNumber {
        self.operation.apply(base, self.number)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRewardGate {
    slot: Option<PowerNumber>,
}

impl PendingRewardGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    pub fn peek(&self) -> Option<PowerNumber> {
        self.slot
    }

    /// Holds `number` unless something is already held; first offer wins.
    /// Returns whether the offer was taken.
    pub fn offer(&mut self, number: PowerNumber) -> bool {
        if self.slot.is_some() {
            return false;
        }
        self.slot = Some(number);
        true
    }

    /// Empties the slot, tagging the held number with the chosen operation.
    pub fn commit(&mut self, operation: RewardOperation) -> Option<CommittedReward> {
        self.slot.take().map(|number| CommittedReward { operation, number })
    }

    pub fn commit_as_sum(&mut self) -> Option<PowerNumber> {
        self.commit(RewardOperation::Sum).map(|c| c.number)
    }

    pub fn commit_as_product(&mut self) -> Option<PowerNumber> {
        self.commit(RewardOperation::Product).map(|c| c.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let mut gate = PendingRewardGate::new();
        assert!(!gate.is_pending());
        assert_eq!(gate.commit_as_sum(), None);
        assert_eq!(gate.commit_as_product(), None);
    }

    #[test]
    fn test_first_offer_wins() {
        let mut gate = PendingRewardGate::new();
        assert!(gate.offer(PowerNumber::new(5)));
        assert!(!gate.offer(PowerNumber::new(9)));
        assert_eq!(gate.commit_as_sum(), Some(PowerNumber::new(5)));
    }

    #[test]
    fn test_only_one_commit_per_occupancy() {
        let mut gate = PendingRewardGate::new();
        gate.offer(PowerNumber::new(4));
        assert_eq!(gate.commit_as_product(), Some(PowerNumber::new(4)));
        assert_eq!(gate.commit_as_sum(), None);
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_slot_reusable_after_commit() {
        let mut gate = PendingRewardGate::new();
        gate.offer(PowerNumber::new(1));
        gate.commit_as_sum();
        assert!(gate.offer(PowerNumber::new(2)));
        assert_eq!(gate.peek(), Some(PowerNumber::new(2)));
    }

    #[test]
    fn test_commit_tags_operation() {
        let mut gate = PendingRewardGate::new();
        gate.offer(PowerNumber::new(3));
        let committed = gate.commit(RewardOperation::Product).unwrap();
        assert_eq!(committed.operation, RewardOperation::Product);
        assert_eq!(committed.apply_to(PowerNumber::new(5)), PowerNumber::new(15));
        assert!(gate.commit(RewardOperation::Sum).is_none());
    }

    #[test]
    fn test_operation_apply() {
        let base = PowerNumber::new(6);
        assert_eq!(
            RewardOperation::Sum.apply(base, PowerNumber::new(3)),
            PowerNumber::new(9)
        );
        assert_eq!(
            RewardOperation::Product.apply(base, PowerNumber::new(3)),
            PowerNumber::new(18)
        );
        assert_eq!(
            RewardOperation::Product.apply(PowerNumber::MAX, PowerNumber::new(3)),
            PowerNumber::MAX
        );
    }
}
