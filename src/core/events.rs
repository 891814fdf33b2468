//! Output events for presentation collaborators.
//!
//! The combat core never touches UI or audio. Every observable change is
//! pushed onto an [`EventQueue`] which the host drains once per frame and
//! maps to widget refreshes, sounds and floating numbers.

use crate::core::constants::EVENT_QUEUE_CAPACITY;
use crate::core::number::PowerNumber;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityId {
    Player,
    Enemy(EnemyId),
}

/// Why a request was ignored. Rejections never change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("attack requested while an attack is already in progress")]
    AttackInProgress,
    #[error("request from a combatant with no lives left")]
    Defeated,
    #[error("heal requested at full life")]
    AlreadyAtMaxLives,
    #[error("heal costs {cost} but the power number is {available}")]
    CannotAffordHeal { cost: u64, available: i64 },
    #[error("commit requested with no pending reward")]
    NoPendingReward,
    #[error("reward offered while another is pending")]
    RewardAlreadyPending,
    #[error("damage sent to a combatant that is already dead")]
    TargetAlreadyDead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    // ── Player economy ─────────────────────────────────────────
    NumberChanged(PowerNumber),
    LivesChanged(u32),
    MultiplyCountChanged(u32),
    PendingRewardChanged(bool),
    KillsChanged(u32),

    // ── Combat ─────────────────────────────────────────────────
    /// One resolved target of an attack. `amount` is zero on a miss.
    DamageDealt {
        target: EntityId,
        amount: u64,
        hit: bool,
    },
    EntityDied(EntityId),
    /// A dead enemy finished its death delay and can be despawned.
    EntityRemoved(EntityId),

    // ── Telemetry ──────────────────────────────────────────────
    Rejected(Rejection),
}

#[derive(Debug, Clone)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(EVENT_QUEUE_CAPACITY),
        }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Logs the rejection and records it for telemetry.
    pub fn reject(&mut self, rejection: Rejection) {
        tracing::debug!(%rejection, "request rejected");
        self.events.push_back(GameEvent::Rejected(rejection));
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_in_order_and_empties() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::LivesChanged(2));
        queue.push(GameEvent::NumberChanged(PowerNumber::new(4)));

        let drained = queue.drain();
        assert_eq!(
            drained,
            vec![
                GameEvent::LivesChanged(2),
                GameEvent::NumberChanged(PowerNumber::new(4)),
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_reject_records_event() {
        let mut queue = EventQueue::new();
        queue.reject(Rejection::NoPendingReward);
        assert_eq!(queue.len(), 1);
        assert_eq!(
            queue.drain(),
            vec![GameEvent::Rejected(Rejection::NoPendingReward)]
        );
    }

    #[test]
    fn test_rejection_messages() {
        let msg = Rejection::CannotAffordHeal {
            cost: 3,
            available: 2,
        }
        .to_string();
        assert_eq!(msg, "heal costs 3 but the power number is 2");
    }
}
