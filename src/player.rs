//! The player's economy: power number, lives, multiply count and the
//! pending reward.
//!
//! [`Player`] is the single entry point input handlers and the arena call.
//! Every operation either changes state and pushes the matching
//! [`GameEvent`]s, or changes nothing and records a [`Rejection`].

use crate::core::config::PlayerConfig;
use crate::core::events::{EntityId, EventQueue, GameEvent, Rejection};
use crate::core::number::PowerNumber;
use crate::heal::{heal_cost, try_heal};
use crate::reward::{PendingRewardGate, RewardOperation};
use crate::timing::{AttackPhase, AttackTimer};

#[derive(Debug, Clone)]
pub struct Player {
    number: PowerNumber,
    lives: u32,
    max_lives: u32,
    multiply_count: u32,
    kills: u32,
    pending: PendingRewardGate,
    attack: AttackTimer,
    events: EventQueue,
}

impl Player {
    /// Builds the player and queues the initial number and lives so the HUD
    /// can draw itself. A config with no lives yields a player that is
    /// already down, announced with `EntityDied(Player)`.
    pub fn new(config: &PlayerConfig) -> Self {
        let max_lives = config.max_lives;
        let lives = config.initial_lives.min(max_lives);
        let mut player = Self {
            number: PowerNumber::new(config.starting_number),
            lives,
            max_lives,
            multiply_count: 0,
            kills: 0,
            pending: PendingRewardGate::new(),
            attack: AttackTimer::new(
                config.attack_windup_seconds,
                config.attack_cooldown_seconds,
            ),
            events: EventQueue::new(),
        };
        player.events.push(GameEvent::LivesChanged(lives));
        player.events.push(GameEvent::NumberChanged(player.number));
        if player.is_dead() {
            player.events.push(GameEvent::EntityDied(EntityId::Player));
        }
        player
    }

    pub fn number(&self) -> PowerNumber {
        self.number
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    pub fn multiply_count(&self) -> u32 {
        self.multiply_count
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    pub fn has_pending_reward(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn pending_reward(&self) -> Option<PowerNumber> {
        self.pending.peek()
    }

    pub fn attack_phase(&self) -> AttackPhase {
        self.attack.phase()
    }

    /// What a heal would cost right now.
    pub fn heal_cost(&self) -> u64 {
        heal_cost(self.lives, self.multiply_count)
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn reject(&mut self, rejection: Rejection) {
        self.events.reject(rejection);
    }

    // ── Damage ─────────────────────────────────────────────────

    /// Removes lives. Returns false if the player was already down or the
    /// amount was zero.
    pub fn receive_damage(&mut self, amount: u32) -> bool {
        if self.is_dead() {
            self.reject(Rejection::Defeated);
            return false;
        }
        if amount == 0 {
            return false;
        }

        self.lives = self.lives.saturating_sub(amount);
        tracing::debug!(damage = amount, lives = self.lives, "player took damage");
        self.emit(GameEvent::LivesChanged(self.lives));

        if self.is_dead() {
            tracing::info!(number = self.number.value(), kills = self.kills, "player died");
            self.attack.reset();
            self.emit(GameEvent::EntityDied(EntityId::Player));
        }
        true
    }

    // ── Attack timing ──────────────────────────────────────────

    /// Starts an attack windup. Ignored unless the attack timer is idle.
    pub fn request_attack(&mut self) -> bool {
        if self.is_dead() {
            self.reject(Rejection::Defeated);
            return false;
        }
        if !self.attack.request() {
            self.reject(Rejection::AttackInProgress);
            return false;
        }
        true
    }

    /// Advances the attack timer. True means the hit check runs now.
    pub fn advance(&mut self, delta_time: f64) -> bool {
        self.attack.advance(delta_time)
    }

    /// Advances the attack timer. On a strike, returns the part of
    /// `delta_time` that came after the hit instant.
    pub fn advance_to_strike(&mut self, delta_time: f64) -> Option<f64> {
        self.attack.advance_to_strike(delta_time)
    }

    // ── Rewards ────────────────────────────────────────────────

    /// Records a kill and holds the enemy's number as the pending reward,
    /// unless a reward is already waiting.
    pub fn on_enemy_defeated(&mut self, enemy_number: PowerNumber) -> bool {
        self.kills = self.kills.saturating_add(1);
        self.emit(GameEvent::KillsChanged(self.kills));

        if !self.pending.offer(enemy_number) {
            self.reject(Rejection::RewardAlreadyPending);
            return false;
        }
        tracing::debug!(reward = enemy_number.value(), "pending reward set");
        self.emit(GameEvent::PendingRewardChanged(true));
        true
    }

    /// Folds the pending reward into the number. Returns the new number, or
    /// `None` when nothing was pending.
    pub fn commit_pending(&mut self, operation: RewardOperation) -> Option<PowerNumber> {
        let Some(committed) = self.pending.commit(operation) else {
            self.reject(Rejection::NoPendingReward);
            return None;
        };

        self.number = committed.apply_to(self.number);
        tracing::debug!(
            ?operation,
            reward = committed.number.value(),
            number = self.number.value(),
            "applied pending reward"
        );
        self.emit(GameEvent::NumberChanged(self.number));

        if operation == RewardOperation::Product {
            self.multiply_count = self.multiply_count.saturating_add(1);
            self.emit(GameEvent::MultiplyCountChanged(self.multiply_count));
        }

        self.emit(GameEvent::PendingRewardChanged(false));
        Some(self.number)
    }

    pub fn commit_pending_as_sum(&mut self) -> Option<PowerNumber> {
        self.commit_pending(RewardOperation::Sum)
    }

    pub fn commit_pending_as_product(&mut self) -> Option<PowerNumber> {
        self.commit_pending(RewardOperation::Product)
    }

    // ── Healing ────────────────────────────────────────────────

    /// Spends power number on one life.
    pub fn request_heal(&mut self) -> bool {
        if self.is_dead() {
            self.reject(Rejection::Defeated);
            return false;
        }

        let outcome = try_heal(self.number, self.lives, self.max_lives, self.multiply_count);
        if !outcome.success {
            let rejection = if self.lives >= self.max_lives {
                Rejection::AlreadyAtMaxLives
            } else {
                Rejection::CannotAffordHeal {
                    cost: outcome.cost,
                    available: self.number.value(),
                }
            };
            self.reject(rejection);
            return false;
        }

        self.number = outcome.number;
        self.lives = outcome.lives;
        tracing::debug!(cost = outcome.cost, lives = self.lives, "healed");
        self.emit(GameEvent::NumberChanged(self.number));
        self.emit(GameEvent::LivesChanged(self.lives));
        true
    }
}
