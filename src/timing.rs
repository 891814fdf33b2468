//! Attack lifecycle and stun timers.
//!
//! Nothing here sleeps or spawns. Each timer stores its elapsed time and is
//! pushed forward by the host calling `advance(delta_time)` in seconds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPhase {
    #[default]
    Idle,
    Windup,
    /// The instant the hit check runs.
    ActiveHit,
    Cooldown,
}

/// Current phase plus time spent in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackWindow {
    pub phase: AttackPhase,
    pub elapsed: f64,
}

/// `Idle -> Windup -> ActiveHit -> Cooldown -> Idle`.
///
/// Requests are only accepted in `Idle`; there is no cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackTimer {
    window: AttackWindow,
    windup_seconds: f64,
    cooldown_seconds: f64,
}

impl AttackTimer {
    pub fn new(windup_seconds: f64, cooldown_seconds: f64) -> Self {
        Self {
            window: AttackWindow::default(),
            windup_seconds: windup_seconds.max(0.0),
            cooldown_seconds: cooldown_seconds.max(0.0),
        }
    }

    pub fn phase(&self) -> AttackPhase {
        self.window.phase
    }

    pub fn window(&self) -> AttackWindow {
        self.window
    }

    pub fn is_idle(&self) -> bool {
        self.window.phase == AttackPhase::Idle
    }

    /// Starts the windup. Returns false, changing nothing, unless idle.
    pub fn request(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.enter(AttackPhase::Windup);
        true
    }

    /// Drops any in-flight attack. Used when the owner dies.
    pub fn reset(&mut self) {
        self.enter(AttackPhase::Idle);
    }

    /// Moves time forward, carrying leftover time across phase boundaries.
    ///
    /// Returns true when the windup finished during this step, i.e. the
    /// attack reached `ActiveHit` and the caller must run the hit check now.
    /// `ActiveHit` hands over to `Cooldown` immediately.
    pub fn advance(&mut self, delta_time: f64) -> bool {
        self.advance_to_strike(delta_time).is_some()
    }

    /// Like [`advance`](Self::advance), but on a strike returns how much of
    /// `delta_time` was left after the hit instant.
    pub fn advance_to_strike(&mut self, delta_time: f64) -> Option<f64> {
        let mut remaining = delta_time.max(0.0);
        let mut after_strike = None;

        loop {
            match self.window.phase {
                AttackPhase::Idle => return after_strike,
                AttackPhase::Windup => {
                    let left = self.windup_seconds - self.window.elapsed;
                    if remaining < left {
                        self.window.elapsed += remaining;
                        return after_strike;
                    }
                    remaining -= left;
                    self.enter(AttackPhase::ActiveHit);
                }
                AttackPhase::ActiveHit => {
                    after_strike = Some(remaining);
                    self.enter(AttackPhase::Cooldown);
                }
                AttackPhase::Cooldown => {
                    let left = self.cooldown_seconds - self.window.elapsed;
                    if remaining < left {
                        self.window.elapsed += remaining;
                        return after_strike;
                    }
                    self.enter(AttackPhase::Idle);
                    return after_strike;
                }
            }
        }
    }

    fn enter(&mut self, phase: AttackPhase) {
        self.window = AttackWindow { phase, elapsed: 0.0 };
    }
}

/// A one-shot countdown in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: f64,
}

impl Countdown {
    pub fn start(seconds: f64) -> Self {
        Self {
            remaining: seconds.max(0.0),
        }
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Returns true on the step that brings it to zero.
    pub fn advance(&mut self, delta_time: f64) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remaining = (self.remaining - delta_time.max(0.0)).max(0.0);
        self.remaining == 0.0
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }
}

/// Per-defender stun after taking damage. Independent of the attacker's
/// own timer; it only suspends the defender's AI and movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Knockback {
    timer: Countdown,
    duration: f64,
}

impl Knockback {
    pub fn new(duration: f64) -> Self {
        Self {
            timer: Countdown::default(),
            duration,
        }
    }

    /// Starts or restarts the full duration.
    pub fn trigger(&mut self) {
        self.timer = Countdown::start(self.duration);
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_running()
    }

    pub fn advance(&mut self, delta_time: f64) {
        self.timer.advance(delta_time);
    }

    pub fn cancel(&mut self) {
        self.timer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_full_cycle() {
        let mut timer = AttackTimer::new(0.15, 0.5);
        assert_eq!(timer.phase(), AttackPhase::Idle);
        assert!(timer.request());
        assert_eq!(timer.phase(), AttackPhase::Windup);

        assert!(!timer.advance(0.1));
        assert_eq!(timer.phase(), AttackPhase::Windup);

        assert!(timer.advance(0.1));
        assert_eq!(timer.phase(), AttackPhase::Cooldown);
        assert!((timer.window().elapsed - 0.05).abs() < EPS);

        assert!(!timer.advance(0.4));
        assert_eq!(timer.phase(), AttackPhase::Cooldown);
        assert!(!timer.advance(0.1));
        assert_eq!(timer.phase(), AttackPhase::Idle);
    }

    #[test]
    fn test_request_rejected_outside_idle() {
        let mut timer = AttackTimer::new(0.15, 0.5);
        assert!(timer.request());
        assert!(!timer.request());
        timer.advance(0.2);
        assert_eq!(timer.phase(), AttackPhase::Cooldown);
        assert!(!timer.request());
        timer.advance(1.0);
        assert!(timer.request());
    }

    #[test]
    fn test_single_strike_even_with_huge_step() {
        let mut timer = AttackTimer::new(0.15, 0.5);
        timer.request();
        assert!(timer.advance(10.0));
        assert_eq!(timer.phase(), AttackPhase::Idle);
        assert!(!timer.advance(10.0));
    }

    #[test]
    fn test_time_left_after_strike() {
        let mut timer = AttackTimer::new(0.15, 0.5);
        timer.request();
        assert_eq!(timer.advance_to_strike(0.1), None);
        let left = timer.advance_to_strike(1.0).unwrap();
        assert!((left - 0.95).abs() < EPS);
        assert_eq!(timer.phase(), AttackPhase::Idle);
        assert_eq!(timer.advance_to_strike(1.0), None);
    }

    #[test]
    fn test_zero_windup_strikes_on_next_advance() {
        let mut timer = AttackTimer::new(0.0, 0.0);
        timer.request();
        assert!(timer.advance(0.0));
        assert!(timer.is_idle());
    }

    #[test]
    fn test_idle_advance_does_nothing() {
        let mut timer = AttackTimer::new(0.15, 0.5);
        assert!(!timer.advance(1.0));
        assert!(timer.is_idle());
    }

    #[test]
    fn test_reset_drops_attack() {
        let mut timer = AttackTimer::new(0.15, 0.5);
        timer.request();
        timer.reset();
        assert!(timer.is_idle());
        assert!(!timer.advance(1.0));
    }

    #[test]
    fn test_countdown() {
        let mut countdown = Countdown::start(1.0);
        assert!(countdown.is_running());
        assert!(!countdown.advance(0.6));
        assert!(countdown.advance(0.6));
        assert!(!countdown.is_running());
        assert!(!countdown.advance(0.6));
    }

    #[test]
    fn test_knockback_restarts() {
        let mut knockback = Knockback::new(0.15);
        assert!(!knockback.is_active());
        knockback.trigger();
        knockback.advance(0.1);
        assert!(knockback.is_active());
        knockback.trigger();
        knockback.advance(0.1);
        assert!(knockback.is_active());
        knockback.advance(0.05);
        assert!(!knockback.is_active());
    }
}
