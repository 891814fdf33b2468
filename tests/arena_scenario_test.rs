//! Integration test: arena scenarios
//!
//! Drives whole fights through `Arena::advance` at the frame interval and
//! checks timing, kills and rewards.

use numbers_wrath::core::constants::TICK_INTERVAL_MS;
use numbers_wrath::{
    Arena, AttackPhase, CombatConfig, EnemyId, EntityId, GameEvent, PowerNumber, Spatial,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DT: f64 = TICK_INTERVAL_MS as f64 / 1000.0;

/// Every enemy listed stands in reach at arm's length.
struct Melee(Vec<EnemyId>);

impl Spatial for Melee {
    fn enemies_in_reach(&self) -> Vec<EnemyId> {
        self.0.clone()
    }

    fn distance_to_player(&self, enemy: EnemyId) -> Option<f32> {
        self.0.contains(&enemy).then_some(1.0)
    }
}

fn arena(seed: u64) -> Arena<ChaCha8Rng> {
    let mut arena = Arena::new(CombatConfig::default(), ChaCha8Rng::seed_from_u64(seed));
    arena.drain_events();
    arena
}

#[test]
fn test_strike_lands_after_windup() {
    let mut arena = arena(1);
    let target = arena.spawn_enemy(PowerNumber::new(1));
    let field = Melee(vec![target]);

    assert!(arena.player_mut().request_attack());
    let mut elapsed = 0.0;
    let report = loop {
        elapsed += DT;
        if let Some(report) = arena.advance(DT, &field) {
            break report;
        }
        assert!(elapsed < 1.0, "strike never landed");
    };

    assert!(elapsed >= 0.15 - 1e-9);
    assert!(elapsed < 0.15 + DT + 1e-9);
    assert_eq!(report.hit_count(), 1);
    assert_eq!(arena.player().attack_phase(), AttackPhase::Cooldown);
}

#[test]
fn test_player_duel_until_kill_then_commit() {
    // Life 2 + 1 = 3, two-damage hits from number 4.
    let mut config = CombatConfig::default();
    config.player.starting_number = 4;
    let mut arena = Arena::new(config, ChaCha8Rng::seed_from_u64(42));
    arena.drain_events();
    let target = arena.spawn_enemy(PowerNumber::new(1));
    let field = Melee(vec![target]);

    for _ in 0..200 {
        if arena.player().attack_phase() == AttackPhase::Idle {
            arena.player_mut().request_attack();
        }
        arena.advance(DT, &field);
        if arena.player().has_pending_reward() {
            break;
        }
    }

    assert_eq!(arena.player().kills(), 1);
    let events = arena.drain_events();
    assert!(events.contains(&GameEvent::EntityDied(EntityId::Enemy(target))));
    assert!(events.contains(&GameEvent::PendingRewardChanged(true)));
    assert_eq!(
        arena.player_mut().commit_pending_as_product(),
        Some(PowerNumber::new(4))
    );
    assert_eq!(arena.player().multiply_count(), 1);
}

#[test]
fn test_thousand_attacks_on_even_enemy() {
    let mut config = CombatConfig::default();
    // Keep the enemy alive and passive for the whole run.
    config.enemy.detection_range = 0.0;
    let mut arena = Arena::new(config, ChaCha8Rng::seed_from_u64(1000));
    arena.drain_events();

    let mut hits = 0u64;
    let mut attacks = 0u64;
    while attacks < 1000 {
        let target = arena.spawn_enemy(PowerNumber::new(2));
        let field = Melee(vec![target]);
        arena.player_mut().request_attack();
        let report = loop {
            if let Some(report) = arena.advance(DT, &field) {
                break report;
            }
        };
        attacks += 1;
        hits += report.hit_count() as u64;
        assert!(report.hits().all(|r| r.damage == 1));

        // Finish the cooldown against an empty field, discard the enemy.
        while arena.player().attack_phase() != AttackPhase::Idle {
            arena.advance(DT, &Melee(Vec::new()));
        }
        arena.drain_events();
    }

    let rate = hits as f64 / attacks as f64;
    assert!((0.45..=0.55).contains(&rate), "hit rate {rate}");
    assert_eq!(arena.player().number(), PowerNumber::new(2));
}

#[test]
fn test_player_death_stops_enemies() {
    let mut arena = arena(3);
    let brute = arena.spawn_enemy(PowerNumber::new(99));
    let field = Melee(vec![brute]);

    for _ in 0..1000 {
        arena.advance(DT, &field);
    }

    assert!(arena.player().is_dead());
    let events = arena.drain_events();
    let deaths = events
        .iter()
        .filter(|e| **e == GameEvent::EntityDied(EntityId::Player))
        .count();
    assert_eq!(deaths, 1);
    assert!(!arena.player_mut().request_attack());
    assert!(!arena.player_mut().request_heal());
}
