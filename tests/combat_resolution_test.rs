//! Integration test: hit decisions and damage
//!
//! Checks the three-way miss rule against large samples and the damage
//! formula at its edges.

use numbers_wrath::combat::{hit_damage, miss_probability, resolve};
use numbers_wrath::{resolve_attack, AttackReport, EnemyId, HitDecision, PowerNumber};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TRIALS: usize = 10_000;

fn misses(attacker: i64, defender: i64, seed: u64) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let attacker = PowerNumber::new(attacker);
    let defender = PowerNumber::new(defender);
    (0..TRIALS)
        .filter(|_| resolve(attacker, defender, &mut rng) == HitDecision::Miss)
        .count()
}

#[test]
fn test_weaker_defender_never_dodges() {
    for (attacker, defender) in [(2, 1), (10, -10), (0, -1), (i64::MAX, i64::MIN)] {
        assert_eq!(misses(attacker, defender, 1), 0, "{attacker} vs {defender}");
    }
}

#[test]
fn test_stronger_defender_always_dodges() {
    for (attacker, defender) in [(1, 2), (-10, 10), (-1, 0), (i64::MIN, i64::MAX)] {
        assert_eq!(misses(attacker, defender, 2), TRIALS, "{attacker} vs {defender}");
    }
}

#[test]
fn test_equal_numbers_miss_about_half() {
    for number in [-3, 0, 2, 1_000] {
        let rate = misses(number, number, 3) as f64 / TRIALS as f64;
        assert!((0.47..=0.53).contains(&rate), "{number}: miss rate {rate}");
    }
}

#[test]
fn test_miss_probability_values() {
    let two = PowerNumber::new(2);
    assert_eq!(miss_probability(two, PowerNumber::new(1)), 0.0);
    assert_eq!(miss_probability(two, two), 0.5);
    assert_eq!(miss_probability(two, PowerNumber::new(3)), 1.0);
}

#[test]
fn test_damage_is_half_with_floor_of_one() {
    assert_eq!(hit_damage(PowerNumber::new(0)), 1);
    assert_eq!(hit_damage(PowerNumber::new(1)), 1);
    assert_eq!(hit_damage(PowerNumber::new(2)), 1);
    assert_eq!(hit_damage(PowerNumber::new(3)), 1);
    assert_eq!(hit_damage(PowerNumber::new(10)), 5);
    assert_eq!(hit_damage(PowerNumber::new(-40)), 1);
}

#[test]
fn test_thousand_even_attacks() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let two = PowerNumber::new(2);
    let defenders = [(EnemyId(1), two)];

    let mut hits = 0;
    for _ in 0..1000 {
        let report = resolve_attack(two, &defenders, &mut rng);
        assert_eq!(report.targets().len(), 1);
        for result in report.hits() {
            assert_eq!(result.damage, 1);
        }
        hits += report.hit_count();
    }

    let rate = hits as f64 / 1000.0;
    assert!((0.45..=0.55).contains(&rate), "hit rate {rate}");
}

#[test]
fn test_mixed_defenders_resolved_independently() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let defenders = [
        (EnemyId(1), PowerNumber::new(100)),
        (EnemyId(2), PowerNumber::new(1)),
        (EnemyId(3), PowerNumber::new(100)),
    ];
    let report = resolve_attack(PowerNumber::new(10), &defenders, &mut rng);
    let AttackReport::Resolved(results) = &report else {
        panic!("expected resolved report");
    };
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].decision, HitDecision::Miss);
    assert_eq!(results[1].decision, HitDecision::Hit);
    assert_eq!(results[2].decision, HitDecision::Miss);
    assert_eq!(report.total_damage(), 5);
}
