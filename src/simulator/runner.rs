//! Runs scripted duels through the real [`Arena`] tick loop.
//!
//! The simulated player swings whenever idle, folds rewards in according to
//! the configured policy and optionally buys lives back. Enemies are fought
//! one at a time at a fixed distance.

use super::config::{RewardPolicy, SimConfig};
use super::report::{RunStats, SimReport};
use crate::arena::{Arena, Spatial};
use crate::combat::AttackReport;
use crate::core::events::EnemyId;
use crate::core::number::PowerNumber;
use crate::player::Player;
use crate::reward::RewardOperation;
use crate::timing::AttackPhase;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Kills {}, Number {}, Lives {}, Multiplies {}, Ticks {}",
                run_idx + 1,
                config.num_runs,
                run.kills,
                run.final_number,
                run.final_lives,
                run.multiply_count,
                run.total_ticks
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs)
}

/// One enemy at a time, always facing the player.
struct Duel {
    current: Option<EnemyId>,
    distance: f32,
}

impl Spatial for Duel {
    fn enemies_in_reach(&self) -> Vec<EnemyId> {
        self.current.into_iter().collect()
    }

    fn distance_to_player(&self, enemy: EnemyId) -> Option<f32> {
        (self.current == Some(enemy)).then_some(self.distance)
    }
}

fn choose_operation(
    policy: RewardPolicy,
    number: PowerNumber,
    reward: PowerNumber,
) -> RewardOperation {
    match policy {
        RewardPolicy::Always(operation) => operation,
        RewardPolicy::Greedy => {
            if number.saturating_mul(reward) > number.saturating_add(reward) {
                RewardOperation::Product
            } else {
                RewardOperation::Sum
            }
        }
    }
}

/// Heals only while the number stays positive after paying.
fn wants_heal(player: &Player) -> bool {
    player.lives() < player.max_lives()
        && player.number().value() > i64::try_from(player.heal_cost()).unwrap_or(i64::MAX)
}

fn simulate_single_run<R: Rng>(config: &SimConfig, rng: R) -> RunStats {
    let mut arena = Arena::new(config.combat.clone(), rng);
    let mut stats = RunStats::default();
    let mut queue = config.enemy_numbers.iter().copied();
    let mut duel = Duel {
        current: None,
        distance: config.enemy_distance,
    };

    for _ in 0..config.max_ticks_per_run {
        if arena.player().is_dead() {
            stats.died = true;
            break;
        }

        if let Some(reward) = arena.player().pending_reward() {
            let player = arena.player();
            let operation = choose_operation(config.reward_policy, player.number(), reward);
            arena.player_mut().commit_pending(operation);
        }

        let current_alive = duel
            .current
            .and_then(|id| arena.enemy(id))
            .is_some_and(|enemy| enemy.is_alive());
        if !current_alive {
            match queue.next() {
                Some(number) => {
                    duel.current = Some(arena.spawn_enemy(PowerNumber::new(number)));
                }
                None => {
                    stats.cleared = true;
                    break;
                }
            }
        }

        if config.auto_heal && wants_heal(arena.player()) && arena.player_mut().request_heal() {
            stats.heals += 1;
        }

        let idle = arena.player().attack_phase() == AttackPhase::Idle;
        if idle && arena.player_mut().request_attack() {
            stats.attacks += 1;
        }

        match arena.advance(config.tick_seconds, &duel) {
            Some(AttackReport::NoTargets) => stats.empty_swings += 1,
            Some(report) => {
                stats.swings_resolved += report.targets().len() as u64;
                stats.hits += report.hit_count() as u64;
            }
            None => {}
        }
        stats.total_ticks += 1;
        arena.drain_events();
    }

    if !stats.cleared && !stats.died {
        stats.timed_out = true;
    }

    let player = arena.player();
    stats.kills = player.kills();
    stats.multiply_count = player.multiply_count();
    stats.final_number = player.number().value();
    stats.final_lives = player.lives();

    tracing::debug!(
        kills = stats.kills,
        number = stats.final_number,
        died = stats.died,
        "run finished"
    );

    stats
}
