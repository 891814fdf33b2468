//! Combat balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 1000 runs, default enemy sequence
//!   cargo run --bin simulate -- --duel 2 -n 500  # even fight at number 2
//!   cargo run --bin simulate -- --seed 42        # reproducible run

use numbers_wrath::build_info::version_line;
use numbers_wrath::reward::RewardOperation;
use numbers_wrath::simulator::{run_simulation, RewardPolicy, SimConfig};
use numbers_wrath::CombatConfig;
use std::env;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => fail(&message),
    };
    if cli.help {
        print_help();
        return;
    }
    let json = cli.json;
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(message) => fail(&message),
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              NUMBER'S WRATH BALANCE SIMULATOR                 ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("  {}", version_line());
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Player number:  {}", config.combat.player.starting_number);
    println!("  Enemies:        {:?}", config.enemy_numbers);
    println!("  Reward policy:  {:?}", config.reward_policy);
    println!("  Auto heal:      {}", config.auto_heal);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("failed to write {filename}: {e}");
            process::exit(1);
        }
        println!("JSON report saved to: {}", filename);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    eprintln!("run with --help for usage");
    process::exit(2);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Preset {
    Duel(i64),
    Gauntlet(usize),
}

/// Parsed flags. Presets apply first and explicit flags override them, so
/// flag order never matters.
#[derive(Debug, Default)]
struct Cli {
    preset: Option<Preset>,
    runs: Option<u32>,
    seed: Option<u64>,
    ticks: Option<u64>,
    player: Option<i64>,
    enemies: Option<Vec<i64>>,
    config_path: Option<String>,
    policy: Option<RewardPolicy>,
    no_heal: bool,
    verbose: bool,
    json: bool,
    help: bool,
}

impl Cli {
    fn into_config(self) -> Result<SimConfig, String> {
        let mut config = SimConfig::default();
        if let Some(path) = &self.config_path {
            config.combat = CombatConfig::load(Path::new(path))
                .map_err(|e| format!("cannot load {path}: {e}"))?;
        }
        Ok(self.apply(config))
    }

    fn apply(self, mut config: SimConfig) -> SimConfig {
        config = match self.preset {
            Some(Preset::Duel(number)) => config.even_duel(number),
            Some(Preset::Gauntlet(length)) => config.gauntlet(length),
            None => config,
        };
        if let Some(runs) = self.runs {
            config.num_runs = runs;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(ticks) = self.ticks {
            config.max_ticks_per_run = ticks;
        }
        if let Some(number) = self.player {
            config.combat.player.starting_number = number;
        }
        if let Some(enemies) = self.enemies {
            config.enemy_numbers = enemies;
        }
        if let Some(policy) = self.policy {
            config.reward_policy = policy;
        }
        if self.no_heal {
            config.auto_heal = false;
        }
        if self.verbose {
            config.verbosity = 2;
        }
        config
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn parse_value<T>(args: &[String], i: usize, flag: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = value(args, i, flag)?;
    raw.parse::<T>()
        .map_err(|e| format!("bad value {raw:?} for {flag}: {e}"))
}

fn parse_number_list(raw: &str) -> Result<Vec<i64>, String> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| format!("bad enemy number {part:?}: {e}"))
        })
        .collect()
}

fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut cli = Cli::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => {
                cli.runs = Some(parse_value(args, i, flag)?);
                i += 1;
            }
            "-s" | "--seed" => {
                cli.seed = Some(parse_value(args, i, flag)?);
                i += 1;
            }
            "-t" | "--ticks" => {
                cli.ticks = Some(parse_value(args, i, flag)?);
                i += 1;
            }
            "-p" | "--player" => {
                cli.player = Some(parse_value(args, i, flag)?);
                i += 1;
            }
            "-e" | "--enemies" => {
                cli.enemies = Some(parse_number_list(value(args, i, flag)?)?);
                i += 1;
            }
            "--duel" => {
                cli.preset = Some(Preset::Duel(parse_value(args, i, flag)?));
                i += 1;
            }
            "--gauntlet" => {
                cli.preset = Some(Preset::Gauntlet(parse_value(args, i, flag)?));
                i += 1;
            }
            "--config" => {
                cli.config_path = Some(value(args, i, flag)?.to_string());
                i += 1;
            }
            "--sum" => cli.policy = Some(RewardPolicy::Always(RewardOperation::Sum)),
            "--product" => cli.policy = Some(RewardPolicy::Always(RewardOperation::Product)),
            "--no-heal" => cli.no_heal = true,
            "-v" | "--verbose" => cli.verbose = true,
            "--json" => cli.json = true,
            "-h" | "--help" => cli.help = true,
            other => return Err(format!("unknown option {other}")),
        }
        i += 1;
    }

    Ok(cli)
}

fn print_help() {
    println!("Number's Wrath Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulation runs (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -t, --ticks <T>       Max ticks per run (default: 100,000)");
    println!("    -p, --player <N>      Player starting number (default: 2)");
    println!("    -e, --enemies <LIST>  Comma separated enemy numbers, fought in order");
    println!("    --duel <N>            Single enemy with the same number as the player");
    println!("    --gauntlet <L>        Enemies 1..=L, always multiplying rewards");
    println!("    --config <PATH>       Load combat tuning from a JSON file");
    println!("    --sum, --product      Always commit rewards that way (default: greedy)");
    println!("    --no-heal             Never buy lives back");
    println!("    -v, --verbose         Print every run");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
    println!();
    println!("Explicit flags override --duel and --gauntlet in any order.");
    println!("Set RUST_LOG=numbers_wrath=debug for combat traces.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(line: &str) -> SimConfig {
        let args: Vec<String> = std::iter::once("simulate")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect();
        parse_args(&args).unwrap().into_config().unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = config_for("");
        assert_eq!(config.num_runs, 1000);
        assert_eq!(config.seed, None);
        assert!(config.auto_heal);
    }

    #[test]
    fn test_flags_before_preset_survive() {
        let config = config_for("-n 500 -t 300 --no-heal --sum -s 9 --duel 2");
        assert_eq!(config.num_runs, 500);
        assert_eq!(config.max_ticks_per_run, 300);
        assert!(!config.auto_heal);
        assert_eq!(config.seed, Some(9));
        assert_eq!(
            config.reward_policy,
            RewardPolicy::Always(RewardOperation::Sum)
        );
        assert_eq!(config.enemy_numbers, vec![2]);
        assert_eq!(config.combat.player.starting_number, 2);
    }

    #[test]
    fn test_flag_order_does_not_matter() {
        let before = config_for("-e 4,5 -p 7 --sum --gauntlet 3");
        let after = config_for("--gauntlet 3 -e 4,5 -p 7 --sum");
        for config in [before, after] {
            assert_eq!(config.enemy_numbers, vec![4, 5]);
            assert_eq!(config.combat.player.starting_number, 7);
            assert_eq!(
                config.reward_policy,
                RewardPolicy::Always(RewardOperation::Sum)
            );
        }
    }

    #[test]
    fn test_bad_input_is_an_error() {
        let args = |line: &str| -> Vec<String> {
            std::iter::once("simulate")
                .chain(line.split_whitespace())
                .map(String::from)
                .collect()
        };
        assert!(parse_args(&args("-n lots")).is_err());
        assert!(parse_args(&args("-e 1,x")).is_err());
        assert!(parse_args(&args("--seed")).is_err());
        assert!(parse_args(&args("--wat")).is_err());
        assert!(parse_args(&args("-h")).unwrap().help);
        assert!(parse_args(&args("--json")).unwrap().json);
    }
}
