// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 16;

// Player defaults
pub const PLAYER_STARTING_NUMBER: i64 = 2;
pub const PLAYER_MAX_LIVES: u32 = 3;
pub const PLAYER_INITIAL_LIVES: u32 = 3;
pub const PLAYER_ATTACK_WINDUP_SECONDS: f64 = 0.15;
pub const PLAYER_ATTACK_COOLDOWN_SECONDS: f64 = 0.5;

// Hit decision: chance that an attack misses a defender
pub const MISS_CHANCE_WEAKER_DEFENDER: f64 = 0.0;
pub const MISS_CHANCE_EQUAL_DEFENDER: f64 = 0.5;
pub const MISS_CHANCE_STRONGER_DEFENDER: f64 = 1.0;

// Damage floor applied to every hit
pub const MIN_HIT_DAMAGE: u64 = 1;

// Heal economy
pub const HEAL_TIER_HIGH_LIVES: u32 = 30;
pub const HEAL_TIER_MID_LIVES: u32 = 20;
pub const HEAL_COST_HIGH: u64 = 3;
pub const HEAL_COST_MID: u64 = 2;
pub const HEAL_COST_LOW: u64 = 1;
pub const HEAL_MIN_COST: u64 = 1;
/// Surcharge kicks in once the multiply count is strictly above this.
pub const HEAL_MULTIPLY_PENALTY_THRESHOLD: u32 = 10;
/// ceil(0.5 * multiplies * 0.1 * lives) == ceil(multiplies * lives / 20)
pub const HEAL_SURCHARGE_DIVISOR: u64 = 20;

// Enemy defaults
pub const ENEMY_BASE_HEALTH_BONUS: i64 = 2;
pub const ENEMY_DETECTION_RANGE: f32 = 8.0;
pub const ENEMY_ATTACK_RANGE: f32 = 1.2;
pub const ENEMY_ATTACK_REACH_SLACK: f32 = 0.2;
pub const ENEMY_ATTACK_COOLDOWN_SECONDS: f64 = 1.2;
pub const ENEMY_ATTACK_DURATION_SECONDS: f64 = 0.6;
/// Fraction of the attack animation at which the hit lands.
pub const ENEMY_ATTACK_HIT_FRACTION: f64 = 0.5;
pub const ENEMY_ATTACK_DAMAGE: u32 = 1;
pub const ENEMY_KNOCKBACK_SECONDS: f64 = 0.15;
pub const ENEMY_REMOVAL_DELAY_SECONDS: f64 = 1.0;

// Audio settings
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.6;
pub const DEFAULT_SFX_VOLUME: f32 = 0.8;
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// Event queue
pub const EVENT_QUEUE_CAPACITY: usize = 32;
