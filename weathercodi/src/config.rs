//! Application configuration constants
//!
//! Central location for storage keys, recommendation thresholds,
//! scoring weights and validation boundaries used throughout the application.

// ===== Storage Keys =====

/// Key holding the persisted session record
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Prefix for a user's wardrobe list (`wardrobe_<userId>`)
pub const WARDROBE_KEY_PREFIX: &str = "wardrobe_";
/// Prefix for a user's outfit history (`codi_history_<userId>`)
pub const CODI_HISTORY_KEY_PREFIX: &str = "codi_history_";

// ===== History =====

/// Maximum number of outfit history entries kept per user.
/// Oldest entries are evicted first.
pub const MAX_CODI_HISTORY: usize = 50;

/// Valid outfit rating range (inclusive)
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

// ===== Weather Thresholds =====

/// Outer layer is only recommended from the wardrobe below this temperature (°C)
pub const OUTER_LAYER_MAX_TEMPERATURE: f64 = 15.0;

/// Precipitation probability (%) above which it counts as rainy
pub const RAIN_PRECIPITATION_THRESHOLD: u8 = 50;

/// Wind speed (m/s) above which it counts as windy
pub const WINDY_SPEED_THRESHOLD: f64 = 4.0;

/// Temperature (°C) above which short sleeves are fine
pub const SHORT_SLEEVE_MIN_TEMPERATURE: f64 = 20.0;

// ===== Scoring Weights =====

pub const SCORE_FAVORITE: u32 = 3;
pub const SCORE_FREQUENTLY_WORN: u32 = 2;
/// Wear count strictly above this earns `SCORE_FREQUENTLY_WORN`
pub const FREQUENTLY_WORN_THRESHOLD: u32 = 10;
pub const SCORE_PREFERRED_COLOR: u32 = 2;
pub const SCORE_PREFERRED_BRAND: u32 = 2;
pub const SCORE_FORMALITY_MATCH: u32 = 3;
pub const SCORE_FIT_MATCH: u32 = 1;
pub const SCORE_WARMTH_MATCH: u32 = 2;

// ===== Trend Score =====

pub const MIN_TREND_SCORE: u8 = 1;
pub const MAX_TREND_SCORE: u8 = 100;

// ===== Simulated Latency =====

/// Default delay before a login or registration completes
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1_000;
/// Default lower bound for the weather lookup delay
pub const DEFAULT_WEATHER_MIN_DELAY_MS: u64 = 1_000;
/// Default upper bound for the weather lookup delay
pub const DEFAULT_WEATHER_MAX_DELAY_MS: u64 = 1_500;
/// Maximum configurable delay (10 seconds). Anything longer looks like a hang.
pub const MAX_SIMULATED_DELAY_MS: u64 = 10_000;

// ===== Defaults =====

/// Location used when settings do not name one
pub const DEFAULT_LOCATION: &str = "서울";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WEATHERCODI_DATA_DIR";

/// Data directory used when `DATA_DIR_ENV` is unset
pub const DEFAULT_DATA_DIR: &str = "weathercodi-data";
