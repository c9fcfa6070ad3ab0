// Single source of truth for all default values.

// --- Privacy ---
pub const DEFAULT_SAMPLE_FLOOR: usize = 20;
pub const DEFAULT_CELL_FLOOR: usize = 5;

// --- Analysis ---
pub const DEFAULT_MIN_GROUP_SIZE: usize = 3;
pub const DEFAULT_MIN_DIMENSION_SAMPLES: usize = 3;

// --- Cache ---
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 10_000;

// --- Rate limit ---
pub const DEFAULT_RATE_LIMIT_MAX_EVENTS: u32 = 30;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;

// --- Files ---
pub const CONFIG_FILENAME: &str = "agora.toml";
