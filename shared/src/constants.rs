pub const API_PREFIX: &str = "/api";
pub const ROULETTE_SPIN_ENDPOINT: &str = "/roulette/spin";
pub const ADMIN_PRIZES_ENDPOINT: &str = "/admin/roulette/prizes";
pub const ADMIN_UPLOAD_ENDPOINT: &str = "/admin/uploads";

pub const TOKEN_STORAGE_KEY: &str = "token";
pub const TUNING_STORAGE_KEY: &str = "roulette_tuning";

pub const FALLBACK_LABEL: &str = "N/A";

pub const LOGIN_REQUIRED_ERROR: &str = "Please log in again";
pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const SPIN_FAILED_ERROR: &str = "The spin could not be completed";
pub const PROBABILITY_SUM_WARNING: &str = "Prize probabilities must add up to 100%";
pub const PROBABILITY_NUMBER_WARNING: &str = "Every prize probability must be a number";
pub const UPLOAD_FAILED_ERROR: &str = "Upload failed";

/// Reveal overlay delay after the wheel settles.
pub const REVEAL_DELAY_MS: u32 = 800;
pub const SAVED_NOTICE_MS: u32 = 3000;
pub const UPLOAD_TICK_MS: u32 = 200;
pub const UPLOAD_STEP_PERCENT: u8 = 10;
pub const UPLOAD_CAP_PERCENT: u8 = 90;

pub const PROBABILITY_TARGET: f64 = 100.0;
pub const PROBABILITY_TOLERANCE: f64 = 0.01;
