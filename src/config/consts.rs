// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://ksis.eu/";
pub const LISTING_PATH: &str = "menu.php?akcia=S&oblast=ARTW&country=CAN";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const FETCH_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const ATHLETE_CORRECTIONS_FILE: &str = "athlete_corrections.csv";
pub const CLUB_CORRECTIONS_FILE: &str = "club_corrections.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const MERGED_FILE_STEM: &str = "merged";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

// Placeholders
pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_COMPETITION: &str = "Unknown_Competition";
