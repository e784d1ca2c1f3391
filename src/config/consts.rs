// src/config/consts.rs

// Net config
pub const ENTRY_URL: &str = "https://ga-covid19.ondemand.sas.com/";
pub const SCRIPT_URL: &str = "https://ga-covid19.ondemand.sas.com/static/js/main.js";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("ga_dph_scrape/", env!("CARGO_PKG_VERSION"));

// Resolve
pub const SCRIPT_MARKER: &str = "main"; // /static/js/main.<hash>.chunk.js

// Export
pub const DEFAULT_OUT_DIR: &str = "artifacts";
pub const ARTIFACT_EXT: &str = "json";
pub const DATE_PREFIX_FORMAT: &str = "%Y-%m-%d-";
