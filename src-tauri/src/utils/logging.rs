//! Logger setup and per-module logging switches.
//!
//! Modules that log define a flag and then use the exported macros:
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//! use crate::{log_debug, log_info};
//!
//! log_info!("carousel {} started", id);
//! ```

use log::LevelFilter;

/// Set to `1` or `true` for debug-level output (rule matches, relay traffic).
pub const DEBUG_ENV_VAR: &str = "WONDERLIST_DEBUG";

pub fn debug_enabled() -> bool {
    std::env::var(DEBUG_ENV_VAR)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Install the global logger. `RUST_LOG` still wins over the default level.
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let level = if debug_enabled() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
