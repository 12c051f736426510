//! Conditional logging macros gated on a module-level `ENABLE_LOGS` flag.
//!
//! Each module that wants logging defines the flag and imports the macros
//! from the crate root:
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_warn};
//!
//! log_debug!("logged only while ENABLE_LOGS is true");
//! ```
//! Aggregation runs on every re-render, so per-call logging must be cheap to
//! switch off per module without touching the global filter.

/// Debug-level logging, active only when the calling module sets
/// `ENABLE_LOGS` to true.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

/// Warn-level logging, active only when the calling module sets
/// `ENABLE_LOGS` to true.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}
