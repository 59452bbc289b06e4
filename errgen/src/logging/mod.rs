//! Logging for the generator
//!
//! The library only talks to the `log` facade; binaries decide where records
//! go (see [`init_logging`]). Context pairs are rendered as `key=value`
//! after the message so records stay greppable.

pub mod codes;
#[macro_use]
pub mod macros;

pub use codes::Code;
pub use log::Level;

use std::fmt::Write;

/// Initialize `env_logger` for binaries.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies.
pub fn init_logging(default_level: log::LevelFilter) -> Result<(), String> {
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
        .map_err(|e| format!("Logger already initialized: {}", e))
}

/// Render a message followed by its `key=value` context pairs
pub fn format_with_context(message: &str, context: &[(&str, String)]) -> String {
    let mut line = String::from(message);
    for (key, value) in context {
        let _ = write!(line, " {}={}", key, value);
    }
    line
}

pub fn log_with_context(target: &str, level: Level, message: &str, context: &[(&str, String)]) {
    if log::log_enabled!(target: target, level) {
        log::log!(target: target, level, "{}", format_with_context(message, context));
    }
}

pub fn log_error_with_context(target: &str, code: Code, message: &str, context: &[(&str, String)]) {
    log::error!(target: target, "[{}] {}", code, format_with_context(message, context));
}

pub fn log_success_with_context(
    target: &str,
    code: Code,
    message: &str,
    context: &[(&str, String)],
) {
    log::info!(target: target, "[{}] {}", code, format_with_context(message, context));
}
