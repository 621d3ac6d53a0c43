//! Logger bootstrap for the binary.
//!
//! The library only emits through the `log` facade; nothing is printed unless
//! a client installs a logger. The CLI calls [`init_logging`] once at startup
//! and logs go to stderr so they never mix with command output.
//!
//! Log lines carry metadata only (`event=... status=...`). Usernames, emails
//! and passwords are not logged.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

/// Environment variable that overrides the default level.
pub const LOG_ENV: &str = "ELDENREG_LOG";
pub const DEFAULT_LEVEL: &str = "warn";

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Picks the level: `--verbose` forces `debug`, then `$ELDENREG_LOG`, then
/// the default.
pub fn resolve_level(verbose: bool, env_level: Option<&str>) -> Result<&'static str, String> {
    if verbose {
        return Ok("debug");
    }
    match env_level {
        Some(level) if !level.trim().is_empty() => normalize_level(level),
        _ => Ok(DEFAULT_LEVEL),
    }
}

/// Starts the stderr logger. Repeated calls with the same level are no-ops;
/// a different level is rejected.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level == level {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }

    LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;
        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    debug!(
        "event=app_start status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        )),
    }
}
