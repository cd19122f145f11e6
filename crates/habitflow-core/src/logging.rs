//! File-based logging bootstrap.
//!
//! Initialized once by the binary; repeated calls with the same directory
//! are no-ops, a different directory is rejected. Core modules only use the
//! `log` facade and work fine with logging never initialized.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "habitflow";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<(PathBuf, LoggerHandle)> = OnceCell::new();

/// Initialize rolling file logging in `log_dir` at the given level.
///
/// # Errors
/// Returns a human-readable error when the level is invalid, the directory
/// cannot be created, or logging was already initialized elsewhere.
pub fn init(level: &str, log_dir: &Path) -> Result<(), String> {
    if let Some((active_dir, _)) = LOGGER.get() {
        if active_dir == log_dir {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            active_dir.display(),
            log_dir.display()
        ));
    }

    LOGGER.get_or_try_init(|| {
        std::fs::create_dir_all(log_dir).map_err(|err| {
            format!("failed to create log directory `{}`: {err}", log_dir.display())
        })?;

        let handle = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .append()
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        Ok::<_, String>((log_dir.to_path_buf(), handle))
    })?;

    Ok(())
}

/// Default log level for the current build mode.
pub fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
