//! Logging for the portfolio CLI.
//!
//! Dual output: colored stderr plus a plain-text log file, initialized once.

use crate::error::PortfolioError;

use common::ErrorLocation;

use std::fs::File;
use std::io::stderr;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

static INIT_LOGGER_ONCE: Once = Once::new();
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_NAME: &str = "portfolio.log";

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Level used for a run: `--verbose` raises it to trace.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Trace
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// `{data_local_dir}/portfolio/logs`, or `./logs` when the platform has none.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("portfolio").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Install the terminal and file loggers for this process.
///
/// Only the first call does anything; later calls warn and return `Ok`. If the
/// log file cannot be opened, logging continues on stderr alone.
///
/// # Errors
///
/// Returns [`PortfolioError::Portfolio`] if another logger is already installed.
pub fn initialize(log_dir: &Path, level: LevelFilter) -> Result<(), PortfolioError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("Logger already initialized, keeping existing configuration");
        return Ok(());
    }

    let mut outcome = Ok(());
    INIT_LOGGER_ONCE.call_once(|| {
        outcome = install(log_dir, level);
    });
    outcome
}

fn install(log_dir: &Path, level: LevelFilter) -> Result<(), PortfolioError> {
    let (dispatch, file_error) = build_dispatch(log_dir, level);

    dispatch.apply().map_err(|e| PortfolioError::Portfolio {
        message: format!("Cannot install logger: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match file_error {
        Some(e) => warn!("{e}; logging to stderr only"),
        None => info!(
            "Logging at {level} to {}",
            log_dir.join(LOG_FILE_NAME).display()
        ),
    }
    Ok(())
}

/// Terminal sink plus the file sink when the log file can be opened.
///
/// The returned error explains why the file sink was left out.
pub(crate) fn build_dispatch(
    log_dir: &Path,
    level: LevelFilter,
) -> (Dispatch, Option<PortfolioError>) {
    let dispatch = Dispatch::new().level(level).chain(terminal_sink());

    match open_log_file(log_dir) {
        Ok(file) => (dispatch.chain(file_sink().chain(file)), None),
        Err(e) => (dispatch, Some(e)),
    }
}

#[track_caller]
fn open_log_file(log_dir: &Path) -> Result<File, PortfolioError> {
    std::fs::create_dir_all(log_dir).map_err(|e| PortfolioError::Portfolio {
        message: format!("Cannot create log directory {}: {e}", log_dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    fern::log_file(log_dir.join(LOG_FILE_NAME)).map_err(|e| PortfolioError::Portfolio {
        message: format!("Cannot open {LOG_FILE_NAME}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Colored, short lines on stderr; stdout is reserved for `render` output.
fn terminal_sink() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Magenta)
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {:<5} {message}",
                format_rfc3339(SystemTime::now()),
                colors.color(record.level()),
            ))
        })
        .chain(stderr())
}

/// Plain lines with the emitting module, for the log file.
fn file_sink() -> Dispatch {
    Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{} {:<5} {}: {message}",
            format_rfc3339(SystemTime::now()),
            record.level(),
            record.target(),
        ))
    })
}
