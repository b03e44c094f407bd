//! Logger initialization on top of `log4rs`.
//!
//! Log lines go to stderr and, when a log directory is provided, to a size-rolled
//! log file plus an error-only log file in that directory.

use crate::warn;
use appender::{AppenderSpec, CONSOLE_APPENDER, ERR_LOG_FILE_APPENDER, LOG_FILE_APPENDER};
use consts::{DEFAULT_LOGGER_ENV, DEFAULT_ROOT_LEVEL, ERR_LOG_FILE_NAME, LOG_FILE_NAME};
use log::LevelFilter;
use log4rs::config::{Config, Root};
use logger::LogSpecBuilder;
use thiserror::Error;

mod appender;
pub mod consts;
mod logger;

#[derive(Clone, Debug, Error)]
pub enum LogError {
    #[error("failed to build log appender {0}: {1}")]
    Appender(&'static str, String),

    #[error("invalid logger configuration: {0}")]
    Config(String),

    #[error("a logger is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Installs the global logger.
///
/// `filters` is a comma separated list of `level` and `target=level` items. It is
/// applied on top of whatever the `RUST_LOG` environment variable specifies.
pub fn init_logger(log_dir: Option<&str>, filters: &str) -> Result<(), LogError> {
    let spec = LogSpecBuilder::new().root_level(DEFAULT_ROOT_LEVEL).parse_env(DEFAULT_LOGGER_ENV).parse_expression(filters).build();

    let mut appenders = vec![AppenderSpec::console(CONSOLE_APPENDER, None)];
    if let Some(log_dir) = log_dir {
        appenders.push(AppenderSpec::roller(LOG_FILE_APPENDER, None, log_dir, LOG_FILE_NAME)?);
        appenders.push(AppenderSpec::roller(ERR_LOG_FILE_APPENDER, Some(LevelFilter::Warn), log_dir, ERR_LOG_FILE_NAME)?);
    }
    let names = appenders.iter().map(|x| x.name).collect::<Vec<_>>();

    let config = Config::builder()
        .appenders(appenders.iter_mut().filter_map(|x| x.appender()))
        .loggers(spec.loggers())
        .build(Root::builder().appenders(names).build(spec.root_level()))
        .map_err(|err| LogError::Config(err.to_string()))?;
    log4rs::init_config(config).map_err(|err| LogError::AlreadyInitialized(err.to_string()))?;

    for item in spec.rejected() {
        warn!("Ignoring invalid logging spec '{}'", item);
    }
    Ok(())
}
