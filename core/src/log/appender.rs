use super::{
    LogError,
    consts::{LOG_ARCHIVE_SUFFIX, LOG_FILE_BASE_ROLLS, LOG_FILE_MAX_ROLLS, LOG_FILE_MAX_SIZE, LOG_LINE_PATTERN, LOG_LINE_PATTERN_COLORED},
};
use log::LevelFilter;
use log4rs::{
    append::{
        Append,
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger},
        },
    },
    config::Appender,
    encode::pattern::PatternEncoder,
    filter::{Filter, threshold::ThresholdFilter},
};
use std::path::PathBuf;

pub(super) const CONSOLE_APPENDER: &str = "stderr";
pub(super) const LOG_FILE_APPENDER: &str = "log_file";
pub(super) const ERR_LOG_FILE_APPENDER: &str = "err_log_file";

pub(super) struct AppenderSpec {
    pub name: &'static str,
    level: Option<LevelFilter>,
    append: Option<Box<dyn Append>>,
}

impl AppenderSpec {
    /// The console appender writes to stderr. Stdout carries the selected transaction ids.
    pub fn console(name: &'static str, level: Option<LevelFilter>) -> Self {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_LINE_PATTERN_COLORED)))
            .build();
        Self::new(name, level, Box::new(console))
    }

    pub fn roller(name: &'static str, level: Option<LevelFilter>, log_dir: &str, file_name: &str) -> Result<Self, LogError> {
        let trigger = Box::new(SizeTrigger::new(LOG_FILE_MAX_SIZE));

        let file_path = PathBuf::from(log_dir).join(file_name);
        let roller_pattern = PathBuf::from(log_dir).join(format!("{}{}", file_name, LOG_ARCHIVE_SUFFIX));
        let roller_pattern = roller_pattern.to_str().ok_or_else(|| LogError::Appender(name, format!("non UTF-8 path {:?}", file_path)))?;
        let roller = FixedWindowRoller::builder()
            .base(LOG_FILE_BASE_ROLLS)
            .build(roller_pattern, LOG_FILE_MAX_ROLLS)
            .map_err(|err| LogError::Appender(name, err.to_string()))?;

        let compound_policy = Box::new(CompoundPolicy::new(trigger, Box::new(roller)));
        let file_appender = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_LINE_PATTERN)))
            .build(file_path, compound_policy)
            .map_err(|err| LogError::Appender(name, err.to_string()))?;

        Ok(Self::new(name, level, Box::new(file_appender)))
    }

    pub fn new(name: &'static str, level: Option<LevelFilter>, append: Box<dyn Append>) -> Self {
        Self { name, level, append: Some(append) }
    }

    /// Consumes the inner [`Append`]; the spec is spent afterwards and yields `None`.
    pub fn appender(&mut self) -> Option<Appender> {
        let append = self.append.take()?;
        Some(
            Appender::builder()
                .filters(self.level.map(|x| Box::new(ThresholdFilter::new(x)) as Box<dyn Filter>))
                .build(self.name, append),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::consts::{ERR_LOG_FILE_NAME, LOG_FILE_NAME};

    #[test]
    fn test_roller_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().to_str().unwrap();
        let mut spec = AppenderSpec::roller(LOG_FILE_APPENDER, None, log_dir, LOG_FILE_NAME).unwrap();
        assert!(spec.appender().is_some());
        assert!(spec.appender().is_none(), "an appender spec can only be consumed once");
        assert!(dir.path().join(LOG_FILE_NAME).exists());

        let mut err_spec = AppenderSpec::roller(ERR_LOG_FILE_APPENDER, Some(LevelFilter::Warn), log_dir, ERR_LOG_FILE_NAME).unwrap();
        assert!(err_spec.appender().is_some());
    }

    #[test]
    fn test_console_appender() {
        let mut spec = AppenderSpec::console(CONSOLE_APPENDER, None);
        assert_eq!(spec.name, CONSOLE_APPENDER);
        assert!(spec.appender().is_some());
    }
}
