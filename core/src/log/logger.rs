use super::consts::DEFAULT_ROOT_LEVEL;
use log::LevelFilter;
use log4rs::config::Logger;
use std::env;

/// Log levels resolved from a filter expression such as `info,blockbuilder_mining=trace`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct LogSpec {
    root_level: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
    rejected: Vec<String>,
}

impl LogSpec {
    pub fn root_level(&self) -> LevelFilter {
        self.root_level
    }

    pub fn target_level(&self, target: &str) -> Option<LevelFilter> {
        self.targets.iter().find(|(name, _)| name == target).map(|(_, level)| *level)
    }

    /// Items of the expression that could not be parsed
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    pub fn loggers(&self) -> impl Iterator<Item = Logger> + '_ {
        self.targets.iter().map(|(name, level)| Logger::builder().build(name.clone(), *level))
    }
}

#[derive(Default)]
pub(super) struct LogSpecBuilder {
    root_level: Option<LevelFilter>,
    targets: Vec<(String, LevelFilter)>,
    rejected: Vec<String>,
}

impl LogSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_level(&mut self, level: LevelFilter) -> &mut Self {
        self.root_level = Some(level);
        self
    }

    pub fn parse_env(&mut self, var: &str) -> &mut Self {
        match env::var(var) {
            Ok(expression) => self.parse_expression(&expression),
            Err(_) => self,
        }
    }

    /// Later items override earlier ones, so an expression parsed after the
    /// environment takes precedence over it.
    pub fn parse_expression(&mut self, expression: &str) -> &mut Self {
        for item in expression.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            match item.split_once('=') {
                None => match item.parse::<LevelFilter>() {
                    Ok(level) => {
                        self.root_level = Some(level);
                    }
                    // A bare target name enables everything for that target
                    Err(_) => self.target(item, LevelFilter::max()),
                },
                Some((target, level)) => match (target.trim(), level.trim().parse::<LevelFilter>()) {
                    ("", _) => self.rejected.push(item.to_owned()),
                    (target, _) if level.trim().is_empty() => self.target(target, LevelFilter::max()),
                    (target, Ok(level)) => self.target(target, level),
                    (_, Err(_)) => self.rejected.push(item.to_owned()),
                },
            }
        }
        self
    }

    fn target(&mut self, name: &str, level: LevelFilter) {
        match self.targets.iter_mut().find(|(target, _)| target == name) {
            Some(entry) => entry.1 = level,
            None => self.targets.push((name.to_owned(), level)),
        }
    }

    pub fn build(&mut self) -> LogSpec {
        LogSpec {
            root_level: self.root_level.take().unwrap_or(DEFAULT_ROOT_LEVEL),
            targets: std::mem::take(&mut self.targets),
            rejected: std::mem::take(&mut self.rejected),
        }
    }
}
