use clap::{Arg, ArgAction, Command, arg, parser::ValueSource::DefaultValue};
use serde::Deserialize;
use std::{ffi::OsString, fs};

const DEFAULT_INPUT: &str = "mempool.csv";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Args {
    // NOTE: property names match config file fields
    pub input: String,
    pub output: Option<String>,
    pub strict: bool,
    pub logdir: Option<String>,
    #[serde(rename = "loglevel")]
    pub log_level: String,
}

impl Default for Args {
    fn default() -> Self {
        Self { input: DEFAULT_INPUT.to_owned(), output: None, strict: false, logdir: None, log_level: DEFAULT_LOG_LEVEL.to_owned() }
    }
}

pub fn cli() -> Command {
    Command::new("blockbuilder")
        .about(format!("{} v{}", env!("CARGO_PKG_DESCRIPTION"), env!("CARGO_PKG_VERSION")))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(arg!(-C --configfile <CONFIG_FILE> "Path of config file."))
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .default_value(DEFAULT_INPUT)
                .help("Mempool snapshot to select from, one `id,fee,weight,parent;parent;...` record per line."),
        )
        .arg(arg!(-o --output <FILE> "Write the selected transaction ids to FILE instead of stdout."))
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject unparseable fee and weight values instead of reading them as 0."),
        )
        .arg(arg!(--logdir <LOG_DIR> "Directory to log output."))
        .arg(
            Arg::new("log_level")
                .short('d')
                .long("loglevel")
                .env("BLOCKBUILDER_LOG_LEVEL")
                .value_name("LEVEL")
                .default_value(DEFAULT_LOG_LEVEL)
                .help("Logging level for all subsystems {off, error, warn, info, debug, trace}\n-- You may also specify <subsystem>=<level>,<subsystem2>=<level>,... to set the log level for individual subsystems."),
        )
}

pub fn parse_args() -> Args {
    match Args::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => err.exit(),
    }
}

impl Args {
    /// Explicit command line values take precedence over the config file, which
    /// takes precedence over the defaults.
    pub fn parse<I, T>(itr: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let m: clap::ArgMatches = cli().try_get_matches_from(itr)?;
        let mut defaults: Args = Default::default();

        if let Some(config_file) = m.get_one::<String>("configfile") {
            let config_str = fs::read_to_string(config_file)?;
            defaults = toml::from_str(&config_str).map_err(|toml_error| {
                clap::Error::raw(
                    clap::error::ErrorKind::ValueValidation,
                    format!("failed parsing config file, reason: {}", toml_error.message()),
                )
            })?;
        }

        Ok(Args {
            input: arg_match_unwrap_or::<String>(&m, "input", defaults.input),
            output: m.get_one::<String>("output").cloned().or(defaults.output),
            strict: arg_match_unwrap_or::<bool>(&m, "strict", defaults.strict),
            logdir: m.get_one::<String>("logdir").cloned().or(defaults.logdir),
            log_level: arg_match_unwrap_or::<String>(&m, "log_level", defaults.log_level),
        })
    }
}

fn arg_match_unwrap_or<T: Clone + Send + Sync + 'static>(m: &clap::ArgMatches, arg_id: &str, default: T) -> T {
    m.get_one::<T>(arg_id).cloned().filter(|_| m.value_source(arg_id) != Some(DefaultValue)).unwrap_or(default)
}
