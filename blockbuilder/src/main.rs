mod args;
mod error;

use args::{Args, parse_args};
use blockbuilder_core::{error, info, warn};
use blockbuilder_mining::{BlockTemplate, MempoolConfig, Policy, load_mempool, select_block};
use error::BlockBuilderError;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    process::ExitCode,
};

pub fn main() -> ExitCode {
    let args = parse_args();

    if let Err(err) = blockbuilder_core::log::init_logger(args.logdir.as_deref(), &args.log_level) {
        eprintln!("{}", BlockBuilderError::from(err));
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), BlockBuilderError> {
    // Nothing is written unless the whole template was built
    let template = build_block_template(args)?;
    match args.output.as_deref() {
        Some(path) => {
            let file = File::create(path).map_err(|source| BlockBuilderError::Output { path: path.to_owned(), source })?;
            write_block(&template, BufWriter::new(file))?;
        }
        None => write_block(&template, BufWriter::new(io::stdout().lock()))?,
    }
    Ok(())
}

fn build_block_template(args: &Args) -> Result<BlockTemplate, BlockBuilderError> {
    let config = MempoolConfig::default().with_strict_numeric_fields(args.strict);
    let store = load_mempool(&args.input, &config)?;
    info!("Loaded {} candidate transactions from {}", store.len(), args.input);

    let policy = Policy::default();
    let template = select_block(policy, store);
    // Duplicate ids in the snapshot are admitted as often as they appear
    if let Err(err) = template.verify(&policy) {
        warn!("Unexpected block template: {}", err);
    }
    info!(
        "Selected {} transactions with total fees {} and total weight {} (max block weight {})",
        template.len(),
        template.total_fees(),
        template.total_weight(),
        policy.max_block_weight()
    );
    Ok(template)
}

/// Writes the selected transaction ids, one per line, in admission order
fn write_block(template: &BlockTemplate, mut writer: impl Write) -> io::Result<()> {
    for id in template.ids() {
        writeln!(writer, "{}", id)?;
    }
    writer.flush()
}
