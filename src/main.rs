mod cli;
mod converter;
mod error;
mod output;
mod paths;
mod prompt;
mod runner;
mod select;

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::converter::ExternalTool;
use crate::error::ConvertError;
use crate::output::{Format, Reporter};
use crate::prompt::Prompter;

fn main() {
    if let Err(err) = real_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), ConvertError> {
    let cli = Cli::parse();
    cli.validate().map_err(ConvertError::InvalidArg)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();

    let format = cli.format();
    // Keep stdout machine-readable in json mode.
    let prompt_out: Box<dyn Write> = match format {
        Format::Text => Box::new(io::stdout()),
        Format::Json => Box::new(io::stderr()),
    };
    let prompter = Prompter::new(io::stdin().lock(), prompt_out);

    let mut converter = ExternalTool::new(cli.tool.as_str());
    tracing::debug!(tool = converter.program(), output = %cli.output, "starting");
    let mut reporter = Reporter::new(format, io::stdout(), io::stderr());

    runner::run(prompter, &mut converter, &mut reporter)
}
