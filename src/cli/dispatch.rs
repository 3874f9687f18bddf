// src/cli/dispatch.rs
use colored::Colorize;
use log::debug;

use super::args::Cli;
use crate::config::CountConfig;
use crate::error::Result;
use crate::exit::CountExit;
use crate::reader;
use crate::tokens;

/// Reads the input file and counts its tokens.
///
/// # Errors
/// Propagates file and tokenizer failures unchanged.
pub fn execute(cli: &Cli, config: &CountConfig) -> Result<usize> {
    debug!("counting {} with model {}", cli.input_fp.display(), config.model);
    let content = reader::read_file(&cli.input_fp)?;
    tokens::process_tokens(&content, config)
}

/// Runs one invocation end to end and returns the process status.
#[must_use]
pub fn run(cli: &Cli, config: &CountConfig) -> CountExit {
    match execute(cli, config) {
        Ok(count) => {
            println!("The number of tokens in the input file is: {count}.");
            CountExit::Success
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            CountExit::from(&e)
        }
    }
}
