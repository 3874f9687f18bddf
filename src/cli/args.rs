// src/cli/args.rs
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::exit::CountExit;

#[derive(Parser, Debug)]
#[command(
    name = "count-tokens",
    version,
    about = "Count the number of tokens in a text file."
)]
pub struct Cli {
    /// The input file path
    #[arg(value_name = "INPUT_FP")]
    pub input_fp: PathBuf,
}

impl Cli {
    /// Parses `args` (program name first), printing clap's usage or help text on failure.
    ///
    /// # Errors
    /// Returns [`CountExit::Usage`] for a malformed invocation and
    /// [`CountExit::Success`] when `--help` or `--version` was handled.
    pub fn parse_args<I, T>(args: I) -> Result<Self, CountExit>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| {
            let _ = e.print();
            if e.use_stderr() {
                CountExit::Usage
            } else {
                CountExit::Success
            }
        })
    }
}
