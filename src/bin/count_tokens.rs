// src/bin/count_tokens.rs
use count_tokens_core::cli::{dispatch, Cli};
use count_tokens_core::config::CountConfig;
use count_tokens_core::exit::CountExit;
use count_tokens_core::logging;

fn main() -> CountExit {
    logging::init();
    match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => dispatch::run(&cli, &CountConfig::default()),
        Err(exit) => exit,
    }
}
