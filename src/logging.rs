// src/logging.rs
//! Terminal logger setup. Log records go to stderr so stdout carries only the result.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs the global stderr logger at `Warn` level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    let _ = TermLogger::init(
        LevelFilter::Warn,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
