// src/cli/mod.rs
pub mod args;
pub mod dispatch;

pub use self::args::Cli;
