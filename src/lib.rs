// src/lib.rs
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod logging;
pub mod reader;
pub mod tokens;
