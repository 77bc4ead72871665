//! Shared utilities

pub mod config;
pub mod errors;
pub mod process;
pub mod shell;

pub use config::Config;
pub use errors::ConfigError;
pub use shell::Shell;
