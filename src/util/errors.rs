//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors detected before the toolchain is spawned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported host platform `{0}` (supported: linux, windows)")]
    UnsupportedPlatform(String),

    #[error("failed to read config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
