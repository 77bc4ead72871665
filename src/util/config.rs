//! Configuration file support.
//!
//! Two optional configuration files are read:
//! - Global: `~/.mvp-build/config.toml` - User-wide defaults
//! - Project: `mvp-build.toml` in the working directory
//!
//! Project config takes precedence over global config, and command-line
//! options take precedence over both.
//!
//! ```toml
//! [profile.linux]
//! compiler = "/opt/llvm/bin/clang++"
//! link-libraries = ["-lglfw3", "-lvulkan.1"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::platform::Platform;
use crate::util::errors::ConfigError;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "mvp-build.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-platform profile overrides
    pub profile: ProfileTables,
}

/// One profile table per supported platform.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileTables {
    pub linux: ProfileConfig,
    pub windows: ProfileConfig,
}

/// Replacement values for a platform profile.
///
/// Every field is optional; set lists replace the built-in list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProfileConfig {
    /// Compiler driver path or name
    pub compiler: Option<PathBuf>,

    /// Platform compiler flags
    pub compiler_flags: Option<Vec<String>>,

    /// Library search paths
    pub library_paths: Option<Vec<PathBuf>>,

    /// Link-library tokens (e.g. `-lvulkan`)
    pub link_libraries: Option<Vec<String>>,
}

impl ProfileConfig {
    /// Merge another table into this one (other takes precedence).
    pub fn merge(&mut self, other: ProfileConfig) {
        if other.compiler.is_some() {
            self.compiler = other.compiler;
        }
        if other.compiler_flags.is_some() {
            self.compiler_flags = other.compiler_flags;
        }
        if other.library_paths.is_some() {
            self.library_paths = other.library_paths;
        }
        if other.link_libraries.is_some() {
            self.link_libraries = other.link_libraries;
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("{}: {}", e, error_source(&e));
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        self.profile.linux.merge(other.profile.linux);
        self.profile.windows.merge(other.profile.windows);
    }

    /// The profile table for a platform.
    pub fn profile_for(&self, platform: Platform) -> &ProfileConfig {
        match platform {
            Platform::Linux => &self.profile.linux,
            Platform::Windows => &self.profile.windows,
        }
    }
}

fn error_source(e: &ConfigError) -> String {
    std::error::Error::source(e)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (`mvp-build.toml`)
/// 2. Global config (`~/.mvp-build/config.toml`)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            tracing::debug!("loading global config from {}", global_path.display());
            config.merge(Config::load_or_default(global_path));
        }
    }

    if project_path.exists() {
        tracing::debug!("loading project config from {}", project_path.display());
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global config path (`~/.mvp-build/config.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".mvp-build").join("config.toml"))
}

/// Get the project config path for a directory.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_FILE)
}
