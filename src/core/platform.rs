//! Host platform detection.

use std::fmt;
use std::str::FromStr;

use crate::util::errors::ConfigError;

/// A host operating system with a known build profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Windows,
}

impl Platform {
    /// Detect the platform this binary was compiled for.
    pub fn detect() -> Result<Self, ConfigError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    pub fn from_os(os: &str) -> Result<Self, ConfigError> {
        match os {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            other => Err(ConfigError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Suffix appended to the executable name.
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            Platform::Linux => "",
            Platform::Windows => ".exe",
        }
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_os(&s.to_ascii_lowercase())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "Linux"),
            Platform::Windows => write!(f, "Windows"),
        }
    }
}
