//! mvp-build - one-shot build orchestrator for the mvp application
//!
//! This crate resolves a per-platform build profile, merges command-line
//! overrides into it, composes a single compiler invocation and runs it.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for unit tests.
#[cfg(test)]
pub mod test_support;

pub use builder::{BuildResult, ComposedCommand};
pub use core::{BuildProfile, OverrideSet, Platform, PlatformProfile};
pub use util::config::Config;
