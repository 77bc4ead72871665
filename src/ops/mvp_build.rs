//! Implementation of a full build run.
//!
//! Stages run strictly in order: profile resolution, override merge,
//! composition, execution. Everything before execution is pure.

use std::io::Write;

use anyhow::Result;

use crate::builder::compose::{compose, ComposedCommand};
use crate::builder::executor::{execute, BuildResult, ToolchainRunner};
use crate::core::overrides::OverrideSet;
use crate::core::platform::Platform;
use crate::core::profile::{BuildProfile, PlatformProfile, ProjectLayout};
use crate::util::config::Config;
use crate::util::shell::Shell;

/// Options for a build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Host platform, detected once at startup
    pub platform: Platform,

    /// Sources and include directories
    pub layout: ProjectLayout,

    /// Profile replacements from config files
    pub config: Config,

    /// Command-line overrides
    pub overrides: OverrideSet,
}

impl BuildOptions {
    /// Options with the built-in layout and no config.
    pub fn new(platform: Platform) -> Self {
        BuildOptions {
            platform,
            layout: ProjectLayout::default(),
            config: Config::default(),
            overrides: OverrideSet::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_overrides(mut self, overrides: OverrideSet) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Resolve the final build profile.
pub fn resolve_profile(opts: &BuildOptions) -> BuildProfile {
    let platform_profile = PlatformProfile::for_platform(opts.platform)
        .with_config(opts.config.profile_for(opts.platform));
    tracing::debug!("platform profile: {:?}", platform_profile);

    let profile = BuildProfile::resolve(&opts.layout, &platform_profile);
    if !opts.overrides.is_empty() {
        tracing::debug!("applying overrides: {:?}", opts.overrides);
    }
    opts.overrides.apply(profile)
}

/// Resolve and compose without running anything.
pub fn plan(opts: &BuildOptions) -> (BuildProfile, ComposedCommand) {
    let profile = resolve_profile(opts);
    let cmd = compose(&profile);
    (profile, cmd)
}

/// Run the build once and report the result.
pub fn build<W: Write>(
    opts: &BuildOptions,
    runner: &mut dyn ToolchainRunner,
    shell: &mut Shell<W>,
) -> Result<BuildResult> {
    let (profile, cmd) = plan(opts);
    execute(&profile, cmd, runner, shell)
}
