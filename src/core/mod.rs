//! Build configuration: platform detection, profiles and overrides.

pub mod overrides;
pub mod platform;
pub mod profile;

pub use overrides::OverrideSet;
pub use platform::Platform;
pub use profile::{BuildProfile, IncludeGroup, IncludePath, PlatformProfile, ProjectLayout};
