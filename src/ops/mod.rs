//! High-level operations.

pub mod mvp_build;

pub use mvp_build::{build, plan, resolve_profile, BuildOptions};
