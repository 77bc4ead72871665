//! Command composition and toolchain execution.

pub mod compose;
pub mod executor;

pub use compose::{compose, ComposedCommand};
pub use executor::{BuildResult, ExitOutcome, SystemRunner, ToolchainRunner};
