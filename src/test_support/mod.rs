//! Test utilities and mocks for unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use mvp_build::test_support::MockRunner;
//!
//! let mut runner = MockRunner::new(ExitOutcome::Code(0));
//! // Pass `&mut runner` wherever a ToolchainRunner is expected...
//! assert_eq!(runner.calls().len(), 1);
//! ```

use anyhow::{bail, Result};

use crate::builder::compose::ComposedCommand;
use crate::builder::executor::{ExitOutcome, ToolchainRunner};

/// Toolchain runner that records commands instead of spawning them.
#[derive(Debug, Clone)]
pub struct MockRunner {
    outcome: ExitOutcome,
    spawn_error: Option<String>,
    calls: Vec<Vec<String>>,
}

impl MockRunner {
    /// Create a runner that reports the given outcome for every call.
    pub fn new(outcome: ExitOutcome) -> Self {
        MockRunner {
            outcome,
            spawn_error: None,
            calls: Vec::new(),
        }
    }

    /// Create a runner whose spawn always fails.
    pub fn failing_spawn(message: impl Into<String>) -> Self {
        MockRunner {
            outcome: ExitOutcome::Code(0),
            spawn_error: Some(message.into()),
            calls: Vec::new(),
        }
    }

    /// Commands run so far, as program + argument tokens.
    pub fn calls(&self) -> &[Vec<String>] {
        &self.calls
    }
}

impl ToolchainRunner for MockRunner {
    fn run(&mut self, cmd: ComposedCommand) -> Result<ExitOutcome> {
        self.calls.push(cmd.tokens());
        if let Some(ref message) = self.spawn_error {
            bail!("{}", message);
        }
        Ok(self.outcome)
    }
}
