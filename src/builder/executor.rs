//! Toolchain execution and build reporting.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::builder::compose::ComposedCommand;
use crate::core::profile::BuildProfile;
use crate::util::process::{find_executable, ProcessBuilder};
use crate::util::shell::{Shell, Status};

/// Timestamp format used in banners.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// How the toolchain process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Exited with a status code
    Code(i32),
    /// Killed by a signal; treated as an ordinary failure
    Signaled,
}

impl ExitOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Code(0))
    }

    /// Exit code to propagate. Signal termination maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExitOutcome::Code(code) => *code,
            ExitOutcome::Signaled => 1,
        }
    }
}

/// Runs a composed command to completion.
pub trait ToolchainRunner {
    fn run(&mut self, cmd: ComposedCommand) -> Result<ExitOutcome>;
}

/// Runs the toolchain as a child process with inherited stdio.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ToolchainRunner for SystemRunner {
    fn run(&mut self, cmd: ComposedCommand) -> Result<ExitOutcome> {
        if find_executable(cmd.program()).is_none() {
            tracing::warn!("compiler `{}` not found in PATH", cmd.program().display());
        }

        let process = ProcessBuilder::new(cmd.program()).args(cmd.args());
        tracing::debug!("running {}", process.display_command());
        let status = process.status()?;
        Ok(match status.code() {
            Some(code) => ExitOutcome::Code(code),
            None => ExitOutcome::Signaled,
        })
    }
}

/// Outcome of a single build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub succeeded: bool,
    pub started_at: DateTime<Local>,
    /// Only recorded on success
    pub finished_at: Option<DateTime<Local>>,
    pub exit_code: i32,
}

pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Run the command and print the start and end banners.
pub fn execute<W: Write>(
    profile: &BuildProfile,
    cmd: ComposedCommand,
    runner: &mut dyn ToolchainRunner,
    shell: &mut Shell<W>,
) -> Result<BuildResult> {
    let started_at = Local::now();
    let status = if profile.should_link {
        Status::Building
    } else {
        Status::Analyzing
    };
    shell.status(
        status,
        format!(
            "`{}` on {} with {} at {}",
            profile.output_name,
            profile.platform,
            profile.compiler.display(),
            format_timestamp(&started_at)
        ),
    );

    let outcome = runner.run(cmd)?;
    tracing::debug!("toolchain exited with {:?}", outcome);

    if !outcome.success() {
        shell.error(format!("build failed (exit code {})", outcome.exit_code()));
        return Ok(BuildResult {
            succeeded: false,
            started_at,
            finished_at: None,
            exit_code: outcome.exit_code(),
        });
    }

    let finished_at = Local::now();
    shell.status(
        Status::Finished,
        format!("`{}` at {}", profile.output_name, format_timestamp(&finished_at)),
    );

    Ok(BuildResult {
        succeeded: true,
        started_at,
        finished_at: Some(finished_at),
        exit_code: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::compose::compose;
    use crate::core::overrides::OverrideSet;
    use crate::core::platform::Platform;
    use crate::core::profile::{PlatformProfile, ProjectLayout};
    use crate::test_support::MockRunner;

    fn linux_profile() -> BuildProfile {
        BuildProfile::resolve(
            &ProjectLayout::default(),
            &PlatformProfile::for_platform(Platform::Linux),
        )
    }

    fn run_with(profile: &BuildProfile, outcome: ExitOutcome) -> (BuildResult, String, MockRunner) {
        let mut runner = MockRunner::new(outcome);
        let mut shell = Shell::from_writer(Vec::new());
        let result = execute(profile, compose(profile), &mut runner, &mut shell).unwrap();
        let out = String::from_utf8(shell.into_inner()).unwrap();
        (result, out, runner)
    }

    #[test]
    fn test_success_banner_has_later_timestamp() {
        let (result, out, runner) = run_with(&linux_profile(), ExitOutcome::Code(0));

        assert!(result.succeeded);
        assert_eq!(result.exit_code, 0);
        let finished_at = result.finished_at.unwrap();
        assert!(finished_at >= result.started_at);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Building `mvp` on Linux with clang++ at "));
        assert!(lines[0].ends_with(&format_timestamp(&result.started_at)));
        assert!(lines[1].contains("Finished `mvp` at "));
        assert!(lines[1].ends_with(&format_timestamp(&finished_at)));

        assert_eq!(runner.calls().len(), 1);
        assert_eq!(runner.calls()[0][0], "clang++");
    }

    #[test]
    fn test_failure_banner_has_no_timestamp() {
        let (result, out, _) = run_with(&linux_profile(), ExitOutcome::Code(1));

        assert!(!result.succeeded);
        assert_eq!(result.exit_code, 1);
        assert!(result.finished_at.is_none());

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("error build failed (exit code 1)"));
        assert!(!lines[1].contains(" at "));
        assert!(!out.contains("Finished"));
    }

    #[test]
    fn test_signal_is_failure() {
        let (result, out, _) = run_with(&linux_profile(), ExitOutcome::Signaled);

        assert!(!result.succeeded);
        assert_eq!(result.exit_code, 1);
        assert!(out.contains("build failed"));
    }

    #[test]
    fn test_analysis_banner() {
        let overrides = OverrideSet {
            analysis: true,
            ..Default::default()
        };
        let profile = overrides.apply(linux_profile());
        let (result, out, runner) = run_with(&profile, ExitOutcome::Code(0));

        assert!(result.succeeded);
        assert!(out.contains("Analyzing `mvp` on Linux"));
        assert!(runner.calls()[0].contains(&"--analyze".to_string()));
    }

    #[test]
    fn test_exit_outcome() {
        assert!(ExitOutcome::Code(0).success());
        assert!(!ExitOutcome::Code(2).success());
        assert_eq!(ExitOutcome::Code(2).exit_code(), 2);
        assert!(!ExitOutcome::Signaled.success());
    }
}
