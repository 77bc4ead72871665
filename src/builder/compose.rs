//! Command composition.
//!
//! Turns a [`BuildProfile`] into the single ordered argument list handed to
//! the compiler driver. Order:
//!
//! 1. compiler
//! 2. `-std=` flag
//! 3. `-stdlib=` flag (only when set)
//! 4. analyzer flags
//! 5. `-Wall -Werror`
//! 6. platform compiler flags
//! 7. sources
//! 8. `-I <dir>` per include group, in [`IncludeGroup::ALL`] order
//! 9. when linking: `-L <dir>` per library path, link libraries, `-o <name>`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::profile::{BuildProfile, IncludeGroup};

/// Warnings enabled on every build.
pub const COMMON_FLAGS: [&str; 2] = ["-Wall", "-Werror"];

pub const INCLUDE_FLAG: &str = "-I";
pub const LIBRARY_PATH_FLAG: &str = "-L";
pub const OUTPUT_FLAG: &str = "-o";

/// A fully composed toolchain invocation.
///
/// Arguments are kept as `OsString` so paths reach the toolchain unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ComposedCommand {
    fn new(program: impl Into<PathBuf>) -> Self {
        ComposedCommand {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Push a token, skipping empty ones.
    fn push_arg(&mut self, arg: impl Into<OsString>) {
        let arg = arg.into();
        if !arg.is_empty() {
            self.args.push(arg);
        }
    }

    fn push_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        for arg in args {
            self.push_arg(arg);
        }
    }

    /// Push a flag and its value as two tokens.
    fn push_flag_value(&mut self, flag: &str, value: &Path) {
        if !value.as_os_str().is_empty() {
            self.args.push(OsString::from(flag));
            self.args.push(value.as_os_str().to_os_string());
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program followed by all arguments, lossily converted for display.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.args.len() + 1);
        tokens.push(self.program.display().to_string());
        tokens.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        tokens
    }

    /// Space-joined command line, for logs.
    pub fn display(&self) -> String {
        self.tokens().join(" ")
    }
}

/// Compose the toolchain command for a resolved profile.
pub fn compose(profile: &BuildProfile) -> ComposedCommand {
    let mut cmd = ComposedCommand::new(&profile.compiler);

    cmd.push_arg(profile.language_standard_flag.as_str());
    cmd.push_arg(profile.standard_library_flag.as_str());
    cmd.push_args(profile.analyzer_flags.iter().map(String::as_str));
    cmd.push_args(COMMON_FLAGS);
    cmd.push_args(profile.compiler_flags.iter().map(String::as_str));
    cmd.push_args(profile.source_files.iter().map(|s| s.as_os_str()));

    // Group order comes from IncludeGroup, not from declaration order
    for group in IncludeGroup::ALL {
        for include in profile.include_paths.iter().filter(|i| i.group == group) {
            cmd.push_flag_value(INCLUDE_FLAG, &include.path);
        }
    }

    if profile.should_link {
        for dir in &profile.library_paths {
            cmd.push_flag_value(LIBRARY_PATH_FLAG, dir);
        }
        cmd.push_args(profile.link_libraries.iter().map(String::as_str));
        cmd.push_flag_value(OUTPUT_FLAG, Path::new(&profile.output_name));
    }

    tracing::debug!("composed command: {}", cmd.display());
    cmd
}
