//! Command-line overrides applied on top of a resolved profile.

use std::path::PathBuf;

use super::profile::BuildProfile;

/// Flags passed to clang when running the static analyzer.
pub const ANALYZER_FLAGS: [&str; 3] = ["--analyze", "-Xanalyzer", "-analyzer-output=html"];

/// Sparse set of user overrides. Unset fields keep the profile default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    /// Compiler driver (`-c`)
    pub compiler: Option<String>,
    /// Language standard tag, e.g. `c++17` (`-s`)
    pub language_standard: Option<String>,
    /// Standard library variant, e.g. `libc++` (`-l`)
    pub standard_library: Option<String>,
    /// Run the static analyzer instead of linking (`-a`)
    pub analysis: bool,
}

impl OverrideSet {
    /// Check if any override is set.
    pub fn is_empty(&self) -> bool {
        self.compiler.is_none()
            && self.language_standard.is_none()
            && self.standard_library.is_none()
            && !self.analysis
    }

    /// Merge these overrides into a profile, producing a new profile.
    pub fn apply(&self, mut profile: BuildProfile) -> BuildProfile {
        if let Some(ref compiler) = self.compiler {
            if compiler.is_empty() {
                tracing::warn!("ignoring empty compiler override");
            } else {
                profile.compiler = PathBuf::from(compiler);
            }
        }

        if let Some(ref std) = self.language_standard {
            if std.is_empty() {
                tracing::warn!("ignoring empty language standard override");
            } else {
                profile.language_standard_flag = format!("-std={}", std);
            }
        }

        // An empty value means "use the toolchain's default library"
        if let Some(ref stdlib) = self.standard_library {
            profile.standard_library_flag = if stdlib.is_empty() {
                String::new()
            } else {
                format!("-stdlib={}", stdlib)
            };
        }

        if self.analysis {
            profile.should_link = false;
            profile.analyzer_flags = ANALYZER_FLAGS.iter().map(|s| s.to_string()).collect();
        }

        profile
    }
}
