//! CLI definitions using clap.
//!
//! Only short options exist. Repeating an option replaces its earlier value.

use clap::Parser;

use mvp_build::core::OverrideSet;

/// Build the mvp application with the host platform's default toolchain
#[derive(Parser, Debug)]
#[command(name = "mvp-build")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true, args_override_self = true)]
pub struct Cli {
    /// Run the static analyzer (HTML report) instead of linking
    #[arg(short = 'a')]
    pub analyze: bool,

    /// Compiler driver to use
    #[arg(short = 'c', value_name = "COMPILER", allow_hyphen_values = true)]
    pub compiler: Option<String>,

    /// Language standard, passed as -std=<STANDARD>
    #[arg(short = 's', value_name = "STANDARD", allow_hyphen_values = true)]
    pub standard: Option<String>,

    /// Standard library, passed as -stdlib=<STDLIB> (empty for toolchain default)
    #[arg(short = 'l', value_name = "STDLIB", allow_hyphen_values = true)]
    pub stdlib: Option<String>,
}

impl Cli {
    /// Collect the parsed options into an override set.
    pub fn overrides(&self) -> OverrideSet {
        OverrideSet {
            compiler: self.compiler.clone(),
            language_standard: self.standard.clone(),
            standard_library: self.stdlib.clone(),
            analysis: self.analyze,
        }
    }
}
