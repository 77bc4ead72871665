//! mvp-build CLI - builds or analyzes the mvp application

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use mvp_build::builder::SystemRunner;
use mvp_build::core::Platform;
use mvp_build::ops::{build, BuildOptions};
use mvp_build::util::config::{global_config_path, load_config, project_config_path};
use mvp_build::util::shell::{ColorChoice, Shell};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    // Usage errors exit here, before anything is resolved
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("MVP_BUILD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("mvp_build=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let platform = Platform::detect()?;

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let config = load_config(global_config_path().as_deref(), &project_config_path(&cwd));

    let opts = BuildOptions::new(platform)
        .with_config(config)
        .with_overrides(cli.overrides());

    let mut shell = Shell::stderr(ColorChoice::Auto);
    let result = build(&opts, &mut SystemRunner, &mut shell)?;

    Ok(result.exit_code)
}
