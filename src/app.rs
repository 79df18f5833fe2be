// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod generator;
pub mod models;
pub mod naming;
pub mod paths;
pub mod scanner;
pub mod tree;
pub mod watch;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use self::cli::Cli;
use self::config::{config_file_path, resolve_config};
use self::generator::generate;
use self::models::GeneratorConfig;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();
    init_logging(args.verbose);

    // 2. Resolve Configuration and run once; a failure here is fatal even in watch mode
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = reload_and_regenerate(&args, &current_dir)?;

    // 3. Keep regenerating on change, re-reading the config every time
    if args.watch {
        let scanner = Scanner::new(&config);
        let config_file = config_file_path(&args, &current_dir);
        watch::watch(
            scanner.root(),
            scanner.output_target(),
            config_file.as_deref(),
            Duration::from_millis(args.debounce_ms),
            || {
                let reloaded = reload_and_regenerate(&args, &current_dir)?;
                if Scanner::new(&reloaded).root() != scanner.root() {
                    log::warn!(
                        "rootDir changed to {}; restart to watch the new directory",
                        reloaded.root_dir.display()
                    );
                }
                Ok(())
            },
        )?;
    }

    Ok(())
}

/// Resolves the configuration afresh and runs once with it.
pub fn reload_and_regenerate(args: &Cli, cwd: &Path) -> Result<GeneratorConfig> {
    let config = resolve_config(args, cwd);
    regenerate(&config, args.stdout)?;
    Ok(config)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Scans, generates, and delivers the output for one run. Nothing is
/// written if generation fails.
pub fn regenerate(config: &GeneratorConfig, to_stdout: bool) -> Result<()> {
    let files = Scanner::new(config).scan();

    let output = generate(&files, config).context("Failed to generate asset constants")?;

    if to_stdout {
        print!("{}", output);
        return Ok(());
    }

    if write_output(&config.output_target, &output)? {
        log::info!(
            "Wrote {} ({} files scanned)",
            config.output_target.display(),
            files.len()
        );
    } else {
        log::debug!("{} is up to date", config.output_target.display());
    }
    Ok(())
}

/// Writes `content` to `target` unless it already holds exactly that.
/// Returns whether the file was written.
pub fn write_output(target: &Path, content: &str) -> Result<bool> {
    if let Ok(existing) = fs::read_to_string(target) {
        if existing == content {
            return Ok(false);
        }
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(target, content).with_context(|| format!("Failed to write {:?}", target))?;
    Ok(true)
}
