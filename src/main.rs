//! Blocklist sync CLI
//!
//! Entry point for the `blocklist` command-line tool.

use blocklist_sync::{
    run_merge, run_validate, telemetry, CliOverrides, ExitCode, MergeRequest, SyncConfig, SyncError,
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "blocklist")]
#[command(about = "Merge and validate a line-oriented blocklist", version)]
struct Cli {
    /// Path to config file (default: .blocklist.toml if present)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge an upstream blocklist into the local one
    Merge {
        /// Path to source blocklist file
        #[arg(long)]
        source: PathBuf,

        /// Target local blocklist file (default from config: blacklist.txt)
        #[arg(long)]
        target: Option<PathBuf>,

        /// Do not write changes, just report
        #[arg(long)]
        dry_run: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check a blocklist for malformed and duplicate entries
    Validate {
        /// File to validate (default: the configured target)
        path: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    telemetry::init();
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Merge {
            source,
            target,
            dry_run,
            json,
        } => run_merge_cmd(cli.config, source, target, dry_run, json),
        Commands::Validate { path, json } => run_validate_cmd(cli.config, path, json),
    };

    process::exit(code.as_i32());
}

fn load_config(config_path: Option<PathBuf>, target: Option<PathBuf>) -> Result<SyncConfig, SyncError> {
    Ok(SyncConfig::load(config_path.as_deref(), CliOverrides { target })?)
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::Success
        }
        Err(e) => report_error(&SyncError::from(e)),
    }
}

fn report_error(err: &SyncError) -> ExitCode {
    eprintln!("ERROR: {}", err);
    err.exit_code()
}

fn run_merge_cmd(
    config_path: Option<PathBuf>,
    source: PathBuf,
    target: Option<PathBuf>,
    dry_run: bool,
    json: bool,
) -> ExitCode {
    let config = match load_config(config_path, target) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };

    let request = MergeRequest { source, dry_run };
    let report = match run_merge(&request, &config, Utc::now()) {
        Ok(r) => r,
        Err(e) => return report_error(&e),
    };

    if json {
        return print_json(&report);
    }
    println!("{}", report.to_human());
    ExitCode::Success
}

fn run_validate_cmd(config_path: Option<PathBuf>, path: Option<PathBuf>, json: bool) -> ExitCode {
    let path = match path {
        Some(p) => p,
        None => match load_config(config_path, None) {
            Ok(c) => c.target,
            Err(e) => return report_error(&e),
        },
    };

    let report = match run_validate(&path) {
        Ok(r) => r,
        Err(e) => return report_error(&e),
    };

    let code = ExitCode::from(&report);

    if json {
        let printed = print_json(&report);
        return if printed.is_success() { code } else { printed };
    }
    println!("{}", report.to_human());
    code
}
