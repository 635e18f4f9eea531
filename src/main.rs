//! tripcheck CLI: directory integrity auditor.
//!
//! Exit status: 0 on success or when only usage help is printed, 1 when the
//! requested action fails (or `--tripwire` sees a change), 2 on invalid
//! arguments.

use clap::{ArgGroup, CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tripcheck::cli::{Action, RunOptions};
use tripcheck::core::config::AuditConfig;

#[derive(Parser, Debug)]
#[command(
    name = "tripcheck",
    version,
    about = "Directory integrity auditor: SHA-256 snapshots, change detection, audit log"
)]
#[command(group(ArgGroup::new("action").args(["scan", "verify", "update"])))]
struct Cli {
    /// Directory to scan and store hashes
    #[arg(long, value_name = "DIR")]
    scan: Option<PathBuf>,

    /// Directory to verify against the hash database
    #[arg(long, value_name = "DIR")]
    verify: Option<PathBuf>,

    /// Directory to rescan and update the hash database
    #[arg(long, value_name = "DIR")]
    update: Option<PathBuf>,

    /// Hash database location [default: ./hash_db.json]
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Audit log location [default: ./log.txt]
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// TOML file setting store_path and/or log_path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Exit non-zero when verify finds any change (for CI/cron)
    #[arg(long)]
    tripwire: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn action(&self) -> Option<Action> {
        if let Some(dir) = &self.scan {
            Some(Action::Scan(dir.clone()))
        } else if let Some(dir) = &self.verify {
            Some(Action::Verify(dir.clone()))
        } else {
            self.update.as_ref().map(|dir| Action::Update(dir.clone()))
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.tripwire && cli.verify.is_none() {
        Cli::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "--tripwire requires --verify <DIR>",
            )
            .exit();
    }

    let Some(action) = cli.action() else {
        let _ = Cli::command().print_help();
        println!();
        return;
    };

    init_logging(cli.verbose);

    let result = AuditConfig::resolve(cli.config.as_deref(), cli.store, cli.log).and_then(|config| {
        let opts = RunOptions {
            config,
            tripwire: cli.tripwire,
        };
        tripcheck::cli::dispatch(action, &opts)
    });

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
