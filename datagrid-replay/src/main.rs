use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use datagrid_replay::{Fixture, ReplayError, paths};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

#[derive(Parser)]
#[command(name = "grid-replay")]
#[command(about = "Replay scripted data grid interactions and print the resulting state")]
#[command(version)]
struct Cli {
    /// Fixture with columns, rows and events (JSON)
    fixture: PathBuf,

    /// Write logs here instead of the cache directory
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Print the report on one line
    #[arg(long)]
    compact: bool,
}

fn init_logging(cli: &Cli) -> Result<(), ReplayError> {
    let path = match &cli.log_file {
        Some(path) => path.clone(),
        None => {
            let Some(dir) = paths::log_dir() else {
                return Ok(());
            };
            fs::create_dir_all(&dir)?;
            paths::rotate_logs(&dir, paths::KEEP_LOGS);
            paths::log_file(&dir)
        }
    };
    let file = File::create(path)?;
    WriteLogger::init(cli.log_level, Config::default(), file)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    init_logging(cli)?;
    log::info!("[host] replaying {}", cli.fixture.display());

    let fixture = Fixture::load(&cli.fixture)?;
    let report = datagrid_replay::run(&fixture)?;

    let json = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", json);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[host] {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
