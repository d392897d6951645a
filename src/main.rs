use caltrack_core::{DocumentStore, Tracker, TrackerStorage};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod screen;

use commands::{
    ConfigCommand, LimitCommand, ListCommand, MealCommand, ResetCommand, StatusCommand,
    WorkoutCommand,
};
use config::Config;
use screen::Screen;

#[derive(Parser)]
#[command(name = "caltrack")]
#[command(version)]
#[command(about = "Track calories eaten and burned against a daily limit", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's totals
    Status(StatusCommand),

    /// Log and remove meals
    Meal(MealCommand),

    /// Log and remove workouts
    Workout(WorkoutCommand),

    /// Show every logged meal and workout followed by the totals
    List,

    /// Manage the daily calorie limit
    Limit(LimitCommand),

    /// Clear all meals, workouts and the running total (keeps the limit)
    Reset,

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caltrack=warn,caltrack_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for config init
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Use --help to see available commands");
            return Ok(());
        }
    };

    match command {
        Commands::Config(cmd) => cmd.run(&config, cli_config_path)?,
        Commands::Status(cmd) => cmd.run(&open_tracker(&config)?)?,
        Commands::Meal(cmd) => cmd.run(&mut open_tracker(&config)?)?,
        Commands::Workout(cmd) => cmd.run(&mut open_tracker(&config)?)?,
        Commands::List => ListCommand.run(&mut open_tracker(&config)?)?,
        Commands::Limit(cmd) => cmd.run(&mut open_tracker(&config)?)?,
        Commands::Reset => ResetCommand.run(&mut open_tracker(&config)?)?,
    }

    Ok(())
}

/// Opens the on-disk store and restores the tracker from it.
fn open_tracker(
    config: &Config,
) -> Result<Tracker<DocumentStore, Screen>, Box<dyn std::error::Error>> {
    tracing::debug!("Data directory: {}", config.data_dir.value.display());

    let store = DocumentStore::open(config.data_dir.value.clone())?;
    let tracker = Tracker::load(
        TrackerStorage::new(store),
        Screen::new(),
        config.default_limit.value,
    )?;
    Ok(tracker)
}
