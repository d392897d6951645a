use caltrack_core::{KeyValueStore, Tracker};
use clap::Args;
use std::io;

use super::OutputFormat;
use crate::screen::Screen;

/// Show today's totals
#[derive(Args)]
pub struct StatusCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl StatusCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        tracker: &Tracker<S, Screen>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&tracker.summary())?);
            }
            OutputFormat::Text => {
                tracker.view().write_summary(&mut io::stdout())?;
            }
        }
        Ok(())
    }
}

pub struct ListCommand;

impl ListCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        tracker: &mut Tracker<S, Screen>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        tracker.load_items();

        if tracker.meals().is_empty() && tracker.workouts().is_empty() {
            println!("Nothing logged yet.\n");
        }
        tracker.view().write_to(&mut io::stdout())?;
        Ok(())
    }
}
