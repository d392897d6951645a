use caltrack_core::{Calories, KeyValueStore, Tracker};
use clap::{Args, Subcommand};
use std::io;

use super::parse_calories;
use crate::screen::Screen;

#[derive(Args)]
pub struct LimitCommand {
    #[command(subcommand)]
    pub command: LimitSubcommand,
}

#[derive(Subcommand)]
pub enum LimitSubcommand {
    /// Set the daily calorie limit
    Set {
        /// New limit in calories
        #[arg(value_parser = parse_calories)]
        calories: Calories,
    },

    /// Show the current daily calorie limit
    Show,
}

impl LimitCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        tracker: &mut Tracker<S, Screen>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            LimitSubcommand::Set { calories } => {
                tracker.set_limit(*calories)?;

                println!("Daily limit set to {}\n", calories);
                tracker.view().write_summary(&mut io::stdout())?;
            }
            LimitSubcommand::Show => {
                println!("{}", tracker.calorie_limit());
            }
        }

        Ok(())
    }
}
