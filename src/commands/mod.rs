mod config_cmd;
mod limit;
mod meal;
mod reset;
mod status;
mod workout;

pub use config_cmd::ConfigCommand;
pub use limit::LimitCommand;
pub use meal::MealCommand;
pub use reset::ResetCommand;
pub use status::{ListCommand, StatusCommand};
pub use workout::WorkoutCommand;

use caltrack_core::Calories;
use clap::ValueEnum;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Value parser for calorie arguments.
fn parse_calories(s: &str) -> Result<Calories, String> {
    s.parse::<Calories>().map_err(|e| e.to_string())
}
