use caltrack_core::{Calories, KeyValueStore, Tracker, Workout};
use clap::{Args, Subcommand};
use std::io;
use uuid::Uuid;

use super::{parse_calories, OutputFormat};
use crate::screen::Screen;

#[derive(Args)]
pub struct WorkoutCommand {
    #[command(subcommand)]
    pub command: WorkoutSubcommand,
}

#[derive(Subcommand)]
pub enum WorkoutSubcommand {
    /// Log a workout
    Add {
        /// Workout name
        name: String,

        /// Calories burned
        #[arg(value_parser = parse_calories)]
        calories: Calories,
    },

    /// Remove a logged workout by ID
    Remove {
        /// Workout ID (UUID)
        id: Uuid,
    },

    /// List logged workouts
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl WorkoutCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        tracker: &mut Tracker<S, Screen>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            WorkoutSubcommand::Add { name, calories } => {
                let workout = Workout::new(name.as_str(), *calories);
                let id = workout.id;
                tracker.add_workout(workout)?;

                println!("Logged workout:\n");
                tracker.view().write_to(&mut io::stdout())?;
                println!("\nWorkout ID: {}", id);
            }
            WorkoutSubcommand::Remove { id } => {
                let workout = tracker.remove_workout(*id)?;

                println!("Removed workout: {}\n", workout);
                tracker.view().write_summary(&mut io::stdout())?;
            }
            WorkoutSubcommand::List { format } => match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(tracker.workouts())?);
                }
                OutputFormat::Text => {
                    if tracker.workouts().is_empty() {
                        println!("No workouts logged.");
                        return Ok(());
                    }
                    for workout in tracker.workouts() {
                        println!(
                            "  {:<24} {:>8}  [{}]",
                            workout.name, workout.calories_burned, workout.id
                        );
                    }
                    println!("\nTotal: {} workout(s)", tracker.workouts().len());
                }
            },
        }

        Ok(())
    }
}
