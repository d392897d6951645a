use caltrack_core::{Calories, KeyValueStore, Meal, Tracker};
use clap::{Args, Subcommand};
use std::io;
use uuid::Uuid;

use super::{parse_calories, OutputFormat};
use crate::screen::Screen;

#[derive(Args)]
pub struct MealCommand {
    #[command(subcommand)]
    pub command: MealSubcommand,
}

#[derive(Subcommand)]
pub enum MealSubcommand {
    /// Log a meal
    Add {
        /// Meal name
        name: String,

        /// Calories eaten
        #[arg(value_parser = parse_calories)]
        calories: Calories,
    },

    /// Remove a logged meal by ID
    Remove {
        /// Meal ID (UUID)
        id: Uuid,
    },

    /// List logged meals
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl MealCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        tracker: &mut Tracker<S, Screen>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            MealSubcommand::Add { name, calories } => {
                let meal = Meal::new(name.as_str(), *calories);
                let id = meal.id;
                tracker.add_meal(meal)?;

                println!("Logged meal:\n");
                tracker.view().write_to(&mut io::stdout())?;
                println!("\nMeal ID: {}", id);
            }
            MealSubcommand::Remove { id } => {
                let meal = tracker.remove_meal(*id)?;

                println!("Removed meal: {}\n", meal);
                tracker.view().write_summary(&mut io::stdout())?;
            }
            MealSubcommand::List { format } => match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(tracker.meals())?);
                }
                OutputFormat::Text => {
                    if tracker.meals().is_empty() {
                        println!("No meals logged.");
                        return Ok(());
                    }
                    for meal in tracker.meals() {
                        println!("  {:<24} {:>8}  [{}]", meal.name, meal.calories, meal.id);
                    }
                    println!("\nTotal: {} meal(s)", tracker.meals().len());
                }
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caltrack_core::{MemoryStore, TrackerStorage};

    fn test_tracker() -> Tracker<MemoryStore, Screen> {
        Tracker::load(
            TrackerStorage::new(MemoryStore::new()),
            Screen::new(),
            Calories::DEFAULT_LIMIT,
        )
        .unwrap()
    }

    #[test]
    fn test_add_then_remove() {
        let mut tracker = test_tracker();

        let add = MealCommand {
            command: MealSubcommand::Add {
                name: "Breakfast".to_string(),
                calories: Calories::new(400.0).unwrap(),
            },
        };
        add.run(&mut tracker).unwrap();
        assert_eq!(tracker.total_calories(), 400.0);

        let id = tracker.meals()[0].id;
        let remove = MealCommand {
            command: MealSubcommand::Remove { id },
        };
        remove.run(&mut tracker).unwrap();
        assert!(tracker.meals().is_empty());
        assert_eq!(tracker.total_calories(), 0.0);
    }

    #[test]
    fn test_remove_unknown_id_fails() {
        let mut tracker = test_tracker();
        let remove = MealCommand {
            command: MealSubcommand::Remove { id: Uuid::new_v4() },
        };

        let err = remove.run(&mut tracker).unwrap_err();
        assert!(err.to_string().starts_with("Meal not found"));
    }
}
