//! Terminal rendering of tracker state.

use caltrack_core::{Meal, Summary, TrackerView, Workout};
use std::io::{self, Write};

/// Collects what the tracker asks to display during one command.
///
/// Cards accumulate in the order they are shown; the summary is replaced on
/// every render. Nothing is printed until [`Screen::write_to`] is called.
#[derive(Debug, Default)]
pub struct Screen {
    summary: Option<Summary>,
    meal_cards: Vec<String>,
    workout_cards: Vec<String>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes meal cards, workout cards and the latest summary.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_cards(out)?;
        self.write_summary(out)
    }

    pub fn write_cards<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.meal_cards.is_empty() {
            writeln!(out, "Meals")?;
            writeln!(out, "-----")?;
            for card in &self.meal_cards {
                writeln!(out, "{}", card)?;
            }
            writeln!(out)?;
        }

        if !self.workout_cards.is_empty() {
            writeln!(out, "Workouts")?;
            writeln!(out, "--------")?;
            for card in &self.workout_cards {
                writeln!(out, "{}", card)?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(summary) = &self.summary {
            writeln!(out, "{}", summary)?;
        }
        Ok(())
    }
}

impl TrackerView for Screen {
    fn render(&mut self, summary: &Summary) {
        self.summary = Some(*summary);
    }

    fn show_meal(&mut self, meal: &Meal) {
        self.meal_cards
            .push(format!("  {:<24} {:>8}  [{}]", meal.name, meal.calories, meal.id));
    }

    fn show_workout(&mut self, workout: &Workout) {
        self.workout_cards.push(format!(
            "  {:<24} {:>8}  [{}]",
            workout.name, workout.calories_burned, workout.id
        ));
    }
}
