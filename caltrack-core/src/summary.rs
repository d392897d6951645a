//! Display values derived from the tracker state.

use serde::Serialize;
use std::fmt;

use crate::models::{Calories, Meal, Workout};

/// Snapshot of the figures shown to the user after every change.
///
/// `consumed` and `burned` are summed from the current lists. `total` is the
/// tracker's running total as-is; it is not recomputed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub limit: f64,
    pub total: f64,
    pub consumed: f64,
    pub burned: f64,
    pub remaining: f64,
    /// Share of the limit used, in percent, clamped to 0..=100.
    pub progress: f64,
    pub over_limit: bool,
}

impl Summary {
    pub fn compute(limit: Calories, total: f64, meals: &[Meal], workouts: &[Workout]) -> Self {
        let consumed = meals.iter().map(|meal| meal.calories.value()).sum();
        let burned = workouts
            .iter()
            .map(|workout| workout.calories_burned.value())
            .sum();
        let remaining = limit.value() - total;

        Self {
            limit: limit.value(),
            total,
            consumed,
            burned,
            remaining,
            progress: progress_percent(total, limit),
            over_limit: remaining < 0.0,
        }
    }
}

/// Percentage of `limit` reached by `total`, clamped to 0..=100.
pub fn progress_percent(total: f64, limit: Calories) -> f64 {
    if limit.value() == 0.0 {
        return if total > 0.0 { 100.0 } else { 0.0 };
    }
    (total * 100.0 / limit.value()).clamp(0.0, 100.0)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Daily limit:  {}", self.limit)?;
        writeln!(f, "Gain/loss:    {}", self.total)?;
        writeln!(f, "Consumed:     {}", self.consumed)?;
        writeln!(f, "Burned:       {}", self.burned)?;
        write!(f, "Remaining:    {}", self.remaining)?;
        if self.over_limit {
            write!(f, " (over limit)")?;
        }
        writeln!(f)?;
        write!(f, "Progress:     {:.0}%", self.progress)
    }
}
