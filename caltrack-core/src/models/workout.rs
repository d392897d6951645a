use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::calories::Calories;

/// A logged exercise entry. Subtracts its burned calories from the running total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "caloriesBurned")]
    pub calories_burned: Calories,
}

impl Workout {
    pub fn new(name: impl Into<String>, calories_burned: Calories) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories_burned,
        }
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (-{} kcal)", self.name, self.calories_burned)
    }
}
