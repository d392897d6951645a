use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::calories::Calories;

/// A logged food entry. Adds its calories to the running total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub calories: Calories,
}

impl Meal {
    pub fn new(name: impl Into<String>, calories: Calories) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kcal)", self.name, self.calories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kcal(value: f64) -> Calories {
        Calories::new(value).unwrap()
    }

    #[test]
    fn test_meal_new() {
        let meal = Meal::new("Breakfast", kcal(400.0));
        assert_eq!(meal.name, "Breakfast");
        assert_eq!(meal.calories, kcal(400.0));
    }

    #[test]
    fn test_meal_ids_are_unique() {
        let a = Meal::new("Toast", kcal(120.0));
        let b = Meal::new("Toast", kcal(120.0));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_meal_display() {
        let meal = Meal::new("Lunch", kcal(650.0));
        assert_eq!(format!("{}", meal), "Lunch (650 kcal)");
    }

    #[test]
    fn test_meal_json_field_names() {
        let meal = Meal::new("Snack", kcal(90.0));
        let value = serde_json::to_value(&meal).unwrap();
        assert_eq!(value["name"], "Snack");
        assert_eq!(value["calories"], 90.0);
        assert_eq!(value["id"], meal.id.to_string());
    }
}
