//! The calorie tracker: in-memory state kept in step with storage and view.

use uuid::Uuid;

use crate::error::{Result, TrackerError};
use crate::models::{Calories, Meal, Workout};
use crate::storage::TrackerStorage;
use crate::store::KeyValueStore;
use crate::summary::Summary;
use crate::view::TrackerView;

/// Owns the running total, the calorie limit and the logged meals and workouts.
///
/// Every mutating operation writes through to storage before the in-memory
/// state changes, so a failed write leaves the tracker as it was. The total
/// and the list it derives from are written in one batch, so storage never
/// holds one without the other. The view is refreshed after each successful
/// change.
pub struct Tracker<S, V> {
    storage: TrackerStorage<S>,
    view: V,
    calorie_limit: Calories,
    total_calories: f64,
    meals: Vec<Meal>,
    workouts: Vec<Workout>,
}

impl<S: KeyValueStore, V: TrackerView> Tracker<S, V> {
    /// Restores tracker state from `storage` and renders it.
    ///
    /// `default_limit` applies only when no limit has been persisted yet.
    pub fn load(storage: TrackerStorage<S>, view: V, default_limit: Calories) -> Result<Self> {
        let calorie_limit = storage.get_calorie_limit(default_limit)?;
        let total_calories = storage.get_total_calories(0.0)?;
        let meals = storage.get_meals()?;
        let workouts = storage.get_workouts()?;

        tracing::debug!(
            "Loaded tracker: limit={}, total={}, {} meal(s), {} workout(s)",
            calorie_limit,
            total_calories,
            meals.len(),
            workouts.len()
        );

        let mut tracker = Self {
            storage,
            view,
            calorie_limit,
            total_calories,
            meals,
            workouts,
        };
        tracker.render();
        Ok(tracker)
    }

    pub fn add_meal(&mut self, meal: Meal) -> Result<()> {
        let total = self.total_calories + meal.calories.value();
        self.storage.save_meal_with_total(&meal, total)?;

        tracing::debug!("Added meal {} ({})", meal.id, meal.calories);
        self.total_calories = total;
        self.view.show_meal(&meal);
        self.meals.push(meal);
        self.render();
        Ok(())
    }

    pub fn add_workout(&mut self, workout: Workout) -> Result<()> {
        let total = self.total_calories - workout.calories_burned.value();
        self.storage.save_workout_with_total(&workout, total)?;

        tracing::debug!("Added workout {} ({})", workout.id, workout.calories_burned);
        self.total_calories = total;
        self.view.show_workout(&workout);
        self.workouts.push(workout);
        self.render();
        Ok(())
    }

    /// Removes the first meal with `id` and returns it.
    pub fn remove_meal(&mut self, id: Uuid) -> Result<Meal> {
        let index = self
            .meals
            .iter()
            .position(|meal| meal.id == id)
            .ok_or(TrackerError::MealNotFound(id))?;

        let total = self.total_calories - self.meals[index].calories.value();
        self.storage.remove_meal_with_total(id, total)?;

        tracing::debug!("Removed meal {}", id);
        self.total_calories = total;
        let meal = self.meals.remove(index);
        self.render();
        Ok(meal)
    }

    /// Removes the first workout with `id` and returns it.
    pub fn remove_workout(&mut self, id: Uuid) -> Result<Workout> {
        let index = self
            .workouts
            .iter()
            .position(|workout| workout.id == id)
            .ok_or(TrackerError::WorkoutNotFound(id))?;

        let total = self.total_calories + self.workouts[index].calories_burned.value();
        self.storage.remove_workout_with_total(id, total)?;

        tracing::debug!("Removed workout {}", id);
        self.total_calories = total;
        let workout = self.workouts.remove(index);
        self.render();
        Ok(workout)
    }

    /// Zeroes the total and forgets every meal and workout. The limit is kept.
    pub fn reset(&mut self) -> Result<()> {
        self.storage.clear_all()?;

        tracing::debug!("Reset tracker");
        self.total_calories = 0.0;
        self.meals.clear();
        self.workouts.clear();
        self.render();
        Ok(())
    }

    pub fn set_limit(&mut self, limit: Calories) -> Result<()> {
        self.storage.set_calorie_limit(limit)?;

        tracing::debug!("Set calorie limit to {}", limit);
        self.calorie_limit = limit;
        self.render();
        Ok(())
    }

    /// Replays every loaded meal and workout into the view. Totals are untouched.
    pub fn load_items(&mut self) {
        for meal in &self.meals {
            self.view.show_meal(meal);
        }
        for workout in &self.workouts {
            self.view.show_workout(workout);
        }
    }

    pub fn calorie_limit(&self) -> Calories {
        self.calorie_limit
    }

    pub fn total_calories(&self) -> f64 {
        self.total_calories
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(
            self.calorie_limit,
            self.total_calories,
            &self.meals,
            &self.workouts,
        )
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn storage(&self) -> &TrackerStorage<S> {
        &self.storage
    }

    pub fn into_storage(self) -> TrackerStorage<S> {
        self.storage
    }

    fn render(&mut self) {
        let summary = self.summary();
        self.view.render(&summary);
    }
}
