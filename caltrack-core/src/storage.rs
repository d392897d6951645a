//! Persistence gateway for tracker records.
//!
//! Four records are kept in the underlying [`KeyValueStore`]:
//! - `calorieLimit`: numeric text
//! - `totalCalories`: numeric text
//! - `meals`: JSON array of [`Meal`]
//! - `workouts`: JSON array of [`Workout`]
//!
//! List updates rewrite the whole record. Operations that touch the total
//! together with a list write both records in one batch.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{Calories, Meal, Workout};
use crate::store::{Change, KeyValueStore};

pub const CALORIE_LIMIT_KEY: &str = "calorieLimit";
pub const TOTAL_CALORIES_KEY: &str = "totalCalories";
pub const MEALS_KEY: &str = "meals";
pub const WORKOUTS_KEY: &str = "workouts";

/// Reads and writes tracker records through an injected store.
pub struct TrackerStorage<S> {
    store: S,
}

impl<S: KeyValueStore> TrackerStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Returns the persisted limit, or `default` if none is stored.
    pub fn get_calorie_limit(&self, default: Calories) -> Result<Calories, StorageError> {
        match self.store.get(CALORIE_LIMIT_KEY)? {
            Some(text) => {
                let value = parse_number(CALORIE_LIMIT_KEY, &text)?;
                Calories::new(value).map_err(|e| StorageError::corrupt(CALORIE_LIMIT_KEY, e))
            }
            None => Ok(default),
        }
    }

    pub fn set_calorie_limit(&mut self, limit: Calories) -> Result<(), StorageError> {
        self.store.set(CALORIE_LIMIT_KEY, &limit.to_string())
    }

    /// Returns the persisted running total, or `default` if none is stored.
    pub fn get_total_calories(&self, default: f64) -> Result<f64, StorageError> {
        match self.store.get(TOTAL_CALORIES_KEY)? {
            Some(text) => parse_number(TOTAL_CALORIES_KEY, &text),
            None => Ok(default),
        }
    }

    pub fn update_total_calories(&mut self, total: f64) -> Result<(), StorageError> {
        self.store.set(TOTAL_CALORIES_KEY, &total.to_string())
    }

    pub fn get_meals(&self) -> Result<Vec<Meal>, StorageError> {
        self.read_list(MEALS_KEY)
    }

    /// Appends `meal` to the persisted meal list.
    pub fn save_meal(&mut self, meal: &Meal) -> Result<(), StorageError> {
        let mut meals = self.get_meals()?;
        meals.push(meal.clone());
        self.write_list(MEALS_KEY, &meals)
    }

    /// Drops every persisted meal with the given id.
    pub fn remove_meal(&mut self, id: Uuid) -> Result<(), StorageError> {
        let mut meals = self.get_meals()?;
        meals.retain(|meal| meal.id != id);
        self.write_list(MEALS_KEY, &meals)
    }

    pub fn get_workouts(&self) -> Result<Vec<Workout>, StorageError> {
        self.read_list(WORKOUTS_KEY)
    }

    /// Appends `workout` to the persisted workout list.
    pub fn save_workout(&mut self, workout: &Workout) -> Result<(), StorageError> {
        let mut workouts = self.get_workouts()?;
        workouts.push(workout.clone());
        self.write_list(WORKOUTS_KEY, &workouts)
    }

    /// Drops every persisted workout with the given id.
    pub fn remove_workout(&mut self, id: Uuid) -> Result<(), StorageError> {
        let mut workouts = self.get_workouts()?;
        workouts.retain(|workout| workout.id != id);
        self.write_list(WORKOUTS_KEY, &workouts)
    }

    /// Appends `meal` and stores `total` as the running total, as one write.
    pub fn save_meal_with_total(&mut self, meal: &Meal, total: f64) -> Result<(), StorageError> {
        let mut meals = self.get_meals()?;
        meals.push(meal.clone());
        self.write_list_with_total(MEALS_KEY, &meals, total)
    }

    /// Drops meals with `id` and stores `total` as the running total, as one write.
    pub fn remove_meal_with_total(&mut self, id: Uuid, total: f64) -> Result<(), StorageError> {
        let mut meals = self.get_meals()?;
        meals.retain(|meal| meal.id != id);
        self.write_list_with_total(MEALS_KEY, &meals, total)
    }

    /// Appends `workout` and stores `total` as the running total, as one write.
    pub fn save_workout_with_total(
        &mut self,
        workout: &Workout,
        total: f64,
    ) -> Result<(), StorageError> {
        let mut workouts = self.get_workouts()?;
        workouts.push(workout.clone());
        self.write_list_with_total(WORKOUTS_KEY, &workouts, total)
    }

    /// Drops workouts with `id` and stores `total` as the running total, as one write.
    pub fn remove_workout_with_total(&mut self, id: Uuid, total: f64) -> Result<(), StorageError> {
        let mut workouts = self.get_workouts()?;
        workouts.retain(|workout| workout.id != id);
        self.write_list_with_total(WORKOUTS_KEY, &workouts, total)
    }

    /// Removes the total, meal and workout records. The limit is kept.
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.store.apply(&[
            Change::Remove(TOTAL_CALORIES_KEY),
            Change::Remove(MEALS_KEY),
            Change::Remove(WORKOUTS_KEY),
        ])
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        match self.store.get(key)? {
            Some(text) => {
                serde_json::from_str(&text).map_err(|e| StorageError::corrupt(key, e))
            }
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let text = encode_list(key, items)?;
        self.store.set(key, &text)
    }

    fn write_list_with_total<T: Serialize>(
        &mut self,
        key: &str,
        items: &[T],
        total: f64,
    ) -> Result<(), StorageError> {
        let text = encode_list(key, items)?;
        let total = total.to_string();
        self.store.apply(&[
            Change::Set(TOTAL_CALORIES_KEY, &total),
            Change::Set(key, &text),
        ])
    }
}

fn encode_list<T: Serialize>(key: &str, items: &[T]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|e| StorageError::Encode {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn parse_number(key: &str, text: &str) -> Result<f64, StorageError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| StorageError::corrupt(key, format!("'{}' is not a number", text)))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StorageError::corrupt(key, format!("'{}' is not finite", text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn kcal(value: f64) -> Calories {
        Calories::new(value).unwrap()
    }

    fn test_storage() -> TrackerStorage<MemoryStore> {
        TrackerStorage::new(MemoryStore::new())
    }

    #[test]
    fn test_defaults_when_absent() {
        let storage = test_storage();
        assert_eq!(
            storage.get_calorie_limit(Calories::DEFAULT_LIMIT).unwrap(),
            Calories::DEFAULT_LIMIT
        );
        assert_eq!(storage.get_total_calories(0.0).unwrap(), 0.0);
        assert!(storage.get_meals().unwrap().is_empty());
        assert!(storage.get_workouts().unwrap().is_empty());
    }

    #[test]
    fn test_numbers_stored_as_plain_text() {
        let mut storage = test_storage();
        storage.set_calorie_limit(kcal(1800.0)).unwrap();
        storage.update_total_calories(-150.5).unwrap();

        assert_eq!(
            storage.store().get(CALORIE_LIMIT_KEY).unwrap().as_deref(),
            Some("1800")
        );
        assert_eq!(
            storage.store().get(TOTAL_CALORIES_KEY).unwrap().as_deref(),
            Some("-150.5")
        );
        assert_eq!(storage.get_calorie_limit(kcal(2000.0)).unwrap(), kcal(1800.0));
        assert_eq!(storage.get_total_calories(0.0).unwrap(), -150.5);
    }

    #[test]
    fn test_save_meal_appends_in_order() {
        let mut storage = test_storage();
        let breakfast = Meal::new("Breakfast", kcal(400.0));
        let lunch = Meal::new("Lunch", kcal(700.0));

        storage.save_meal(&breakfast).unwrap();
        storage.save_meal(&lunch).unwrap();

        assert_eq!(storage.get_meals().unwrap(), vec![breakfast, lunch]);
    }

    #[test]
    fn test_remove_meal_filters_by_id() {
        let mut storage = test_storage();
        let breakfast = Meal::new("Breakfast", kcal(400.0));
        let lunch = Meal::new("Lunch", kcal(700.0));
        storage.save_meal(&breakfast).unwrap();
        storage.save_meal(&lunch).unwrap();

        storage.remove_meal(breakfast.id).unwrap();

        assert_eq!(storage.get_meals().unwrap(), vec![lunch]);
    }

    #[test]
    fn test_remove_unknown_meal_keeps_list() {
        let mut storage = test_storage();
        let meal = Meal::new("Dinner", kcal(800.0));
        storage.save_meal(&meal).unwrap();

        storage.remove_meal(Uuid::new_v4()).unwrap();

        assert_eq!(storage.get_meals().unwrap(), vec![meal]);
    }

    #[test]
    fn test_workouts_round_trip() {
        let mut storage = test_storage();
        let run = Workout::new("Run", kcal(300.0));
        let swim = Workout::new("Swim", kcal(250.0));
        storage.save_workout(&run).unwrap();
        storage.save_workout(&swim).unwrap();
        storage.remove_workout(run.id).unwrap();

        assert_eq!(storage.get_workouts().unwrap(), vec![swim]);
    }

    #[test]
    fn test_meal_and_total_written_together() {
        let mut storage = test_storage();
        let breakfast = Meal::new("Breakfast", kcal(400.0));
        let lunch = Meal::new("Lunch", kcal(700.0));

        storage.save_meal_with_total(&breakfast, 400.0).unwrap();
        storage.save_meal_with_total(&lunch, 1100.0).unwrap();
        assert_eq!(storage.get_total_calories(0.0).unwrap(), 1100.0);
        assert_eq!(storage.get_meals().unwrap(), vec![breakfast.clone(), lunch.clone()]);

        storage.remove_meal_with_total(breakfast.id, 700.0).unwrap();
        assert_eq!(storage.get_total_calories(0.0).unwrap(), 700.0);
        assert_eq!(storage.get_meals().unwrap(), vec![lunch]);
    }

    #[test]
    fn test_workout_and_total_written_together() {
        let mut storage = test_storage();
        let run = Workout::new("Run", kcal(300.0));

        storage.save_workout_with_total(&run, -300.0).unwrap();
        assert_eq!(storage.get_total_calories(0.0).unwrap(), -300.0);
        assert_eq!(storage.get_workouts().unwrap(), vec![run.clone()]);

        storage.remove_workout_with_total(run.id, 0.0).unwrap();
        assert_eq!(storage.get_total_calories(0.0).unwrap(), 0.0);
        assert!(storage.get_workouts().unwrap().is_empty());
    }

    #[test]
    fn test_clear_all_keeps_limit() {
        let mut storage = test_storage();
        storage.set_calorie_limit(kcal(2500.0)).unwrap();
        storage.update_total_calories(400.0).unwrap();
        storage.save_meal(&Meal::new("Breakfast", kcal(400.0))).unwrap();
        storage.save_workout(&Workout::new("Walk", kcal(100.0))).unwrap();

        storage.clear_all().unwrap();

        let store = storage.store();
        assert!(store.contains_key(CALORIE_LIMIT_KEY));
        assert!(!store.contains_key(TOTAL_CALORIES_KEY));
        assert!(!store.contains_key(MEALS_KEY));
        assert!(!store.contains_key(WORKOUTS_KEY));
        assert_eq!(storage.get_calorie_limit(kcal(2000.0)).unwrap(), kcal(2500.0));
    }

    #[test]
    fn test_reads_original_record_format() {
        let mut store = MemoryStore::new();
        store
            .set(
                MEALS_KEY,
                r#"[{"id":"6a2f41a3-c54c-4c1e-9a3b-2b0f5e7d9c11","name":"Oats","calories":350}]"#,
            )
            .unwrap();
        store.set(CALORIE_LIMIT_KEY, "1900").unwrap();
        let storage = TrackerStorage::new(store);

        let meals = storage.get_meals().unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Oats");
        assert_eq!(meals[0].calories, kcal(350.0));
        assert_eq!(storage.get_calorie_limit(kcal(2000.0)).unwrap(), kcal(1900.0));
    }

    #[test]
    fn test_malformed_list_is_corrupt() {
        let mut store = MemoryStore::new();
        store.set(MEALS_KEY, "[{not json").unwrap();
        let storage = TrackerStorage::new(store);

        let err = storage.get_meals().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { ref key, .. } if key == MEALS_KEY));
    }

    #[test]
    fn test_malformed_numbers_are_corrupt() {
        let mut store = MemoryStore::new();
        store.set(TOTAL_CALORIES_KEY, "lots").unwrap();
        store.set(CALORIE_LIMIT_KEY, "-100").unwrap();
        let storage = TrackerStorage::new(store);

        assert!(matches!(
            storage.get_total_calories(0.0),
            Err(StorageError::Corrupt { .. })
        ));
        assert!(matches!(
            storage.get_calorie_limit(kcal(2000.0)),
            Err(StorageError::Corrupt { .. })
        ));
    }
}
