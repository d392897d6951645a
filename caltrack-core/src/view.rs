//! Presentation hooks driven by the tracker.

use crate::models::{Meal, Workout};
use crate::summary::Summary;

/// Receives display updates from a [`Tracker`](crate::Tracker).
///
/// `render` runs after every state change; `show_meal` and `show_workout`
/// run once per item as it is added, or when items are replayed with
/// [`Tracker::load_items`](crate::Tracker::load_items).
pub trait TrackerView {
    fn render(&mut self, summary: &Summary);
    fn show_meal(&mut self, meal: &Meal);
    fn show_workout(&mut self, workout: &Workout);
}

/// A view that discards all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl TrackerView for NullView {
    fn render(&mut self, _summary: &Summary) {}
    fn show_meal(&mut self, _meal: &Meal) {}
    fn show_workout(&mut self, _workout: &Workout) {}
}
