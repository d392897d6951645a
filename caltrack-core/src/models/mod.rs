mod calories;
mod meal;
mod workout;

pub use calories::Calories;
pub use meal::Meal;
pub use workout::Workout;
