use caltrack_core::{KeyValueStore, Tracker};
use std::io;

use crate::screen::Screen;

pub struct ResetCommand;

impl ResetCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        tracker: &mut Tracker<S, Screen>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let meals = tracker.meals().len();
        let workouts = tracker.workouts().len();
        tracker.reset()?;

        println!(
            "Cleared {} meal(s) and {} workout(s).\n",
            meals, workouts
        );
        tracker.view().write_summary(&mut io::stdout())?;
        Ok(())
    }
}
