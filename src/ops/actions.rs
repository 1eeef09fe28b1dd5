use std::path::PathBuf;

use crate::io::store_io::StoreError;
use crate::model::{CycleLength, HabitIndex, Tracker};

use super::Change;
use super::export::{self, ExportError};
use super::{grid_ops, habit_ops};

/// The day picked for bulk fill/clear, 1-based.
///
/// Lives only in the UI session; it is clamped into `[1, cycle]` whenever
/// the cycle changes and is never written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCursor {
    day: usize,
}

impl Default for DayCursor {
    fn default() -> Self {
        DayCursor { day: 1 }
    }
}

impl DayCursor {
    pub fn day(self) -> usize {
        self.day
    }

    /// Move by `delta` days, clamped to the cycle
    pub fn step(&mut self, delta: i32, cycle: CycleLength) {
        let moved = self.day as i64 + delta as i64;
        self.day = moved.clamp(1, cycle.days() as i64) as usize;
    }

    /// Jump to a 1-based day, clamped to the cycle
    pub fn set(&mut self, day: usize, cycle: CycleLength) {
        self.day = day.clamp(1, cycle.days());
    }

    pub fn clamp(&mut self, cycle: CycleLength) {
        self.set(self.day, cycle);
    }

    /// 0-based grid column, or None when the cursor is outside the cycle
    pub fn day_index(self, cycle: CycleLength) -> Option<usize> {
        (1..=cycle.days()).contains(&self.day).then(|| self.day - 1)
    }
}

/// A user command, carrying typed targets instead of raw indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Toggle { habit: HabitIndex, day: usize },
    SetCycle(CycleLength),
    StepCursor(i32),
    SetCursor(usize),
    FillDay,
    ClearDay,
    ClearHabit(HabitIndex),
    Rename { habit: HabitIndex, name: String },
    /// Destructive: callers must have confirmed with the user first
    Reset,
    Export,
}

/// What happened when an action was applied
#[derive(Debug)]
pub enum Outcome {
    /// Invalid or redundant input: nothing changed
    Ignored,
    /// Tracker state changed and was saved
    Updated,
    /// Only transient UI state (the day cursor) moved
    CursorMoved,
    Exported(PathBuf),
    /// The change stands in memory but could not be saved
    SaveFailed(StoreError),
    ExportFailed(ExportError),
}

impl Outcome {
    fn from_change(result: Result<Change, StoreError>) -> Self {
        match result {
            Ok(Change::Applied) => Outcome::Updated,
            Ok(Change::Ignored) => Outcome::Ignored,
            Err(e) => Outcome::SaveFailed(e),
        }
    }

    /// Whether views need to redraw from the tracker
    pub fn changed_state(&self) -> bool {
        matches!(self, Outcome::Updated | Outcome::SaveFailed(_))
    }
}

/// Apply one action to the tracker and the day cursor
pub fn apply(tracker: &mut Tracker, cursor: &mut DayCursor, action: Action) -> Outcome {
    match action {
        Action::Toggle { habit, day } => {
            Outcome::from_change(grid_ops::toggle(tracker, habit, day))
        }
        Action::SetCycle(cycle) => {
            let outcome = Outcome::from_change(grid_ops::set_cycle(tracker, cycle));
            cursor.clamp(tracker.cycle);
            outcome
        }
        Action::StepCursor(delta) => {
            cursor.step(delta, tracker.cycle);
            Outcome::CursorMoved
        }
        Action::SetCursor(day) => {
            cursor.set(day, tracker.cycle);
            Outcome::CursorMoved
        }
        Action::FillDay | Action::ClearDay => {
            let Some(day) = cursor.day_index(tracker.cycle) else {
                return Outcome::Ignored;
            };
            let value = action == Action::FillDay;
            Outcome::from_change(grid_ops::fill_day(tracker, day, value))
        }
        Action::ClearHabit(habit) => Outcome::from_change(grid_ops::clear_habit(tracker, habit)),
        Action::Rename { habit, name } => {
            Outcome::from_change(habit_ops::rename_habit(tracker, habit, &name))
        }
        Action::Reset => Outcome::from_change(grid_ops::reset_all(tracker)),
        Action::Export => match export::export_stats(tracker) {
            Ok(path) => Outcome::Exported(path),
            Err(e) => Outcome::ExportFailed(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store_io::load_tracker;
    use tempfile::TempDir;

    fn h(i: usize) -> HabitIndex {
        HabitIndex::new(i).unwrap()
    }

    fn setup() -> (TempDir, Tracker, DayCursor) {
        let tmp = TempDir::new().unwrap();
        let (tracker, _) = load_tracker(tmp.path());
        (tmp, tracker, DayCursor::default())
    }

    #[test]
    fn cursor_clamps() {
        let mut cursor = DayCursor::default();
        cursor.step(-5, CycleLength::Seven);
        assert_eq!(cursor.day(), 1);
        cursor.step(100, CycleLength::Seven);
        assert_eq!(cursor.day(), 7);
        cursor.set(0, CycleLength::Thirty);
        assert_eq!(cursor.day(), 1);
        cursor.set(45, CycleLength::Sixty);
        assert_eq!(cursor.day(), 45);
        cursor.clamp(CycleLength::Thirty);
        assert_eq!(cursor.day(), 30);
        assert_eq!(cursor.day_index(CycleLength::Thirty), Some(29));
    }

    #[test]
    fn fill_and_clear_use_cursor() {
        let (_tmp, mut tracker, mut cursor) = setup();
        apply(&mut tracker, &mut cursor, Action::SetCursor(5));
        assert!(apply(&mut tracker, &mut cursor, Action::FillDay).changed_state());
        assert_eq!(tracker.grid.checked_on_day(4), 10);

        apply(&mut tracker, &mut cursor, Action::ClearDay);
        assert_eq!(tracker.grid.checked_on_day(4), 0);
    }

    #[test]
    fn cycle_change_clamps_cursor() {
        let (tmp, mut tracker, mut cursor) = setup();
        apply(&mut tracker, &mut cursor, Action::SetCursor(50));
        let outcome = apply(&mut tracker, &mut cursor, Action::SetCycle(CycleLength::Seven));
        assert!(matches!(outcome, Outcome::Updated));
        assert_eq!(cursor.day(), 7);
        assert_eq!(load_tracker(tmp.path()).0.cycle, CycleLength::Seven);
    }

    #[test]
    fn blank_rename_is_ignored() {
        let (_tmp, mut tracker, mut cursor) = setup();
        let outcome = apply(
            &mut tracker,
            &mut cursor,
            Action::Rename {
                habit: h(0),
                name: "  ".into(),
            },
        );
        assert!(matches!(outcome, Outcome::Ignored));
        assert_eq!(tracker.habits.name(h(0)), "Habit 1");
    }

    #[test]
    fn reset_then_export() {
        let (tmp, mut tracker, mut cursor) = setup();
        apply(&mut tracker, &mut cursor, Action::SetCycle(CycleLength::Seven));
        apply(&mut tracker, &mut cursor, Action::Toggle { habit: h(3), day: 2 });
        apply(&mut tracker, &mut cursor, Action::Reset);

        let path = match apply(&mut tracker, &mut cursor, Action::Export) {
            Outcome::Exported(path) => path,
            other => panic!("export failed: {:?}", other),
        };
        assert_eq!(path, tmp.path().join("stats_export.txt"));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Overall: 0/70 (0%)"));
    }

    #[test]
    fn save_failure_still_changes_state() {
        let (tmp, mut tracker, mut cursor) = setup();
        tracker.data_dir = tmp.path().join("missing");
        let outcome = apply(&mut tracker, &mut cursor, Action::ClearHabit(h(0)));
        assert!(matches!(outcome, Outcome::SaveFailed(_)));
        assert!(outcome.changed_state());
    }
}
