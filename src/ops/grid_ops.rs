use crate::io::store_io::{self, Record, StoreError};
use crate::model::{CycleLength, HabitIndex, Tracker};

use super::Change;

// Every mutator here changes the tracker first and then writes the owning
// record. An `Err` means the change is live in memory but not on disk.

/// Flip one cell. Days outside the active cycle are ignored.
pub fn toggle(tracker: &mut Tracker, habit: HabitIndex, day: usize) -> Result<Change, StoreError> {
    let value = !tracker.grid.get(habit, day);
    set_tick(tracker, habit, day, value)
}

/// Set one cell to `value`. Days outside the active cycle are ignored.
pub fn set_tick(
    tracker: &mut Tracker,
    habit: HabitIndex,
    day: usize,
    value: bool,
) -> Result<Change, StoreError> {
    if day >= tracker.days() {
        return Ok(Change::Ignored);
    }
    tracker.grid.set(habit, day, value);
    store_io::save_record(tracker, Record::States)?;
    Ok(Change::Applied)
}

/// Set `day` (0-based) for every habit
pub fn fill_day(tracker: &mut Tracker, day: usize, value: bool) -> Result<Change, StoreError> {
    if day >= tracker.days() {
        return Ok(Change::Ignored);
    }
    tracker.grid.set_column(day, value);
    store_io::save_record(tracker, Record::States)?;
    Ok(Change::Applied)
}

/// Untick every day of one habit, hidden days included
pub fn clear_habit(tracker: &mut Tracker, habit: HabitIndex) -> Result<Change, StoreError> {
    tracker.grid.clear_row(habit);
    store_io::save_record(tracker, Record::States)?;
    Ok(Change::Applied)
}

/// Untick the whole grid, hidden days included
pub fn reset_all(tracker: &mut Tracker) -> Result<Change, StoreError> {
    tracker.grid.clear();
    store_io::save_record(tracker, Record::States)?;
    Ok(Change::Applied)
}

/// Switch the active cycle. Hidden columns keep their ticks.
pub fn set_cycle(tracker: &mut Tracker, cycle: CycleLength) -> Result<Change, StoreError> {
    if tracker.cycle == cycle {
        return Ok(Change::Ignored);
    }
    tracker.cycle = cycle;
    store_io::save_record(tracker, Record::Settings)?;
    Ok(Change::Applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store_io::load_tracker;
    use crate::model::{DayGrid, MAX_DAY_COUNT};
    use tempfile::TempDir;

    fn h(i: usize) -> HabitIndex {
        HabitIndex::new(i).unwrap()
    }

    fn setup() -> (TempDir, Tracker) {
        let tmp = TempDir::new().unwrap();
        let (tracker, _) = load_tracker(tmp.path());
        (tmp, tracker)
    }

    fn reload(tmp: &TempDir) -> Tracker {
        load_tracker(tmp.path()).0
    }

    #[test]
    fn toggle_writes_through() {
        let (tmp, mut tracker) = setup();
        assert_eq!(toggle(&mut tracker, h(2), 4).unwrap(), Change::Applied);
        assert!(tracker.grid.get(h(2), 4));
        assert!(reload(&tmp).grid.get(h(2), 4));

        toggle(&mut tracker, h(2), 4).unwrap();
        assert!(!reload(&tmp).grid.get(h(2), 4));
    }

    #[test]
    fn toggle_outside_cycle_is_ignored() {
        let (tmp, mut tracker) = setup();
        set_cycle(&mut tracker, CycleLength::Seven).unwrap();
        assert_eq!(toggle(&mut tracker, h(0), 7).unwrap(), Change::Ignored);
        assert!(!tracker.grid.get(h(0), 7));
        assert!(!tmp.path().join("states.dat").exists());
    }

    #[test]
    fn fill_and_clear_day() {
        let (tmp, mut tracker) = setup();
        fill_day(&mut tracker, 9, true).unwrap();
        assert_eq!(reload(&tmp).grid.checked_on_day(9), 10);
        fill_day(&mut tracker, 9, false).unwrap();
        assert_eq!(reload(&tmp).grid.checked_on_day(9), 0);
        assert_eq!(fill_day(&mut tracker, 60, true).unwrap(), Change::Ignored);
    }

    #[test]
    fn clear_habit_clears_hidden_days() {
        let (tmp, mut tracker) = setup();
        tracker.grid.set(h(1), 2, true);
        tracker.grid.set(h(1), MAX_DAY_COUNT - 1, true);
        tracker.grid.set(h(2), 2, true);
        set_cycle(&mut tracker, CycleLength::Seven).unwrap();

        clear_habit(&mut tracker, h(1)).unwrap();
        let loaded = reload(&tmp);
        assert!(loaded.grid.row(h(1)).iter().all(|&c| !c));
        assert!(loaded.grid.get(h(2), 2));
    }

    #[test]
    fn reset_is_idempotent() {
        let (tmp, mut tracker) = setup();
        tracker.grid.set(h(0), 0, true);
        tracker.grid.set(h(9), 79, true);

        reset_all(&mut tracker).unwrap();
        let once = std::fs::read(tmp.path().join("states.dat")).unwrap();
        reset_all(&mut tracker).unwrap();
        let twice = std::fs::read(tmp.path().join("states.dat")).unwrap();

        assert_eq!(once, twice);
        assert_eq!(tracker.grid, DayGrid::default());
    }

    #[test]
    fn shrinking_cycle_keeps_hidden_ticks() {
        let (tmp, mut tracker) = setup();
        toggle(&mut tracker, h(0), 50).unwrap();
        set_cycle(&mut tracker, CycleLength::Seven).unwrap();
        assert_eq!(reload(&tmp).cycle, CycleLength::Seven);

        set_cycle(&mut tracker, CycleLength::Sixty).unwrap();
        let loaded = reload(&tmp);
        assert_eq!(loaded.cycle, CycleLength::Sixty);
        assert!(loaded.grid.get(h(0), 50));
    }

    #[test]
    fn same_cycle_is_ignored() {
        let (_tmp, mut tracker) = setup();
        assert_eq!(
            set_cycle(&mut tracker, CycleLength::Sixty).unwrap(),
            Change::Ignored
        );
    }

    #[test]
    fn failed_save_keeps_memory_change() {
        let (tmp, mut tracker) = setup();
        tracker.data_dir = tmp.path().join("missing");
        assert!(toggle(&mut tracker, h(3), 3).is_err());
        assert!(tracker.grid.get(h(3), 3));
    }
}
