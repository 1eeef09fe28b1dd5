use crate::io::store_io::{self, Record, StoreError};
use crate::model::{HabitIndex, Tracker, normalize_name};

use super::Change;

/// Rename a habit. The name is trimmed and cut to the buffer limit; a
/// blank name leaves the old one in place.
pub fn rename_habit(
    tracker: &mut Tracker,
    habit: HabitIndex,
    raw_name: &str,
) -> Result<Change, StoreError> {
    let Some(name) = normalize_name(raw_name) else {
        return Ok(Change::Ignored);
    };
    tracker.habits.set_name(habit, name);
    store_io::save_record(tracker, Record::Names)?;
    Ok(Change::Applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store_io::load_tracker;
    use crate::model::MAX_NAME_BYTES;
    use tempfile::TempDir;

    fn h(i: usize) -> HabitIndex {
        HabitIndex::new(i).unwrap()
    }

    #[test]
    fn rename_trims_and_persists() {
        let tmp = TempDir::new().unwrap();
        let (mut tracker, _) = load_tracker(tmp.path());
        assert_eq!(
            rename_habit(&mut tracker, h(4), "  Drink water ").unwrap(),
            Change::Applied
        );
        assert_eq!(tracker.habits.name(h(4)), "Drink water");
        assert_eq!(load_tracker(tmp.path()).0.habits.name(h(4)), "Drink water");
    }

    #[test]
    fn blank_rename_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let (mut tracker, _) = load_tracker(tmp.path());
        rename_habit(&mut tracker, h(0), "Run").unwrap();
        assert_eq!(
            rename_habit(&mut tracker, h(0), "   ").unwrap(),
            Change::Ignored
        );
        assert_eq!(tracker.habits.name(h(0)), "Run");
    }

    #[test]
    fn long_rename_is_truncated() {
        let tmp = TempDir::new().unwrap();
        let (mut tracker, _) = load_tracker(tmp.path());
        rename_habit(&mut tracker, h(1), &"z".repeat(200)).unwrap();
        let loaded = load_tracker(tmp.path()).0;
        assert_eq!(loaded.habits.name(h(1)).len(), MAX_NAME_BYTES);
    }
}
