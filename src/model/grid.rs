use super::cycle::CycleLength;
use super::habit::{HABIT_COUNT, HabitIndex};

/// Longest supported cycle; the grid always keeps this many columns.
pub const MAX_DAY_COUNT: usize = 80;

/// Habit × day tick matrix.
///
/// Always holds `MAX_DAY_COUNT` columns. Only the first `cycle.days()`
/// columns are active; the rest keep their ticks so that growing the cycle
/// again brings them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    cells: [[bool; MAX_DAY_COUNT]; HABIT_COUNT],
}

impl Default for DayGrid {
    fn default() -> Self {
        DayGrid {
            cells: [[false; MAX_DAY_COUNT]; HABIT_COUNT],
        }
    }
}

impl DayGrid {
    /// Tick state of one cell. Days past `MAX_DAY_COUNT` read as unticked.
    pub fn get(&self, habit: HabitIndex, day: usize) -> bool {
        self.cells[habit.get()].get(day).copied().unwrap_or(false)
    }

    /// Set one cell. Returns false (and does nothing) for an out-of-range day.
    pub fn set(&mut self, habit: HabitIndex, day: usize, value: bool) -> bool {
        match self.cells[habit.get()].get_mut(day) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, habit: HabitIndex) -> &[bool; MAX_DAY_COUNT] {
        &self.cells[habit.get()]
    }

    pub fn clear_row(&mut self, habit: HabitIndex) {
        self.cells[habit.get()] = [false; MAX_DAY_COUNT];
    }

    pub fn set_column(&mut self, day: usize, value: bool) -> bool {
        if day >= MAX_DAY_COUNT {
            return false;
        }
        for row in &mut self.cells {
            row[day] = value;
        }
        true
    }

    pub fn clear(&mut self) {
        *self = DayGrid::default();
    }

    /// Number of habits ticked on `day`
    pub fn checked_on_day(&self, day: usize) -> usize {
        HabitIndex::all().filter(|&h| self.get(h, day)).count()
    }

    /// Number of active days ticked for one habit
    pub fn checked_for_habit(&self, habit: HabitIndex, cycle: CycleLength) -> usize {
        self.row(habit)[..cycle.days()]
            .iter()
            .filter(|&&c| c)
            .count()
    }

    /// Ticks over an inclusive day range, all habits
    pub fn checked_in_range(&self, first: usize, last: usize) -> usize {
        if first > last {
            return 0;
        }
        (first..=last.min(MAX_DAY_COUNT - 1))
            .map(|d| self.checked_on_day(d))
            .sum()
    }

    /// Flat row-major iterator used by the binary codec
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Build a grid from a row-major cell stream. Missing cells stay false;
    /// extra cells are ignored.
    pub fn from_cells(cells: impl IntoIterator<Item = bool>) -> Self {
        let mut grid = DayGrid::default();
        for (i, value) in cells.into_iter().take(HABIT_COUNT * MAX_DAY_COUNT).enumerate() {
            grid.cells[i / MAX_DAY_COUNT][i % MAX_DAY_COUNT] = value;
        }
        grid
    }
}
