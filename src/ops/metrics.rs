use serde::Serialize;

use crate::model::{CycleLength, DayGrid, HABIT_COUNT, HabitIndex, Tracker};

/// Derived statistics over the active part of the grid.
///
/// Nothing is cached: every call walks the grid again, so values always
/// reflect the latest mutation.
#[derive(Debug, Clone, Copy)]
pub struct Metrics<'a> {
    grid: &'a DayGrid,
    cycle: CycleLength,
}

/// Completion of one 7-day window (days are 1-based, inclusive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekStats {
    pub week: usize,
    pub first_day: usize,
    pub last_day: usize,
    pub checked: usize,
    pub total: usize,
    pub percent: u32,
}

/// Completion of one habit over the cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitStats {
    pub habit: HabitIndex,
    pub checked: usize,
    pub total: usize,
    pub percent: u32,
}

/// Everything the stats panel, `stats` command and export report show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub cycle: CycleLength,
    pub checked: usize,
    pub total: usize,
    pub percent: u32,
    pub average_per_habit: f64,
    pub best: HabitStats,
    pub worst: HabitStats,
    pub habits: Vec<HabitStats>,
    pub weeks: Vec<WeekStats>,
}

/// Integer percentage with truncation toward zero; 0 when `total` is 0.
fn percent_of(checked: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (checked * 100 / total) as u32
    }
}

impl<'a> Metrics<'a> {
    pub fn new(grid: &'a DayGrid, cycle: CycleLength) -> Self {
        Metrics { grid, cycle }
    }

    pub fn of(tracker: &'a Tracker) -> Self {
        Self::new(&tracker.grid, tracker.cycle)
    }

    pub fn cycle(&self) -> CycleLength {
        self.cycle
    }

    fn in_cycle(&self, day: usize) -> bool {
        day < self.cycle.days()
    }

    /// Ticks on one day, 0 outside the active window
    pub fn day_checked(&self, day: usize) -> usize {
        if self.in_cycle(day) {
            self.grid.checked_on_day(day)
        } else {
            0
        }
    }

    /// `100 * ticked habits / 10` for one day; 0 outside the cycle
    pub fn day_completion_percent(&self, day: usize) -> f64 {
        if !self.in_cycle(day) {
            return 0.0;
        }
        100.0 * self.grid.checked_on_day(day) as f64 / HABIT_COUNT as f64
    }

    /// Mean of the daily percentages for days `0..=day`.
    ///
    /// This averages the per-day percentages rather than dividing cumulative
    /// ticks by cumulative cells, so floating-point drift follows the daily
    /// values.
    pub fn running_average_percent(&self, day: usize) -> f64 {
        if !self.in_cycle(day) {
            return 0.0;
        }
        let sum: f64 = (0..=day).map(|d| self.day_completion_percent(d)).sum();
        sum / (day + 1) as f64
    }

    /// Ticks on days `0..=day`, all habits
    pub fn cumulative_checked(&self, day: usize) -> usize {
        if !self.in_cycle(day) {
            return 0;
        }
        self.grid.checked_in_range(0, day)
    }

    pub fn habit_checked(&self, habit: HabitIndex) -> usize {
        self.grid.checked_for_habit(habit, self.cycle)
    }

    /// `checked days * 100 / cycle`, truncated
    pub fn habit_completion_percent(&self, habit: HabitIndex) -> u32 {
        percent_of(self.habit_checked(habit), self.cycle.days())
    }

    pub fn habit_stats(&self, habit: HabitIndex) -> HabitStats {
        let checked = self.habit_checked(habit);
        HabitStats {
            habit,
            checked,
            total: self.cycle.days(),
            percent: percent_of(checked, self.cycle.days()),
        }
    }

    pub fn total_checked(&self) -> usize {
        HabitIndex::all().map(|h| self.habit_checked(h)).sum()
    }

    pub fn total_cells(&self) -> usize {
        HABIT_COUNT * self.cycle.days()
    }

    /// `checked cells * 100 / (10 * cycle)`, truncated
    pub fn overall_percent(&self) -> u32 {
        percent_of(self.total_checked(), self.total_cells())
    }

    pub fn average_per_habit(&self) -> f64 {
        self.total_checked() as f64 / HABIT_COUNT as f64
    }

    pub fn week_count(&self) -> usize {
        self.cycle.week_count()
    }

    /// Stats for 0-based week `week`; the last window is clipped to the cycle.
    /// Returns None past the last week.
    pub fn week_stats(&self, week: usize) -> Option<WeekStats> {
        if week >= self.week_count() {
            return None;
        }
        let first = week * 7;
        let last = (first + 6).min(self.cycle.days() - 1);
        let days = last - first + 1;
        let checked = self.grid.checked_in_range(first, last);
        let total = HABIT_COUNT * days;
        Some(WeekStats {
            week: week + 1,
            first_day: first + 1,
            last_day: last + 1,
            checked,
            total,
            percent: percent_of(checked, total),
        })
    }

    pub fn week_completion_percent(&self, week: usize) -> u32 {
        self.week_stats(week).map_or(0, |w| w.percent)
    }

    pub fn weeks(&self) -> Vec<WeekStats> {
        (0..self.week_count())
            .filter_map(|w| self.week_stats(w))
            .collect()
    }

    /// Highest-scoring habit; the lowest index wins a tie
    pub fn best_habit(&self) -> HabitIndex {
        let mut best = HabitIndex::FIRST;
        let mut best_percent: i64 = -1;
        for habit in HabitIndex::all() {
            let p = self.habit_completion_percent(habit) as i64;
            if p > best_percent {
                best_percent = p;
                best = habit;
            }
        }
        best
    }

    /// Lowest-scoring habit; the lowest index wins a tie
    pub fn worst_habit(&self) -> HabitIndex {
        let mut worst = HabitIndex::FIRST;
        let mut worst_percent: i64 = 101;
        for habit in HabitIndex::all() {
            let p = self.habit_completion_percent(habit) as i64;
            if p < worst_percent {
                worst_percent = p;
                worst = habit;
            }
        }
        worst
    }

    pub fn summary(&self) -> Summary {
        Summary {
            cycle: self.cycle,
            checked: self.total_checked(),
            total: self.total_cells(),
            percent: self.overall_percent(),
            average_per_habit: self.average_per_habit(),
            best: self.habit_stats(self.best_habit()),
            worst: self.habit_stats(self.worst_habit()),
            habits: HabitIndex::all().map(|h| self.habit_stats(h)).collect(),
            weeks: self.weeks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(i: usize) -> HabitIndex {
        HabitIndex::new(i).unwrap()
    }

    fn tick_days(grid: &mut DayGrid, habit: usize, days: impl IntoIterator<Item = usize>) {
        for d in days {
            grid.set(h(habit), d, true);
        }
    }

    #[test]
    fn empty_grid_is_zero_everywhere() {
        let grid = DayGrid::default();
        for cycle in CycleLength::ALL {
            let m = Metrics::new(&grid, cycle);
            assert_eq!(m.overall_percent(), 0);
            assert_eq!(m.total_cells(), 10 * cycle.days());
            assert_eq!(m.running_average_percent(cycle.days() - 1), 0.0);
        }
    }

    #[test]
    fn overall_percent_truncates() {
        let mut grid = DayGrid::default();
        // 7 of 70 cells = 10%; 6 of 70 = 8.57 -> 8
        tick_days(&mut grid, 0, 0..6);
        let m = Metrics::new(&grid, CycleLength::Seven);
        assert_eq!(m.total_checked(), 6);
        assert_eq!(m.overall_percent(), 8);
    }

    #[test]
    fn overall_percent_stays_in_range_for_every_cycle() {
        let mut grid = DayGrid::default();
        for habit in 0..HABIT_COUNT {
            tick_days(&mut grid, habit, (0..80).filter(|d| (d + habit) % 3 == 0));
        }
        for cycle in CycleLength::ALL {
            let m = Metrics::new(&grid, cycle);
            let expected = (m.total_checked() * 100 / (10 * cycle.days())) as u32;
            assert_eq!(m.overall_percent(), expected);
            assert!(m.overall_percent() <= 100);
        }

        let mut full = DayGrid::default();
        for day in 0..80 {
            full.set_column(day, true);
        }
        assert_eq!(Metrics::new(&full, CycleLength::Eighty).overall_percent(), 100);
    }

    #[test]
    fn hidden_columns_are_excluded() {
        let mut grid = DayGrid::default();
        tick_days(&mut grid, 0, [0, 10, 50]);
        let m = Metrics::new(&grid, CycleLength::Seven);
        assert_eq!(m.total_checked(), 1);
        assert_eq!(m.day_completion_percent(10), 0.0);
        assert_eq!(m.day_checked(10), 0);
    }

    #[test]
    fn habit_percent_is_integer_division() {
        let mut grid = DayGrid::default();
        tick_days(&mut grid, 2, 0..20);
        let m = Metrics::new(&grid, CycleLength::Thirty);
        // 20 * 100 / 30 = 66.67 -> 66
        assert_eq!(m.habit_completion_percent(h(2)), 66);
    }

    #[test]
    fn day_percent_and_running_average() {
        let mut grid = DayGrid::default();
        // day 0: 3 habits, day 1: 0, day 2: 10
        tick_days(&mut grid, 0, [0]);
        tick_days(&mut grid, 1, [0]);
        tick_days(&mut grid, 2, [0]);
        grid.set_column(2, true);
        let m = Metrics::new(&grid, CycleLength::Seven);

        assert_eq!(m.day_completion_percent(0), 30.0);
        assert_eq!(m.day_completion_percent(1), 0.0);
        assert_eq!(m.day_completion_percent(2), 100.0);
        assert_eq!(m.running_average_percent(0), 30.0);
        assert_eq!(m.running_average_percent(1), 15.0);
        assert!((m.running_average_percent(2) - 130.0 / 3.0).abs() < 1e-9);
        assert_eq!(m.cumulative_checked(2), 13);
        assert_eq!(m.day_completion_percent(7), 0.0);
        assert_eq!(m.running_average_percent(7), 0.0);
    }

    #[test]
    fn running_average_is_mean_of_daily_percentages() {
        let mut grid = DayGrid::default();
        tick_days(&mut grid, 0, [0, 1, 2]);
        tick_days(&mut grid, 1, [1]);
        let m = Metrics::new(&grid, CycleLength::Seven);
        let daily: Vec<f64> = (0..3).map(|d| m.day_completion_percent(d)).collect();
        let mean = daily.iter().sum::<f64>() / 3.0;
        assert_eq!(m.running_average_percent(2), mean);
    }

    #[test]
    fn best_habit_first_at_max() {
        let mut grid = DayGrid::default();
        // habit 3 at 80% of a 30-day cycle (24 days), habit 6 ties it later
        tick_days(&mut grid, 3, 0..24);
        tick_days(&mut grid, 6, 0..24);
        tick_days(&mut grid, 1, 0..10);
        let m = Metrics::new(&grid, CycleLength::Thirty);
        assert_eq!(m.habit_completion_percent(h(3)), 80);
        assert_eq!(m.best_habit(), h(3));
    }

    #[test]
    fn worst_habit_lowest_index_on_tie() {
        let mut grid = DayGrid::default();
        for habit in 0..HABIT_COUNT {
            tick_days(&mut grid, habit, 0..7);
        }
        grid.clear_row(h(4));
        grid.clear_row(h(8));
        let m = Metrics::new(&grid, CycleLength::Seven);
        assert_eq!(m.worst_habit(), h(4));
        assert_eq!(m.best_habit(), h(0));
    }

    #[test]
    fn all_equal_picks_first_for_both() {
        let grid = DayGrid::default();
        let m = Metrics::new(&grid, CycleLength::Sixty);
        assert_eq!(m.best_habit(), h(0));
        assert_eq!(m.worst_habit(), h(0));
    }

    #[test]
    fn last_week_is_clipped() {
        let mut grid = DayGrid::default();
        grid.set_column(56, true);
        grid.set_column(59, true);
        grid.set_column(60, true); // hidden for a 60-day cycle
        let m = Metrics::new(&grid, CycleLength::Sixty);

        assert_eq!(m.week_count(), 9);
        let week = m.week_stats(8).unwrap();
        assert_eq!(week.week, 9);
        assert_eq!(week.first_day, 57);
        assert_eq!(week.last_day, 60);
        assert_eq!(week.total, 40);
        assert_eq!(week.checked, 20);
        assert_eq!(week.percent, 50);
        assert!(m.week_stats(9).is_none());
    }

    #[test]
    fn thirty_day_cycle_has_two_day_tail() {
        let grid = DayGrid::default();
        let m = Metrics::new(&grid, CycleLength::Thirty);
        let tail = m.week_stats(4).unwrap();
        assert_eq!((tail.first_day, tail.last_day, tail.total), (29, 30, 20));
    }

    #[test]
    fn week_percent_uses_actual_day_count() {
        let mut grid = DayGrid::default();
        grid.set_column(28, true);
        let m = Metrics::new(&grid, CycleLength::Thirty);
        assert_eq!(m.week_completion_percent(4), 50);
        assert_eq!(m.week_completion_percent(0), 0);
    }

    #[test]
    fn summary_bundles_everything() {
        let mut grid = DayGrid::default();
        tick_days(&mut grid, 5, 0..7);
        let m = Metrics::new(&grid, CycleLength::Seven);
        let s = m.summary();
        assert_eq!(s.checked, 7);
        assert_eq!(s.total, 70);
        assert_eq!(s.percent, 10);
        assert_eq!(s.average_per_habit, 0.7);
        assert_eq!(s.best.habit, h(5));
        assert_eq!(s.best.percent, 100);
        assert_eq!(s.worst.habit, h(0));
        assert_eq!(s.habits.len(), HABIT_COUNT);
        assert_eq!(s.weeks.len(), 1);
    }
}
