use serde::Serialize;

use crate::model::{HabitIndex, Tracker};
use crate::ops::metrics::{HabitStats, Metrics, Summary, WeekStats};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct HabitRowJson {
    pub number: usize,
    pub name: String,
    /// One entry per day of the active cycle
    pub days: Vec<bool>,
    pub checked: usize,
    pub percent: u32,
}

#[derive(Serialize)]
pub struct GridJson {
    pub cycle: usize,
    pub habits: Vec<HabitRowJson>,
}

#[derive(Serialize)]
pub struct HabitStatsJson {
    pub number: usize,
    pub name: String,
    pub checked: usize,
    pub total: usize,
    pub percent: u32,
}

#[derive(Serialize)]
pub struct WeekJson {
    pub week: usize,
    pub first_day: usize,
    pub last_day: usize,
    pub checked: usize,
    pub total: usize,
    pub percent: u32,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub cycle: usize,
    pub checked: usize,
    pub total: usize,
    pub percent: u32,
    pub average_per_habit: f64,
    pub best: HabitStatsJson,
    pub worst: HabitStatsJson,
    pub habits: Vec<HabitStatsJson>,
    pub weeks: Vec<WeekJson>,
}

#[derive(Serialize)]
pub struct ChartPointJson {
    pub day: usize,
    pub checked: usize,
    pub daily_percent: f64,
    pub average_percent: f64,
}

#[derive(Serialize)]
pub struct CellJson {
    pub habit: usize,
    pub day: usize,
    pub checked: bool,
}

#[derive(Serialize)]
pub struct CycleJson {
    pub cycle: usize,
}

#[derive(Serialize)]
pub struct ExportJson {
    pub path: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn grid_to_json(tracker: &Tracker) -> GridJson {
    let metrics = Metrics::of(tracker);
    let days = tracker.days();
    GridJson {
        cycle: days,
        habits: HabitIndex::all()
            .map(|habit| HabitRowJson {
                number: habit.number(),
                name: tracker.habits.name(habit).to_string(),
                days: tracker.grid.row(habit)[..days].to_vec(),
                checked: metrics.habit_checked(habit),
                percent: metrics.habit_completion_percent(habit),
            })
            .collect(),
    }
}

fn habit_stats_to_json(tracker: &Tracker, stats: &HabitStats) -> HabitStatsJson {
    HabitStatsJson {
        number: stats.habit.number(),
        name: tracker.habits.name(stats.habit).to_string(),
        checked: stats.checked,
        total: stats.total,
        percent: stats.percent,
    }
}

fn week_to_json(week: &WeekStats) -> WeekJson {
    WeekJson {
        week: week.week,
        first_day: week.first_day,
        last_day: week.last_day,
        checked: week.checked,
        total: week.total,
        percent: week.percent,
    }
}

pub fn stats_to_json(tracker: &Tracker, summary: &Summary) -> StatsJson {
    StatsJson {
        cycle: summary.cycle.days(),
        checked: summary.checked,
        total: summary.total,
        percent: summary.percent,
        average_per_habit: summary.average_per_habit,
        best: habit_stats_to_json(tracker, &summary.best),
        worst: habit_stats_to_json(tracker, &summary.worst),
        habits: summary
            .habits
            .iter()
            .map(|h| habit_stats_to_json(tracker, h))
            .collect(),
        weeks: summary.weeks.iter().map(week_to_json).collect(),
    }
}

pub fn chart_point(metrics: &Metrics, day: usize) -> ChartPointJson {
    ChartPointJson {
        day: day + 1,
        checked: metrics.day_checked(day),
        daily_percent: metrics.day_completion_percent(day),
        average_percent: metrics.running_average_percent(day),
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
