use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::recovery;
use crate::io::store_io::{StoreError, load_tracker};
use crate::model::{CycleLength, HabitIndex, Tracker};
use crate::ops::metrics::Metrics;
use crate::ops::{Change, export, grid_ops, habit_ops};
use crate::util::unicode::{display_width, fit_to_width};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let dir = resolve_data_dir(cli.dir.as_deref())?;

    let Some(cmd) = cli.command else {
        return crate::tui::run(&dir);
    };

    let mut tracker = load_tracker_cli(&dir);
    match cmd {
        // Read commands
        Commands::Show => cmd_show(&tracker, json),
        Commands::Stats => cmd_stats(&tracker, json),
        Commands::Chart(args) => cmd_chart(&tracker, args, json),
        Commands::Recovery(args) => cmd_recovery(&tracker, args),

        // Write commands
        Commands::Toggle(args) => {
            let (habit, day) = cell(&tracker, &args)?;
            persisted(grid_ops::toggle(&mut tracker, habit, day));
            report_cell(&tracker, habit, day, json)
        }
        Commands::Check(args) => cmd_set_tick(&mut tracker, args, true, json),
        Commands::Uncheck(args) => cmd_set_tick(&mut tracker, args, false, json),
        Commands::Fill(args) => cmd_fill(&mut tracker, args, true),
        Commands::ClearDay(args) => cmd_fill(&mut tracker, args, false),
        Commands::ClearHabit(args) => {
            let habit = habit_arg(args.habit)?;
            persisted(grid_ops::clear_habit(&mut tracker, habit));
            println!("Cleared {}", tracker.habits.name(habit));
            Ok(())
        }
        Commands::Rename(args) => cmd_rename(&mut tracker, args),
        Commands::Cycle(args) => cmd_cycle(&mut tracker, args, json),
        Commands::Reset(args) => cmd_reset(&mut tracker, args),
        Commands::Export => cmd_export(&tracker, json),
    }
}

/// `-C` override, else the current directory
fn resolve_data_dir(dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match dir {
        Some(dir) => Ok(std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?),
        None => Ok(std::env::current_dir()?),
    }
}

/// Load the tracker, passing fallback warnings on to stderr
fn load_tracker_cli(dir: &std::path::Path) -> Tracker {
    let (tracker, warnings) = load_tracker(dir);
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
    tracker
}

/// A failed save keeps the change in memory and is already in the recovery
/// log; the command goes on and reports it as a warning.
fn persisted(result: Result<Change, StoreError>) -> Change {
    match result {
        Ok(change) => change,
        Err(e) => {
            eprintln!("warning: {} (see .recovery.log)", e);
            Change::Applied
        }
    }
}

// ---------------------------------------------------------------------------
// Argument checks
// ---------------------------------------------------------------------------

fn habit_arg(number: usize) -> Result<HabitIndex, String> {
    HabitIndex::from_number(number)
        .ok_or_else(|| format!("habit must be between 1 and 10, got {}", number))
}

/// 1-based day inside the active cycle, returned 0-based
fn day_arg(tracker: &Tracker, day: usize) -> Result<usize, String> {
    if day == 0 || day > tracker.days() {
        return Err(format!(
            "day must be between 1 and {}, got {}",
            tracker.days(),
            day
        ));
    }
    Ok(day - 1)
}

fn cell(tracker: &Tracker, args: &CellArgs) -> Result<(HabitIndex, usize), String> {
    Ok((habit_arg(args.habit)?, day_arg(tracker, args.day)?))
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_show(tracker: &Tracker, json: bool) -> CmdResult {
    if json {
        return print_json(&grid_to_json(tracker));
    }

    let metrics = Metrics::of(tracker);
    let days = tracker.days();
    let name_width = HabitIndex::all()
        .map(|h| display_width(tracker.habits.name(h)))
        .max()
        .unwrap_or(0)
        .min(24);

    println!("{} Day Tracker", days);
    for habit in HabitIndex::all() {
        let cells: String = tracker.grid.row(habit)[..days]
            .iter()
            .map(|&c| if c { 'x' } else { '.' })
            .collect();
        println!(
            "{:>2} {} {} {:>3}%",
            habit.number(),
            fit_to_width(tracker.habits.name(habit), name_width),
            cells,
            metrics.habit_completion_percent(habit)
        );
    }
    Ok(())
}

fn cmd_stats(tracker: &Tracker, json: bool) -> CmdResult {
    let summary = Metrics::of(tracker).summary();
    if json {
        return print_json(&stats_to_json(tracker, &summary));
    }

    println!(
        "Total complete: {} / {} ({}%)",
        summary.checked, summary.total, summary.percent
    );
    println!(
        "Average per habit: {:.1} / {} days",
        summary.average_per_habit,
        summary.cycle.days()
    );
    println!(
        "Best habit: {} ({}%)",
        tracker.habits.name(summary.best.habit),
        summary.best.percent
    );
    println!(
        "Needs focus: {} ({}%)",
        tracker.habits.name(summary.worst.habit),
        summary.worst.percent
    );
    println!();
    for week in &summary.weeks {
        println!(
            "W{} (D{}-D{}): {}%",
            week.week, week.first_day, week.last_day, week.percent
        );
    }
    Ok(())
}

fn cmd_chart(tracker: &Tracker, args: ChartArgs, json: bool) -> CmdResult {
    let metrics = Metrics::of(tracker);
    let days: Vec<usize> = match args.day {
        Some(day) => vec![day_arg(tracker, day)?],
        None => (0..tracker.days()).collect(),
    };

    if json {
        let points: Vec<ChartPointJson> = days.iter().map(|&d| chart_point(&metrics, d)).collect();
        return print_json(&points);
    }

    for day in days {
        let point = chart_point(&metrics, day);
        println!(
            "D{:<3} daily {:>6.2}%  avg {:>6.2}%  ({}/10)",
            point.day, point.daily_percent, point.average_percent, point.checked
        );
    }
    Ok(())
}

fn cmd_recovery(tracker: &Tracker, args: RecoveryArgs) -> CmdResult {
    let path = recovery::recovery_log_path(&tracker.data_dir);
    if args.path {
        println!("{}", path.display());
        return Ok(());
    }

    let entries = recovery::read_entries(&tracker.data_dir);
    if entries.is_empty() {
        println!("No recovery entries.");
        return Ok(());
    }
    let skip = entries.len().saturating_sub(args.limit);
    for entry in &entries[skip..] {
        println!("{}", entry);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn report_cell(tracker: &Tracker, habit: HabitIndex, day: usize, json: bool) -> CmdResult {
    let checked = tracker.grid.get(habit, day);
    if json {
        return print_json(&CellJson {
            habit: habit.number(),
            day: day + 1,
            checked,
        });
    }
    println!(
        "{} day {}: {}",
        tracker.habits.name(habit),
        day + 1,
        if checked { "checked" } else { "unchecked" }
    );
    Ok(())
}

fn cmd_set_tick(tracker: &mut Tracker, args: CellArgs, value: bool, json: bool) -> CmdResult {
    let (habit, day) = cell(tracker, &args)?;
    persisted(grid_ops::set_tick(tracker, habit, day, value));
    report_cell(tracker, habit, day, json)
}

fn cmd_fill(tracker: &mut Tracker, args: DayArgs, value: bool) -> CmdResult {
    let day = day_arg(tracker, args.day)?;
    persisted(grid_ops::fill_day(tracker, day, value));
    let verb = if value { "Filled" } else { "Cleared" };
    println!("{} day {}", verb, day + 1);
    Ok(())
}

fn cmd_rename(tracker: &mut Tracker, args: RenameArgs) -> CmdResult {
    let habit = habit_arg(args.habit)?;
    match persisted(habit_ops::rename_habit(tracker, habit, &args.name)) {
        Change::Applied => println!("Renamed habit {} to {}", habit, tracker.habits.name(habit)),
        Change::Ignored => return Err("name must not be blank".into()),
    }
    Ok(())
}

fn cmd_cycle(tracker: &mut Tracker, args: CycleArgs, json: bool) -> CmdResult {
    if let Some(days) = args.days {
        let cycle = CycleLength::from_days(days)
            .ok_or_else(|| format!("cycle must be one of 7, 30, 60, 80, got {}", days))?;
        persisted(grid_ops::set_cycle(tracker, cycle));
    }
    if json {
        return print_json(&CycleJson {
            cycle: tracker.days(),
        });
    }
    println!("{} Day Tracker", tracker.days());
    Ok(())
}

fn cmd_reset(tracker: &mut Tracker, args: ResetArgs) -> CmdResult {
    if !args.yes {
        return Err("reset clears every checked box; pass --yes to confirm".into());
    }
    persisted(grid_ops::reset_all(tracker));
    println!("All progress reset");
    Ok(())
}

fn cmd_export(tracker: &Tracker, json: bool) -> CmdResult {
    let path = export::export_stats(tracker)?;
    if json {
        return print_json(&ExportJson {
            path: path.display().to_string(),
        });
    }
    println!("Stats exported to {}", path.display());
    Ok(())
}
