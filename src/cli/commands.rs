use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "habits", about = concat!("habits v", env!("CARGO_PKG_VERSION"), " - ten habits, one grid"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the grid for the active cycle
    Show,
    /// Flip one cell
    Toggle(CellArgs),
    /// Tick one cell
    Check(CellArgs),
    /// Untick one cell
    Uncheck(CellArgs),
    /// Tick every habit on one day
    Fill(DayArgs),
    /// Untick every habit on one day
    ClearDay(DayArgs),
    /// Untick one habit on every day
    ClearHabit(HabitArgs),
    /// Rename a habit
    Rename(RenameArgs),
    /// Show or change the cycle length
    Cycle(CycleArgs),
    /// Untick the whole grid
    Reset(ResetArgs),
    /// Show completion statistics
    Stats,
    /// Write the stats report to the export file
    Export,
    /// Show daily and running-average completion per day
    Chart(ChartArgs),
    /// Show the recovery log of failed saves
    Recovery(RecoveryArgs),
}

// ---------------------------------------------------------------------------
// Args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct CellArgs {
    /// Habit number (1-10)
    pub habit: usize,
    /// Day number (1-based, within the active cycle)
    pub day: usize,
}

#[derive(Args)]
pub struct DayArgs {
    /// Day number (1-based, within the active cycle)
    pub day: usize,
}

#[derive(Args)]
pub struct HabitArgs {
    /// Habit number (1-10)
    pub habit: usize,
}

#[derive(Args)]
pub struct RenameArgs {
    /// Habit number (1-10)
    pub habit: usize,
    /// New name (trimmed, at most 63 bytes)
    pub name: String,
}

#[derive(Args)]
pub struct CycleArgs {
    /// New cycle length: 7, 30, 60 or 80 (omit to print the current one)
    pub days: Option<i64>,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Confirm clearing every tick
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Only show the readout for this day (1-based)
    #[arg(long)]
    pub day: Option<usize>,
}

#[derive(Args)]
pub struct RecoveryArgs {
    /// Maximum number of entries to show (newest last)
    #[arg(long, default_value = "10")]
    pub limit: usize,
    /// Print the log path and exit
    #[arg(long)]
    pub path: bool,
}
