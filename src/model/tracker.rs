use std::path::PathBuf;

use super::config::Config;
use super::cycle::CycleLength;
use super::grid::DayGrid;
use super::habit::HabitSet;

/// All tracker state, owned in one place and passed by reference.
#[derive(Debug, Clone)]
pub struct Tracker {
    /// Directory holding the .dat files, config and recovery log
    pub data_dir: PathBuf,
    pub config: Config,
    pub habits: HabitSet,
    pub grid: DayGrid,
    pub cycle: CycleLength,
}

impl Tracker {
    /// Fresh in-memory state with defaults for everything
    pub fn new(data_dir: PathBuf) -> Self {
        Tracker {
            data_dir,
            config: Config::default(),
            habits: HabitSet::default(),
            grid: DayGrid::default(),
            cycle: CycleLength::default(),
        }
    }

    pub fn days(&self) -> usize {
        self.cycle.days()
    }

    pub fn export_path(&self) -> PathBuf {
        self.data_dir.join(&self.config.export.path)
    }
}
