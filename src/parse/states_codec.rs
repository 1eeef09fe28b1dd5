use crate::model::grid::{DayGrid, MAX_DAY_COUNT};
use crate::model::habit::HABIT_COUNT;

/// Size of a complete states.dat: one byte per cell, row-major by habit.
pub const STATES_FILE_LEN: usize = HABIT_COUNT * MAX_DAY_COUNT;

/// Decode states.dat bytes.
///
/// A short file keeps the cells it has and leaves the rest unticked.
/// Bytes past the full length are ignored. Any non-zero byte is a tick.
pub fn parse_states(bytes: &[u8]) -> DayGrid {
    DayGrid::from_cells(bytes.iter().map(|&b| b != 0))
}

pub fn serialize_states(grid: &DayGrid) -> Vec<u8> {
    grid.cells().map(u8::from).collect()
}
