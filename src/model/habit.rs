use std::fmt;

use serde::Serialize;

/// Number of tracked habits. Fixed for the lifetime of the data files.
pub const HABIT_COUNT: usize = 10;

/// Size of one on-disk name buffer, including the NUL terminator.
pub const NAME_LEN: usize = 64;

/// Longest name (in bytes) that fits in a name buffer.
pub const MAX_NAME_BYTES: usize = NAME_LEN - 1;

/// Index of one of the ten habits (0-based internally, shown 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HabitIndex(usize);

impl HabitIndex {
    pub const FIRST: HabitIndex = HabitIndex(0);

    pub fn new(index: usize) -> Option<Self> {
        (index < HABIT_COUNT).then_some(HabitIndex(index))
    }

    /// Parse a 1-based habit number as typed by a user
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::new)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn number(self) -> usize {
        self.0 + 1
    }

    pub fn all() -> impl Iterator<Item = HabitIndex> {
        (0..HABIT_COUNT).map(HabitIndex)
    }
}

impl fmt::Display for HabitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Habit {
    pub name: String,
}

/// Built-in name for a habit slot ("Habit 1" .. "Habit 10")
pub fn default_name(index: HabitIndex) -> String {
    format!("Habit {}", index.number())
}

/// The ten habits, in stable display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitSet {
    habits: [Habit; HABIT_COUNT],
}

impl Default for HabitSet {
    fn default() -> Self {
        HabitSet {
            habits: std::array::from_fn(|i| Habit {
                name: default_name(HabitIndex(i)),
            }),
        }
    }
}

impl HabitSet {
    pub fn name(&self, index: HabitIndex) -> &str {
        &self.habits[index.0].name
    }

    /// Store a name verbatim. Validation lives in `ops::habit_ops`.
    pub fn set_name(&mut self, index: HabitIndex, name: String) {
        self.habits[index.0].name = name;
    }

    pub fn iter(&self) -> impl Iterator<Item = (HabitIndex, &Habit)> {
        self.habits
            .iter()
            .enumerate()
            .map(|(i, h)| (HabitIndex(i), h))
    }
}

/// Trim a user-supplied name and cut it to the name buffer limit.
/// Returns None when nothing but whitespace was given.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut end = trimmed.len().min(MAX_NAME_BYTES);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    Some(trimmed[..end].to_string())
}
