use std::fmt;

use serde::Serialize;

/// Number of active days in the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u32")]
pub enum CycleLength {
    Seven,
    Thirty,
    #[default]
    Sixty,
    Eighty,
}

impl CycleLength {
    pub const ALL: [CycleLength; 4] = [
        CycleLength::Seven,
        CycleLength::Thirty,
        CycleLength::Sixty,
        CycleLength::Eighty,
    ];

    pub fn days(self) -> usize {
        match self {
            CycleLength::Seven => 7,
            CycleLength::Thirty => 30,
            CycleLength::Sixty => 60,
            CycleLength::Eighty => 80,
        }
    }

    /// Exact match only
    pub fn from_days(days: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.days() as i64 == days)
    }

    /// Normalize a stored value: anything outside {7, 30, 60, 80} becomes
    /// the default.
    pub fn from_raw(raw: i32) -> Self {
        Self::from_days(raw as i64).unwrap_or_default()
    }

    /// Next length in the picker order, wrapping around
    pub fn next(self) -> Self {
        match self {
            CycleLength::Seven => CycleLength::Thirty,
            CycleLength::Thirty => CycleLength::Sixty,
            CycleLength::Sixty => CycleLength::Eighty,
            CycleLength::Eighty => CycleLength::Seven,
        }
    }

    /// Number of 7-day windows, the last one possibly shorter
    pub fn week_count(self) -> usize {
        self.days().div_ceil(7)
    }
}

impl From<CycleLength> for u32 {
    fn from(c: CycleLength) -> u32 {
        c.days() as u32
    }
}

impl fmt::Display for CycleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}
