use super::geometry::PlotArea;

/// Remembers which day the pointer is over so callers redraw only on change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    day: Option<usize>,
}

impl HoverTracker {
    pub fn day(&self) -> Option<usize> {
        self.day
    }

    /// Feed a pointer position. Returns true when the hovered day changed.
    pub fn update(&mut self, area: &PlotArea, x: f64, y: f64, days: usize) -> bool {
        self.set(area.day_at(x, y, days))
    }

    /// Pointer left the chart. Returns true when a day was hovered before.
    pub fn leave(&mut self) -> bool {
        self.set(None)
    }

    fn set(&mut self, day: Option<usize>) -> bool {
        let changed = self.day != day;
        self.day = day;
        changed
    }
}
