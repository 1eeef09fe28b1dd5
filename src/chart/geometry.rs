/// Space reserved left of the plot for the percentage labels
pub const MARGIN_LEFT: f64 = 44.0;
pub const MARGIN_RIGHT: f64 = 18.0;
pub const MARGIN_TOP: f64 = 14.0;
/// Space reserved under the plot for the day ticks
pub const MARGIN_BOTTOM: f64 = 28.0;

/// The legend is only drawn when the plot is at least this wide
pub const LEGEND_MIN_WIDTH: f64 = 220.0;

/// Cycles up to this length get a tick for every day
const TICK_EVERY_DAY_MAX: usize = 14;
const TICK_COUNT: usize = 8;

/// Plot rectangle inside a `width` × `height` drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
    pub plot_w: f64,
    pub plot_h: f64,
}

impl PlotArea {
    /// None when the surface is too small to hold any plot
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
        if width <= 0.0 || height <= 0.0 || plot_w <= 0.0 || plot_h <= 0.0 {
            return None;
        }
        Some(PlotArea {
            width,
            height,
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            plot_w,
            plot_h,
        })
    }

    /// Surface size that yields exactly the given plot size
    pub fn with_plot_size(plot_w: f64, plot_h: f64) -> Option<Self> {
        Self::new(
            plot_w + MARGIN_LEFT + MARGIN_RIGHT,
            plot_h + MARGIN_TOP + MARGIN_BOTTOM,
        )
    }

    pub fn right(&self) -> f64 {
        self.left + self.plot_w
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.plot_h
    }

    /// Horizontal position of day `day` (0-based) in a cycle of `days`.
    /// A single-day cycle puts its only point in the middle.
    pub fn x_for_day(&self, day: usize, days: usize) -> f64 {
        if days > 1 {
            self.left + (day as f64 / (days - 1) as f64) * self.plot_w
        } else {
            self.left + self.plot_w * 0.5
        }
    }

    /// Vertical position of a percentage; 100% is the top edge
    pub fn y_for_percent(&self, percent: f64) -> f64 {
        self.top + (100.0 - percent) * (self.plot_h / 100.0)
    }

    /// Inclusive on all four edges
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Nearest day under the pointer, or None when it is outside the plot
    pub fn day_at(&self, x: f64, y: f64, days: usize) -> Option<usize> {
        if days == 0 || !self.contains(x, y) {
            return None;
        }
        let ratio = ((x - self.left) / self.plot_w).clamp(0.0, 1.0);
        Some((ratio * (days - 1) as f64 + 0.5) as usize)
    }

    pub fn shows_legend(&self) -> bool {
        self.plot_w >= LEGEND_MIN_WIDTH
    }
}

/// Days (0-based) that get an x-axis tick.
///
/// Short cycles tick every day; longer ones get eight ticks spread by integer
/// proportion, which always includes the first and the last day.
pub fn tick_days(days: usize) -> Vec<usize> {
    if days == 0 {
        return Vec::new();
    }
    let count = if days <= TICK_EVERY_DAY_MAX {
        days
    } else {
        TICK_COUNT
    };
    (0..count)
        .map(|m| {
            if count == 1 {
                0
            } else {
                m * (days - 1) / (count - 1)
            }
        })
        .collect()
}
