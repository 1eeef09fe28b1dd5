use crate::model::HABIT_COUNT;
use crate::ops::metrics::Metrics;

use super::geometry::{PlotArea, tick_days};

const TOOLTIP_W: f64 = 220.0;
const TOOLTIP_H: f64 = 64.0;
const LEGEND_W: f64 = 108.0;
const LEGEND_H: f64 = 42.0;

/// Semantic colour of a primitive. Surfaces map these onto their palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ink {
    Background,
    PlotFill,
    Gridline,
    AxisLabel,
    Daily,
    Average,
    Today,
    Tick,
    LegendBox,
    LegendText,
    HoverLine,
    TooltipBox,
    TooltipText,
}

/// One drawing instruction in surface coordinates (y grows downward)
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        ink: Ink,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        ink: Ink,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        ink: Ink,
    },
    Dot {
        x: f64,
        y: f64,
        radius: f64,
        ink: Ink,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        ink: Ink,
    },
}

/// Hover readout box for one day
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub day: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub lines: [String; 3],
}

/// Everything needed to paint the chart once
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub area: PlotArea,
    pub primitives: Vec<Primitive>,
    pub tooltip: Option<Tooltip>,
}

impl ChartScene {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Build the tooltip for `day`, positioned next to the running-average point.
///
/// The box sits to the right of the day; it flips to the left when it would
/// run past the plot, and is pushed down when it would rise above it.
pub fn tooltip(metrics: &Metrics, area: &PlotArea, day: usize) -> Tooltip {
    let days = metrics.cycle().days();
    let daily = metrics.day_completion_percent(day);
    let avg = metrics.running_average_percent(day);
    let x = area.x_for_day(day, days);
    let y_avg = area.y_for_percent(avg);

    let mut box_x = x + 10.0;
    if box_x + TOOLTIP_W > area.right() {
        box_x = x - TOOLTIP_W - 10.0;
    }
    let box_y = (y_avg - 58.0).max(area.top + 4.0);

    Tooltip {
        day,
        x: box_x,
        y: box_y,
        width: TOOLTIP_W,
        height: TOOLTIP_H,
        lines: [
            format!("Day {}", day + 1),
            format!(
                "Daily: {:.2}% ({}/{})",
                daily,
                metrics.day_checked(day),
                HABIT_COUNT
            ),
            format!(
                "Avg: {:.2}% ({}/{})",
                avg,
                metrics.cumulative_checked(day),
                HABIT_COUNT * (day + 1)
            ),
        ],
    }
}

/// Lay out the whole chart for a `width` × `height` surface.
///
/// Returns None when the surface leaves no room for a plot. A `hover` day
/// outside the cycle is ignored.
pub fn build_scene(
    metrics: &Metrics,
    width: f64,
    height: f64,
    hover: Option<usize>,
) -> Option<ChartScene> {
    let area = PlotArea::new(width, height)?;
    let days = metrics.cycle().days();
    let mut out = Vec::new();

    out.push(Primitive::Rect {
        x: 0.0,
        y: 0.0,
        w: width,
        h: height,
        ink: Ink::Background,
    });
    out.push(Primitive::Rect {
        x: area.left,
        y: area.top,
        w: area.plot_w,
        h: area.plot_h,
        ink: Ink::PlotFill,
    });

    for pct in (0..=100).step_by(25) {
        let y = area.y_for_percent(pct as f64);
        out.push(Primitive::Line {
            x1: area.left,
            y1: y,
            x2: area.right(),
            y2: y,
            ink: Ink::Gridline,
        });
        out.push(Primitive::Text {
            x: 8.0,
            y: y + 4.0,
            text: format!("{}%", pct),
            ink: Ink::AxisLabel,
        });
    }

    let series = |value: &dyn Fn(usize) -> f64| -> Vec<(f64, f64)> {
        (0..days)
            .map(|d| (area.x_for_day(d, days), area.y_for_percent(value(d))))
            .collect()
    };
    out.push(Primitive::Polyline {
        points: series(&|d| metrics.day_completion_percent(d)),
        ink: Ink::Daily,
    });
    out.push(Primitive::Polyline {
        points: series(&|d| metrics.running_average_percent(d)),
        ink: Ink::Average,
    });

    // Today is the last day of the cycle
    let today = days - 1;
    let x_today = area.x_for_day(today, days);
    out.push(Primitive::Line {
        x1: x_today,
        y1: area.top,
        x2: x_today,
        y2: area.bottom(),
        ink: Ink::Today,
    });
    out.push(Primitive::Dot {
        x: x_today,
        y: area.y_for_percent(metrics.running_average_percent(today)),
        radius: 4.5,
        ink: Ink::Today,
    });
    out.push(Primitive::Text {
        x: x_today + 6.0,
        y: area.top + 12.0,
        text: "Today".to_string(),
        ink: Ink::Today,
    });

    for day in tick_days(days) {
        let x = area.x_for_day(day, days);
        out.push(Primitive::Line {
            x1: x,
            y1: area.bottom(),
            x2: x,
            y2: area.bottom() + 4.0,
            ink: Ink::Tick,
        });
        out.push(Primitive::Text {
            x: x - 8.0,
            y: area.bottom() + 16.0,
            text: format!("D{}", day + 1),
            ink: Ink::AxisLabel,
        });
    }

    if area.shows_legend() {
        legend(&area, &mut out);
    }

    let hover_tip = hover.filter(|&d| d < days).map(|day| {
        let x = area.x_for_day(day, days);
        out.push(Primitive::Line {
            x1: x,
            y1: area.top,
            x2: x,
            y2: area.bottom(),
            ink: Ink::HoverLine,
        });
        out.push(Primitive::Dot {
            x,
            y: area.y_for_percent(metrics.day_completion_percent(day)),
            radius: 3.0,
            ink: Ink::Daily,
        });
        out.push(Primitive::Dot {
            x,
            y: area.y_for_percent(metrics.running_average_percent(day)),
            radius: 4.0,
            ink: Ink::Average,
        });
        let tip = tooltip(metrics, &area, day);
        out.push(Primitive::Rect {
            x: tip.x,
            y: tip.y,
            w: tip.width,
            h: tip.height,
            ink: Ink::TooltipBox,
        });
        for (line, dy) in tip.lines.iter().zip([14.0, 30.0, 47.0]) {
            out.push(Primitive::Text {
                x: tip.x + 8.0,
                y: tip.y + dy,
                text: line.clone(),
                ink: Ink::TooltipText,
            });
        }
        tip
    });

    Some(ChartScene {
        area,
        primitives: out,
        tooltip: hover_tip,
    })
}

fn legend(area: &PlotArea, out: &mut Vec<Primitive>) {
    let x = area.right() - 118.0;
    let y = area.top + 8.0;
    out.push(Primitive::Rect {
        x,
        y,
        w: LEGEND_W,
        h: LEGEND_H,
        ink: Ink::LegendBox,
    });
    for (label, ink, dy) in [("Daily", Ink::Daily, 14.0), ("Avg", Ink::Average, 31.0)] {
        out.push(Primitive::Line {
            x1: x + 8.0,
            y1: y + dy,
            x2: x + 30.0,
            y2: y + dy,
            ink,
        });
        out.push(Primitive::Text {
            x: x + 36.0,
            y: y + dy + 3.0,
            text: label.to_string(),
            ink: Ink::LegendText,
        });
    }
}
