//! Trend chart: daily completion and running average over the cycle.
//!
//! The chart is computed on an abstract pixel plane. `geometry` maps days and
//! percentages to coordinates (and pointer positions back to days), `scene`
//! turns the metrics into drawing primitives, and `hover` tracks which day the
//! pointer is over. Painting the primitives is left to the caller.

pub mod geometry;
pub mod hover;
pub mod scene;

pub use geometry::{PlotArea, tick_days};
pub use hover::HoverTracker;
pub use scene::{ChartScene, Ink, Primitive, Tooltip, build_scene, tooltip};
