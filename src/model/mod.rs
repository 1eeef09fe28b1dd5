pub mod config;
pub mod cycle;
pub mod grid;
pub mod habit;
pub mod tracker;

pub use config::*;
pub use cycle::*;
pub use grid::*;
pub use habit::*;
pub use tracker::*;
