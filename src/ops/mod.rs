pub mod actions;
pub mod export;
pub mod grid_ops;
pub mod habit_ops;
pub mod metrics;

/// Result of a mutator whose input was valid or silently rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Applied,
    Ignored,
}
