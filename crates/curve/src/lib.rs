pub mod adjacency;
pub mod grid_curve;
pub mod recognition;

pub use adjacency::MetricAdjacency;
pub use grid_curve::{CurveError, GridCurve, Step};
pub use recognition::{longest_straight_prefix, longest_straight_run, longest_straight_suffix, StraightRun};
