pub mod line;
pub mod point;
pub mod vector;

pub use line::{LineError, StraightLine};
pub use point::Point;
pub use vector::Vector;
