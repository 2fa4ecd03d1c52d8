pub mod config;
pub mod geometry;
pub mod hull;
pub mod predicate;
pub mod preimage;

// Re-export the working set at crate root for convenience.
pub use config::{LinePolicy, PreimageConfig};
pub use geometry::{LineError, Point, StraightLine, Vector};
pub use hull::ConvexHull;
pub use predicate::{BigIntKernel, ExactPredicate, NativeKernel, Orientation};
pub use preimage::{ConstraintPair, End, Extent, Preimage, PreimageAudit, PreimageError};
