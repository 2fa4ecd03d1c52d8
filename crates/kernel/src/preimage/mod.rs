//! Incremental preimage of a sequence of constraint pairs.
//!
//! The preimage is the set of oriented lines keeping every inner point on
//! their left (or on them) and every outer point strictly on their right.
//! It is non-empty exactly when the convex hull of the inner points and the
//! convex hull of the outer points are disjoint, so the engine stores those
//! two hulls and one line witnessing their separation.

pub mod audit;
pub mod separation;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

use crate::config::{LinePolicy, PreimageConfig};
use crate::geometry::{Point, StraightLine};
use crate::hull::ConvexHull;
use crate::predicate::{ExactPredicate, NativeKernel, Orientation};

pub use audit::{AuditError, HullSide, PreimageAudit};
pub use separation::find_separating_line;

/// Precondition violations. Infeasible extensions are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreimageError {
    #[error("constraint pair is degenerate: inner and outer are both {point}")]
    DegeneratePair { point: Point },
    #[error("point {point} is outside the exact range of the arithmetic kernel")]
    CoordinateOutOfRange { point: Point },
    /// The kernel found no line between two distinct points, which an exact
    /// predicate never does.
    #[error("predicate found no line separating {inner} from {outer}")]
    NoSeparatingLine { inner: Point, outer: Point },
}

/// Two lattice points straddling one step of a digital curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PairRepr")]
pub struct ConstraintPair {
    inner: Point,
    outer: Point,
}

#[derive(Deserialize)]
struct PairRepr {
    inner: Point,
    outer: Point,
}

impl TryFrom<PairRepr> for ConstraintPair {
    type Error = PreimageError;
    fn try_from(repr: PairRepr) -> Result<Self, Self::Error> {
        Self::new(repr.inner, repr.outer)
    }
}

impl ConstraintPair {
    pub fn new(inner: Point, outer: Point) -> Result<Self, PreimageError> {
        if inner == outer {
            return Err(PreimageError::DegeneratePair { point: inner });
        }
        Ok(Self { inner, outer })
    }

    pub fn inner(&self) -> Point {
        self.inner
    }

    pub fn outer(&self) -> Point {
        self.outer
    }
}

/// Which end of the recognized run an extension applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    Front,
    Back,
}

/// Number of pairs absorbed on each side of the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Extent {
    pub front: usize,
    pub back: usize,
}

impl Extent {
    /// Total number of pairs, the constructing pair included.
    pub fn len(&self) -> usize {
        1 + self.front + self.back
    }
}

/// Online recognizer of digital straight segments.
///
/// ```
/// use dss_kernel::{Point, Preimage};
///
/// let mut preimage = Preimage::new(Point::new(0, 0), Point::new(0, 1)).unwrap();
/// assert_eq!(preimage.add_front(Point::new(1, 0), Point::new(1, 1)), Ok(true));
/// assert_eq!(preimage.add_front(Point::new(2, 2), Point::new(2, 3)), Ok(false));
/// assert_eq!(preimage.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preimage<K: ExactPredicate = NativeKernel> {
    kernel: K,
    config: PreimageConfig,
    inner: ConvexHull,
    outer: ConvexHull,
    line: StraightLine,
    front_pair: ConstraintPair,
    back_pair: ConstraintPair,
    extent: Extent,
}

impl Preimage<NativeKernel> {
    /// Start from a first pair with native arithmetic and default settings.
    pub fn new(inner: Point, outer: Point) -> Result<Self, PreimageError> {
        Self::with_kernel(NativeKernel, PreimageConfig::default(), inner, outer)
    }

    pub fn with_config(config: PreimageConfig, inner: Point, outer: Point) -> Result<Self, PreimageError> {
        Self::with_kernel(NativeKernel, config, inner, outer)
    }
}

impl<K: ExactPredicate> Preimage<K> {
    /// Start from a first pair with an explicit kernel and configuration.
    ///
    /// Besides the range and degeneracy checks, fails with
    /// [`PreimageError::NoSeparatingLine`] if `kernel` cannot separate two
    /// distinct points, i.e. does not compute exact signs.
    #[instrument(level = "debug", skip(kernel))]
    pub fn with_kernel(
        kernel: K,
        config: PreimageConfig,
        inner: Point,
        outer: Point,
    ) -> Result<Self, PreimageError> {
        let pair = ConstraintPair::new(inner, outer)?;
        check_range(&kernel, pair)?;

        let inner_hull = ConvexHull::from_point(inner);
        let outer_hull = ConvexHull::from_point(outer);
        let line = find_separating_line(&kernel, &inner_hull, &outer_hull)
            .ok_or(PreimageError::NoSeparatingLine { inner, outer })?;

        Ok(Self {
            kernel,
            config,
            inner: inner_hull,
            outer: outer_hull,
            line,
            front_pair: pair,
            back_pair: pair,
            extent: Extent::default(),
        })
    }

    /// Try to extend the run by one pair past its front end.
    ///
    /// Returns `Ok(false)`, leaving the engine untouched, when no line is
    /// compatible with the extended run.
    pub fn add_front(&mut self, inner: Point, outer: Point) -> Result<bool, PreimageError> {
        self.extend(End::Front, inner, outer)
    }

    /// Try to extend the run by one pair before its back end.
    pub fn add_back(&mut self, inner: Point, outer: Point) -> Result<bool, PreimageError> {
        self.extend(End::Back, inner, outer)
    }

    pub fn add(&mut self, end: End, pair: ConstraintPair) -> Result<bool, PreimageError> {
        self.extend(end, pair.inner(), pair.outer())
    }

    #[instrument(level = "trace", skip(self))]
    fn extend(&mut self, end: End, inner: Point, outer: Point) -> Result<bool, PreimageError> {
        let pair = ConstraintPair::new(inner, outer)?;
        check_range(&self.kernel, pair)?;

        let still_separates = self.kernel.orientation(&self.line, inner).is_left_or_on()
            && self.kernel.orientation(&self.line, outer) == Orientation::Right;

        // Along a straight run both points land at a chain end: constant
        // work unless the line has to move.
        let inner_edit = self.inner.insert_undoable(&self.kernel, inner);
        let outer_edit = self.outer.insert_undoable(&self.kernel, outer);

        if still_separates {
            if self.config.line_policy == LinePolicy::Recompute {
                if let Some(line) = find_separating_line(&self.kernel, &self.inner, &self.outer) {
                    self.line = line;
                }
            }
        } else if let Some(line) = find_separating_line(&self.kernel, &self.inner, &self.outer) {
            trace!(?line, "separating line replaced");
            self.line = line;
        } else {
            self.outer.undo(outer_edit);
            self.inner.undo(inner_edit);
            debug!(?end, %inner, %outer, len = self.len(), "extension rejected: hulls intersect");
            return Ok(false);
        }

        match end {
            End::Front => {
                self.front_pair = pair;
                self.extent.front += 1;
            }
            End::Back => {
                self.back_pair = pair;
                self.extent.back += 1;
            }
        }

        if self.config.audit_on_update {
            let audit = self.audit();
            if !audit.all_valid() {
                warn!(errors = ?audit.errors, "preimage invariants violated after update");
            }
        }
        Ok(true)
    }

    /// A line of the current preimage: inner points on its left or on it,
    /// outer points strictly on its right.
    pub fn separating_line(&self) -> &StraightLine {
        &self.line
    }

    /// Whether `line` belongs to the current preimage.
    pub fn admits(&self, line: &StraightLine) -> bool {
        separation::separates(&self.kernel, line, &self.inner, &self.outer)
    }

    pub fn inner_hull(&self) -> &ConvexHull {
        &self.inner
    }

    pub fn outer_hull(&self) -> &ConvexHull {
        &self.outer
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of pairs recognized so far.
    pub fn len(&self) -> usize {
        self.extent.len()
    }

    /// Most recent pair accepted at the front (the first pair initially).
    pub fn front_pair(&self) -> ConstraintPair {
        self.front_pair
    }

    pub fn back_pair(&self) -> ConstraintPair {
        self.back_pair
    }

    pub fn config(&self) -> &PreimageConfig {
        &self.config
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn audit(&self) -> PreimageAudit {
        audit::audit_preimage(&self.kernel, &self.inner, &self.outer, &self.line)
    }

    /// Hulls are convex and the reported line separates them.
    pub fn is_valid(&self) -> bool {
        self.audit().all_valid()
    }
}

fn check_range<K: ExactPredicate>(kernel: &K, pair: ConstraintPair) -> Result<(), PreimageError> {
    for point in [pair.inner(), pair.outer()] {
        if !kernel.supports(point) {
            return Err(PreimageError::CoordinateOutOfRange { point });
        }
    }
    Ok(())
}
