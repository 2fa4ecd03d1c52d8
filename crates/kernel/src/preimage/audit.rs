use tracing::{debug, instrument};

use crate::geometry::{Point, StraightLine};
use crate::hull::ConvexHull;
use crate::predicate::{ExactPredicate, Orientation};

/// Which of the two hulls a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullSide {
    Inner,
    Outer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    EmptyHull { side: HullSide },
    NotConvex { side: HullSide },
    InnerPointRightOfLine { point: Point },
    OuterPointNotRightOfLine { point: Point, orientation: Orientation },
}

/// Result of checking an engine's internal invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreimageAudit {
    pub inner_convex: bool,
    pub outer_convex: bool,
    pub line_separates: bool,
    pub errors: Vec<AuditError>,
}

impl PreimageAudit {
    pub fn all_valid(&self) -> bool {
        self.inner_convex && self.outer_convex && self.line_separates
    }
}

/// Check both hulls and the reported line against each other.
#[instrument(level = "debug", skip_all)]
pub fn audit_preimage<K: ExactPredicate>(
    kernel: &K,
    inner: &ConvexHull,
    outer: &ConvexHull,
    line: &StraightLine,
) -> PreimageAudit {
    let mut errors = Vec::new();

    let mut check_hull = |hull: &ConvexHull, side: HullSide| {
        if hull.is_empty() {
            errors.push(AuditError::EmptyHull { side });
            false
        } else if !hull.is_convex(kernel) {
            errors.push(AuditError::NotConvex { side });
            false
        } else {
            true
        }
    };
    let inner_convex = check_hull(inner, HullSide::Inner);
    let outer_convex = check_hull(outer, HullSide::Outer);

    let mut line_separates = true;
    for point in inner.vertices() {
        if kernel.orientation(line, point) == Orientation::Right {
            line_separates = false;
            errors.push(AuditError::InnerPointRightOfLine { point });
        }
    }
    for point in outer.vertices() {
        let orientation = kernel.orientation(line, point);
        if orientation != Orientation::Right {
            line_separates = false;
            errors.push(AuditError::OuterPointNotRightOfLine { point, orientation });
        }
    }

    debug!(
        inner_convex,
        outer_convex,
        line_separates,
        error_count = errors.len(),
        "preimage audit complete"
    );

    PreimageAudit {
        inner_convex,
        outer_convex,
        line_separates,
        errors,
    }
}
