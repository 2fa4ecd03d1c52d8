//! Greedy recognition of the longest straight run at either end of a
//! sequence of constraint pairs.

use dss_kernel::{ConstraintPair, End, ExactPredicate, NativeKernel, Preimage, PreimageConfig, PreimageError};
use tracing::{debug, instrument};

/// A maximal run of pairs absorbed by one preimage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StraightRun<K: ExactPredicate = NativeKernel> {
    pub preimage: Preimage<K>,
    /// Number of pairs taken from the input.
    pub len: usize,
}

/// Start a preimage on the first pair and extend it at its front until a
/// pair breaks straightness or the input ends. `None` for an empty input.
pub fn longest_straight_prefix<I>(pairs: I) -> Result<Option<StraightRun>, PreimageError>
where
    I: IntoIterator<Item = ConstraintPair>,
{
    longest_straight_run(NativeKernel, PreimageConfig::default(), End::Front, pairs)
}

/// Same as [`longest_straight_prefix`], walking from the last pair and
/// extending the preimage at its back.
pub fn longest_straight_suffix<I>(pairs: I) -> Result<Option<StraightRun>, PreimageError>
where
    I: IntoIterator<Item = ConstraintPair>,
    I::IntoIter: DoubleEndedIterator,
{
    longest_straight_run(
        NativeKernel,
        PreimageConfig::default(),
        End::Back,
        pairs.into_iter().rev(),
    )
}

/// Greedy driver behind the prefix and suffix helpers. `pairs` is consumed
/// in the order it is yielded, each pair being offered at `end`.
#[instrument(level = "debug", skip(kernel, pairs))]
pub fn longest_straight_run<K, I>(
    kernel: K,
    config: PreimageConfig,
    end: End,
    pairs: I,
) -> Result<Option<StraightRun<K>>, PreimageError>
where
    K: ExactPredicate,
    I: IntoIterator<Item = ConstraintPair>,
{
    let mut pairs = pairs.into_iter();
    let Some(first) = pairs.next() else {
        return Ok(None);
    };
    let mut preimage = Preimage::with_kernel(kernel, config, first.inner(), first.outer())?;
    for pair in pairs {
        if !preimage.add(end, pair)? {
            debug!(len = preimage.len(), inner = %pair.inner(), "straight run ends");
            break;
        }
    }
    let len = preimage.len();
    Ok(Some(StraightRun { preimage, len }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dss_kernel::{BigIntKernel, Point};

    fn pair(ix: i64, iy: i64, ox: i64, oy: i64) -> ConstraintPair {
        ConstraintPair::new(Point::new(ix, iy), Point::new(ox, oy)).unwrap()
    }

    fn rows() -> Vec<ConstraintPair> {
        vec![pair(0, 0, 0, 1), pair(1, 0, 1, 1), pair(2, 0, 2, 1), pair(3, 2, 3, 3)]
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(longest_straight_prefix(Vec::new()), Ok(None));
        assert_eq!(longest_straight_suffix(Vec::new()), Ok(None));
    }

    #[test]
    fn test_prefix_stops_at_first_break() {
        let run = longest_straight_prefix(rows()).unwrap().unwrap();
        assert_eq!(run.len, 3);
        assert_eq!(run.preimage.extent().front, 2);
        assert_eq!(run.preimage.front_pair(), pair(2, 0, 2, 1));
    }

    #[test]
    fn test_suffix_walks_backwards() {
        let run = longest_straight_suffix(rows()).unwrap().unwrap();
        // A steep line through (2, 0) and (3, 2) fits the last two pairs; the
        // outer point (2, 1) then blocks (1, 0).
        assert_eq!(run.len, 2);
        assert_eq!(run.preimage.front_pair(), pair(3, 2, 3, 3));
        assert_eq!(run.preimage.back_pair(), pair(2, 0, 2, 1));

        let mut tail = rows();
        tail.remove(3);
        let run = longest_straight_suffix(tail).unwrap().unwrap();
        assert_eq!(run.len, 3);
        assert_eq!(run.preimage.extent().back, 2);
    }

    #[test]
    fn test_precondition_errors_propagate() {
        let far = pair(i64::MAX, 0, i64::MAX, 1);
        assert!(matches!(
            longest_straight_prefix(vec![pair(0, 0, 0, 1), far]),
            Err(PreimageError::CoordinateOutOfRange { .. })
        ));
        let run = longest_straight_run(BigIntKernel, PreimageConfig::strict(), End::Front, vec![pair(0, 0, 0, 1), far])
            .unwrap()
            .unwrap();
        assert_eq!(run.len, 2);
    }
}
