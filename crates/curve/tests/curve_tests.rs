//! Recognition of straight runs along grid curves.

use dss_curve::{longest_straight_prefix, longest_straight_suffix, CurveError, GridCurve};
use dss_kernel::{ExactPredicate, NativeKernel, Orientation, Point};
use proptest::prelude::*;

fn p(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

/// Boundary of the pixels under `y = a x / b`, `0 <= a <= b`, over `n` columns.
fn staircase(a: i64, b: i64, n: i64) -> String {
    let mut codes = String::new();
    for k in 0..n {
        codes.push('0');
        if (a * (k + 1)).div_euclid(b) > (a * k).div_euclid(b) {
            codes.push('1');
        }
    }
    codes
}

/// Rotate a chain code by `quarter_turns` counter-clockwise.
fn rotate(codes: &str, quarter_turns: u32) -> String {
    codes
        .chars()
        .filter_map(|c| c.to_digit(4))
        .filter_map(|d| char::from_digit((d + quarter_turns) % 4, 10))
        .collect()
}

#[test]
fn corner_splits_two_runs() {
    let curve = GridCurve::from_freeman(p(0, 0), "00001111").unwrap();
    let prefix = longest_straight_prefix(curve.incident_pairs()).unwrap().unwrap();
    // The first vertical step still fits under a slightly rising line.
    assert_eq!(prefix.len, 5);
    let suffix = longest_straight_suffix(curve.incident_pairs()).unwrap().unwrap();
    assert_eq!(suffix.len, 5);
}

#[test]
fn closed_square_prefix() {
    let square = GridCurve::from_freeman(p(0, 0), "00112233").unwrap();
    assert!(square.is_closed());
    assert_eq!(square.incident_pairs().count(), 8);
    let run = longest_straight_prefix(square.incident_pairs()).unwrap().unwrap();
    assert_eq!(run.len, 3);
}

#[test]
fn text_curve_is_recognized() {
    let text = "\
# y = floor(x / 2) along its lower boundary
0 0
1 0
2 0
2 1
3 1
4 1
4 2
5 2
";
    let curve: GridCurve = text.parse().unwrap();
    assert_eq!(curve.freeman_code(), "0010010");
    let run = longest_straight_prefix(curve.incident_pairs()).unwrap().unwrap();
    assert_eq!(run.len, curve.len());
    assert!(run.preimage.is_valid());
}

#[test]
fn json_roundtrip_validates() {
    let curve = GridCurve::from_freeman(p(0, 0), "0123").unwrap();
    let json = serde_json::to_string(&curve).unwrap();
    assert_eq!(json, r#"[{"x":0,"y":0},{"x":1,"y":0},{"x":1,"y":1},{"x":0,"y":1},{"x":0,"y":0}]"#);
    let back: GridCurve = serde_json::from_str(&json).unwrap();
    assert_eq!(back, curve);

    let broken = r#"[{"x":0,"y":0},{"x":2,"y":0}]"#;
    assert!(serde_json::from_str::<GridCurve>(broken).is_err());
}

#[test]
fn parse_reports_disconnection() {
    let err = "0 0\n1 0\n1 2\n".parse::<GridCurve>().unwrap_err();
    assert_eq!(err, CurveError::NotConnected { index: 1, from: p(1, 0), to: p(1, 2) });
}

proptest! {
    #[test]
    fn digital_staircases_are_one_run(
        (a, b) in (1i64..=8).prop_flat_map(|b| (0..=b, Just(b))),
        n in 1i64..40,
        turns in 0u32..4,
        (x0, y0) in (-50i64..50, -50i64..50),
    ) {
        let codes = rotate(&staircase(a, b, n), turns);
        let curve = GridCurve::from_freeman(p(x0, y0), &codes).unwrap();
        let run = longest_straight_prefix(curve.incident_pairs()).unwrap().unwrap();
        prop_assert_eq!(run.len, curve.len());
        let run = longest_straight_suffix(curve.incident_pairs()).unwrap().unwrap();
        prop_assert_eq!(run.len, curve.len());
    }

    #[test]
    fn prefix_is_maximal(codes in "[0-3]{1,30}") {
        // Backtracking codes are allowed; their pairs just contradict.
        let curve = GridCurve::from_freeman(p(0, 0), &codes).unwrap();
        let pairs: Vec<_> = curve.incident_pairs().collect();
        let run = longest_straight_prefix(pairs.iter().copied()).unwrap().unwrap();
        prop_assert!(run.len >= 1 && run.len <= pairs.len());

        let line = *run.preimage.separating_line();
        for pair in &pairs[..run.len] {
            prop_assert!(NativeKernel.orientation(&line, pair.inner()).is_left_or_on());
            prop_assert_eq!(NativeKernel.orientation(&line, pair.outer()), Orientation::Right);
        }
        if let Some(next) = pairs.get(run.len) {
            let mut extended = run.preimage.clone();
            prop_assert_eq!(extended.add_front(next.inner(), next.outer()), Ok(false));
        }
    }
}
