use xychart::ChartError;
use xychart::core::Range;

#[test]
fn new_rejects_inverted_bounds() {
    let result = Range::new(5.0, 2.0);
    assert_eq!(
        result,
        Err(ChartError::InvalidRange { min: 5.0, max: 2.0 })
    );
}

#[test]
fn new_rejects_non_finite_bounds() {
    assert!(Range::new(f64::NAN, 1.0).is_err());
    assert!(Range::new(0.0, f64::INFINITY).is_err());
    assert!(Range::new(f64::NEG_INFINITY, 0.0).is_err());
}

#[test]
fn new_accepts_zero_width() {
    let range = Range::new(3.0, 3.0).expect("valid range");
    assert_eq!(range.width(), 0.0);
    assert!(range.contains(3.0));
}

#[test]
fn ordered_swaps_endpoints() {
    let range = Range::ordered(9.0, -2.0);
    assert_eq!(range.min(), -2.0);
    assert_eq!(range.max(), 9.0);
}

#[test]
fn contains_is_inclusive_on_both_bounds() {
    let range = Range::new(-1.0, 4.0).expect("valid range");
    assert!(range.contains(-1.0));
    assert!(range.contains(4.0));
    assert!(!range.contains(4.000001));
    assert!(!range.contains(-1.000001));
}

#[test]
fn scaled_about_center_preserves_center() {
    let range = Range::new(0.0, 10.0).expect("valid range");
    let padded = range.scaled_about_center(1.05);

    assert!((padded.min() - (-0.25)).abs() <= 1e-12);
    assert!((padded.max() - 10.25).abs() <= 1e-12);
    assert!((padded.width() - 10.5).abs() <= 1e-12);
}

#[test]
fn scaled_about_center_of_zero_width_is_identity() {
    let range = Range::new(7.0, 7.0).expect("valid range");
    let padded = range.scaled_about_center(1.05);
    assert_eq!(padded, range);
}

#[test]
fn shifted_preserves_width() {
    let range = Range::new(2.0, 8.0).expect("valid range");
    let moved = range.shifted(-3.5);

    assert_eq!(moved.min(), -1.5);
    assert_eq!(moved.max(), 4.5);
    assert_eq!(moved.width(), range.width());
}

#[test]
fn unit_range_is_zero_to_one() {
    assert_eq!(Range::UNIT.min(), 0.0);
    assert_eq!(Range::UNIT.max(), 1.0);
}
