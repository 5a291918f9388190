//! Tolerance window check.

/// Default tolerance, in percentage points.
pub const DEFAULT_TOLERANCE: f64 = crate::rubric::ROLE_TOLERANCE_PERCENT;

/// True iff `value` lies in `[target - tolerance, target + tolerance]`.
pub fn within_tolerance_of(value: f64, target: f64, tolerance: f64) -> bool {
    value >= target - tolerance && value <= target + tolerance
}

/// [`within_tolerance_of`] with [`DEFAULT_TOLERANCE`].
pub fn within_tolerance(value: f64, target: f64) -> bool {
    within_tolerance_of(value, target, DEFAULT_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(within_tolerance(57.0, 60.0));
        assert!(within_tolerance(63.0, 60.0));
        assert!(within_tolerance(60.0, 60.0));
        assert!(!within_tolerance(56.999, 60.0));
        assert!(!within_tolerance(63.001, 60.0));
    }

    #[test]
    fn test_role_windows() {
        assert!(within_tolerance(27.0, 30.0) && within_tolerance(33.0, 30.0));
        assert!(!within_tolerance(26.0, 30.0));
        assert!(within_tolerance(7.0, 10.0) && within_tolerance(13.0, 10.0));
        assert!(!within_tolerance(14.0, 10.0));
    }

    #[test]
    fn test_zero_tolerance_is_equality() {
        assert!(within_tolerance_of(10.0, 10.0, 0.0));
        assert!(!within_tolerance_of(10.5, 10.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_symmetric_around_target(v in -1000i32..1000, t in -500i32..500, tol in 0i32..50) {
            let (v, t, tol) = (v as f64, t as f64, tol as f64);
            prop_assert_eq!(
                within_tolerance_of(v, t, tol),
                within_tolerance_of(2.0 * t - v, t, tol)
            );
        }

        #[test]
        fn prop_default_symmetric(v in 0i32..=100, t in 0i32..=100) {
            let (v, t) = (v as f64, t as f64);
            prop_assert_eq!(within_tolerance(v, t), within_tolerance(2.0 * t - v, t));
        }

        #[test]
        fn prop_target_always_within(t in -1.0e6f64..1.0e6, tol in 0.0f64..100.0) {
            prop_assert!(within_tolerance_of(t, t, tol));
        }
    }
}
