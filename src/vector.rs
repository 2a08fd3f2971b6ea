/// Approximate equality of two points by component-wise magnitude ratio.
/// Components are equal when they are bitwise equal or share a sign with
/// `min/max` above 0.999. Zero matches only zero and opposite signs never
/// match, so the test stays meaningful around the origin.
pub fn approximately_equals(a: &[f64], b: &[f64]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        if a[i] == b[i] {
            continue;
        }
        if a[i] * b[i] <= 0.0 {
            return false;
        }
        let ratio = a[i].abs().min(b[i].abs()) / a[i].abs().max(b[i].abs());
        if ratio <= 0.999 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_components_are_equal() {
        assert!(approximately_equals(&[1.0, 2.0], &[1.0005, 2.0005]));
        assert!(approximately_equals(&[-3.0, 4.0], &[-3.001, 4.001]));
    }

    #[test]
    fn ratio_below_threshold_is_not_equal() {
        assert!(!approximately_equals(&[1.0, 2.0], &[1.002, 2.0]));
        assert!(!approximately_equals(&[100.0], &[100.2]));
    }

    #[test]
    fn zero_matches_only_zero() {
        assert!(approximately_equals(&[0.0, 1.0], &[0.0, 1.0]));
        assert!(approximately_equals(&[0.0], &[-0.0]));
        assert!(!approximately_equals(&[0.0, 1.0], &[1e-12, 1.0]));
    }

    #[test]
    fn opposite_signs_are_not_equal() {
        assert!(!approximately_equals(&[1.0, 1.0], &[-1.0, 1.0]));
        assert!(!approximately_equals(&[-2.0], &[2.0]));
    }

    #[test]
    fn tiny_magnitudes_compare_by_ratio() {
        assert!(approximately_equals(&[1e-12, 5.0], &[1.0000001e-12, 5.0]));
        assert!(!approximately_equals(&[1e-12, 5.0], &[2e-12, 5.0]));
    }

    #[test]
    fn different_lengths_are_not_equal() {
        assert!(!approximately_equals(&[1.0, 2.0], &[1.0]));
    }
}
