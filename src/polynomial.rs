/// Real roots of `a*x + b = 0`. Returns an empty vector when `a` is zero,
/// both for the contradictory and for the identically satisfied equation.
pub fn solve_linear(a: f64, b: f64) -> Vec<f64> {
    if a == 0.0 {
        return Vec::new();
    }
    vec![-b / a]
}

/// Real roots of `a*x^2 + b*x + c = 0`. Delegates to [solve_linear] when `a`
/// is zero. A double root is listed twice.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a == 0.0 {
        return solve_linear(b, c);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let discriminant_root = discriminant.sqrt();
    vec![
        (-b - discriminant_root) / (2.0 * a),
        (-b + discriminant_root) / (2.0 * a),
    ]
}

/// Real roots of `a*x^3 + b*x^2 + c*x + d = 0` in closed form. Delegates to
/// [solve_quadratic] when `a` is zero. Repeated roots of a true cubic are
/// merged, so the result holds 1, 2 or 3 values. Roots are not sorted.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    if a == 0.0 {
        return solve_quadratic(b, c, d);
    }

    let mut discriminant = 18.0 * a * b * c * d;
    discriminant -= 4.0 * b.powi(3) * d;
    discriminant += b.powi(2) * c.powi(2);
    discriminant -= 4.0 * a * c.powi(3);
    discriminant -= 27.0 * a.powi(2) * d.powi(2);

    let d0 = b.powi(2) - 3.0 * a * c;

    if discriminant == 0.0 {
        if d0 == 0.0 {
            // triple root
            return vec![-b / (3.0 * a)];
        }
        let mut root1 = 4.0 * a * b * c;
        root1 -= 9.0 * a * a * d;
        root1 -= b.powi(3);
        root1 /= a * d0;
        let root2 = (9.0 * a * d - b * c) / (2.0 * d0);
        return vec![root1, root2];
    }

    // depressed cubic t^3 + f*t + g = 0 where x = t - b/(3a)
    let f = ((3.0 * c / a) - (b * b / (a * a))) / 3.0;
    let mut g = 2.0 * b.powi(3) / a.powi(3);
    g -= 9.0 * b * c / (a * a);
    g += 27.0 * d / a;
    g /= 27.0;
    let h = g * g / 4.0 + f.powi(3) / 27.0;

    if h > 0.0 {
        // one real root by Cardano formula
        let s = (-g / 2.0 + h.sqrt()).cbrt();
        let u = (-g / 2.0 - h.sqrt()).cbrt();
        return vec![s + u - b / (3.0 * a)];
    }

    // three real roots by trigonometric method; the acos argument is clamped
    // to its domain to absorb rounding at the boundary
    let r = (g * g / 4.0 - h).sqrt();
    let s = r.cbrt();
    let theta = (-g / (2.0 * r)).clamp(-1.0, 1.0).acos();
    let cos_third = (theta / 3.0).cos();
    let sin_third = 3.0_f64.sqrt() * (theta / 3.0).sin();
    let shift = -b / (3.0 * a);

    vec![
        2.0 * s * cos_third + shift,
        -s * (cos_third + sin_third) + shift,
        -s * (cos_third - sin_third) + shift,
    ]
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn linear_root() {
        let eps = 1e-9;
        let roots = solve_linear(2.0, -4.0);

        assert_eq!(1, roots.len());
        assert_approx_eq!(2.0, roots[0], eps);
    }

    #[test]
    fn linear_with_zero_slope_has_no_roots() {
        assert!(solve_linear(0.0, 5.0).is_empty());
        assert!(solve_linear(0.0, 0.0).is_empty());
    }

    #[test]
    fn quadratic_two_roots() {
        let eps = 1e-9;
        let roots = solve_quadratic(1.0, -3.0, 2.0);

        assert_eq!(2, roots.len());
        assert_approx_eq!(1.0, roots[0], eps);
        assert_approx_eq!(2.0, roots[1], eps);
    }

    #[test]
    fn quadratic_double_root_is_listed_twice() {
        let eps = 1e-9;
        let roots = solve_quadratic(1.0, 2.0, 1.0);

        assert_eq!(2, roots.len());
        assert_approx_eq!(-1.0, roots[0], eps);
        assert_approx_eq!(-1.0, roots[1], eps);
    }

    #[test]
    fn quadratic_with_negative_discriminant_has_no_roots() {
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_empty());
        assert!(solve_quadratic(2.0, 1.0, 3.0).is_empty());
    }

    #[test]
    fn quadratic_degenerates_to_linear() {
        let eps = 1e-9;
        let roots = solve_quadratic(0.0, 2.0, -4.0);

        assert_eq!(1, roots.len());
        assert_approx_eq!(2.0, roots[0], eps);
    }

    #[test]
    fn cubic_degenerates_to_quadratic() {
        let eps = 1e-9;
        let roots = solve_cubic(0.0, 1.0, -3.0, 2.0);

        assert_eq!(2, roots.len());
        assert_approx_eq!(1.0, roots[0], eps);
        assert_approx_eq!(2.0, roots[1], eps);
    }

    #[test]
    fn cubic_triple_root_is_listed_once() {
        let eps = 1e-9;
        // (x + 1)^3
        let roots = solve_cubic(1.0, 3.0, 3.0, 1.0);

        assert_eq!(1, roots.len());
        assert_approx_eq!(-1.0, roots[0], eps);
    }

    #[test]
    fn cubic_double_and_simple_root() {
        let eps = 1e-9;
        // (x - 1)(x - 2)^2
        let roots = solve_cubic(1.0, -5.0, 8.0, -4.0);

        assert_eq!(2, roots.len());
        assert_approx_eq!(1.0, roots[0], eps);
        assert_approx_eq!(2.0, roots[1], eps);
    }

    #[test]
    fn cubic_single_real_root() {
        let eps = 1e-9;
        let roots = solve_cubic(1.0, 0.0, 0.0, -2.0);

        assert_eq!(1, roots.len());
        assert_approx_eq!(2.0_f64.cbrt(), roots[0], eps);

        let roots = solve_cubic(1.0, 0.0, 0.0, 8.0);

        assert_eq!(1, roots.len());
        assert_approx_eq!(-2.0, roots[0], eps);
    }

    #[test]
    fn cubic_three_real_roots() {
        let eps = 1e-9;
        // (x - 1)(x - 2)(x - 3)
        let mut roots = solve_cubic(1.0, -6.0, 11.0, -6.0);
        roots.sort_by(f64::total_cmp);

        assert_eq!(3, roots.len());
        assert_approx_eq!(1.0, roots[0], eps);
        assert_approx_eq!(2.0, roots[1], eps);
        assert_approx_eq!(3.0, roots[2], eps);
    }

    #[test]
    fn cubic_with_all_zero_coefficients_has_no_roots() {
        assert!(solve_cubic(0.0, 0.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn near_triple_root_stays_finite() {
        // perturbations of (x - 1)^3 push the acos argument against its
        // domain boundary
        for exponent in 10..16 {
            let delta = 10.0_f64.powi(-exponent);
            let roots = solve_cubic(1.0, -3.0 - delta, 3.0 + delta, -1.0);

            assert!(!roots.is_empty());
            for root in roots {
                assert!(root.is_finite());
                assert_approx_eq!(1.0, root, 1e-3);
            }
        }
    }

    #[test]
    fn random_cubic_roots_satisfy_equation() {
        use rand::Rng;

        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let a = rng.gen_range(0.5..5.0);
            let b = rng.gen_range(-5.0..5.0);
            let c = rng.gen_range(-5.0..5.0);
            let d = rng.gen_range(-5.0..5.0);

            for root in solve_cubic(a, b, c, d) {
                assert!(root.is_finite());
                let residual = (((a * root + b) * root + c) * root + d).abs();
                let tolerance = 1e-4 * (1.0 + root.abs()).powi(3);
                assert!(
                    residual < tolerance,
                    "root {} of {}x^3 + {}x^2 + {}x + {} has residual {}",
                    root, a, b, c, d, residual
                );
            }
        }
    }
}
