use std::{error::Error, fmt::Display};

use nalgebra::DVector;

use crate::polynomial;

/// Cubic Bezier segment over four control points sharing one dimension.
/// The curve starts in `p0`, ends in `p3` and is pulled toward the interior
/// control points `p1` and `p2`.
pub struct BezierCurve {
    p0: DVector<f64>,
    p1: DVector<f64>,
    p2: DVector<f64>,
    p3: DVector<f64>,
}

impl BezierCurve {
    /// Creates curve from exactly 4 control points of equal dimension.
    /// # Example
    /// ```
    /// use bezier_spline::BezierCurve;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let curve = BezierCurve::new(vec![
    ///     vec![0.0, 0.0],
    ///     vec![1.0, 2.0],
    ///     vec![-1.0, 3.0],
    ///     vec![2.0, 2.0]
    /// ]).unwrap();
    ///
    /// let point = curve.at(0.25);
    /// assert_approx_eq!(0.3125, point[0], 1e-9);
    /// assert_approx_eq!(1.296875, point[1], 1e-9);
    /// ```
    /// # Errors
    /// Error is returned when number of control points is not 4 or their
    /// dimensions differ.
    /// ```
    /// use bezier_spline::BezierCurve;
    ///
    /// let curve = BezierCurve::new(vec![vec![0.0], vec![1.0], vec![3.0]]);
    /// assert!(curve.is_err());
    /// ```
    pub fn new(control_points: Vec<Vec<f64>>) -> Result<Self, Box<dyn Error>> {
        if control_points.len() != 4 {
            return Err(Box::new(CurveError(
                "Curve must have exactly 4 control points".to_string(),
            )));
        }

        let dimension = control_points[0].len();
        if dimension == 0 {
            return Err(Box::new(CurveError(
                "Control points must have at least one dimension".to_string(),
            )));
        }
        if control_points.iter().any(|point| point.len() != dimension) {
            return Err(Box::new(CurveError(
                "Control points have unequal dimensions".to_string(),
            )));
        }

        Ok(BezierCurve {
            p0: DVector::from_column_slice(&control_points[0]),
            p1: DVector::from_column_slice(&control_points[1]),
            p2: DVector::from_column_slice(&control_points[2]),
            p3: DVector::from_column_slice(&control_points[3]),
        })
    }

    /// Creates one-dimensional curve from 4 scalar control values.
    /// # Example
    /// ```
    /// use bezier_spline::BezierCurve;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let curve = BezierCurve::from_values([1.0, 2.0, 3.0, 4.0]);
    /// assert_approx_eq!(2.5, curve.at(0.5)[0], 1e-9);
    /// ```
    pub fn from_values(values: [f64; 4]) -> Self {
        BezierCurve {
            p0: DVector::from_element(1, values[0]),
            p1: DVector::from_element(1, values[1]),
            p2: DVector::from_element(1, values[2]),
            p3: DVector::from_element(1, values[3]),
        }
    }

    pub(crate) fn from_vectors(
        p0: DVector<f64>,
        p1: DVector<f64>,
        p2: DVector<f64>,
        p3: DVector<f64>,
    ) -> Self {
        BezierCurve { p0, p1, p2, p3 }
    }

    /// Point on the curve at parameter `t`. Values outside of [0, 1] are
    /// silently clamped to the curve ends.
    pub fn at(&self, t: f64) -> Vec<f64> {
        self.evaluate(t).as_slice().to_vec()
    }

    pub(crate) fn evaluate(&self, t: f64) -> DVector<f64> {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;

        &self.p0 * u.powi(3)
            + &self.p1 * (3.0 * u.powi(2) * t)
            + &self.p2 * (3.0 * u * t.powi(2))
            + &self.p3 * t.powi(3)
    }

    /// Parameters in [0, 1] at which the curve coordinate along `axis` equals
    /// `value`, sorted ascending. Panics when `axis` is not lower than the
    /// curve dimension.
    /// # Example
    /// ```
    /// use bezier_spline::BezierCurve;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let curve = BezierCurve::from_values([1.0, 2.0, 3.0, 4.0]);
    ///
    /// let roots = curve.solve(0, 2.5);
    /// assert_eq!(1, roots.len());
    /// assert_approx_eq!(0.5, roots[0], 1e-9);
    /// ```
    pub fn solve(&self, axis: usize, value: f64) -> Vec<f64> {
        let a = -self.p0[axis] + 3.0 * self.p1[axis] - 3.0 * self.p2[axis] + self.p3[axis];
        let b = 3.0 * self.p0[axis] - 6.0 * self.p1[axis] + 3.0 * self.p2[axis];
        let c = -3.0 * self.p0[axis] + 3.0 * self.p1[axis];
        let d = self.p0[axis] - value;

        let mut roots: Vec<f64> = polynomial::solve_cubic(a, b, c, d)
            .into_iter()
            .map(|root| if root == 0.0 { 0.0 } else { root })
            .filter(|root| (0.0..=1.0).contains(root))
            .collect();
        roots.sort_by(f64::total_cmp);
        return roots;
    }

    pub fn get_control_points(&self) -> Vec<Vec<f64>> {
        vec![
            self.p0.as_slice().to_vec(),
            self.p1.as_slice().to_vec(),
            self.p2.as_slice().to_vec(),
            self.p3.as_slice().to_vec(),
        ]
    }

    pub fn get_dimension(&self) -> usize {
        self.p0.len()
    }
}

#[derive(Debug)]
struct CurveError(String);

impl Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in BezierCurve: {}", self.0)
    }
}

impl Error for CurveError {}
