use std::{error::Error, fmt::Display};

use nalgebra::DVector;

use crate::{curve::BezierCurve, thomas, vector};

/// Smooth spline of cubic Bezier segments passing through an ordered sequence
/// of knots of one common dimension.
pub struct BezierSpline {
    knots: Vec<DVector<f64>>,
    weights: Weights,
    curves: Vec<BezierCurve>,
    dimension: usize,
}

enum Weights {
    ChordRatio,
    PerJoint(Vec<f64>),
    Rule(Box<dyn Fn(usize, &[Vec<f64>]) -> f64>),
}

impl BezierSpline {
    /// Creates spline passing through `knots` in the given order. Tangent
    /// weights follow the default rule: the weight of an interior knot is the
    /// ratio of the chord lengths on its two sides. Two knots make a valid
    /// spline with no segments.
    /// # Example
    /// ```
    /// use bezier_spline::BezierSpline;
    ///
    /// let spline = BezierSpline::new(vec![
    ///     vec![0.0, 0.0],
    ///     vec![3.0, 3.0],
    ///     vec![6.0, 0.0]
    /// ]).unwrap();
    ///
    /// let points = spline.get_points(0, 3.0);
    /// assert_eq!(1, points.len());
    /// assert_eq!(vec![3.0, 3.0], points[0]);
    /// ```
    /// # Errors
    /// Error is returned when there are less than 2 knots, knot dimensions
    /// differ or two consecutive knots coincide.
    /// ```
    /// use bezier_spline::BezierSpline;
    ///
    /// assert!(BezierSpline::new(vec![vec![1.0, 2.0]]).is_err());
    /// assert!(BezierSpline::new(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn new(knots: Vec<Vec<f64>>) -> Result<Self, Box<dyn Error>> {
        Self::with_weight_mode(knots, Weights::ChordRatio)
    }

    /// Creates spline with one precomputed tangent weight per segment.
    /// Entry 0 is a placeholder and is never read; entry i weights the joint
    /// at knot i.
    /// # Example
    /// ```
    /// use bezier_spline::BezierSpline;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let spline = BezierSpline::with_weights(
    ///     vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 3.0]],
    ///     vec![0.0, 1.0]
    /// ).unwrap();
    ///
    /// let points = spline.get_points(0, 1.5);
    /// assert_eq!(1, points.len());
    /// assert_approx_eq!(1.5, points[0][0], 1e-9);
    /// assert_approx_eq!(3.28125, points[0][1], 1e-9);
    /// ```
    /// # Errors
    /// Beside the knot checks of [BezierSpline::new], error is returned when
    /// the weights length is not the number of knots minus 1.
    /// ```
    /// use bezier_spline::BezierSpline;
    ///
    /// let spline = BezierSpline::with_weights(
    ///     vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 3.0]],
    ///     vec![0.0, 1.0, 2.0]
    /// );
    /// assert!(spline.is_err());
    /// ```
    pub fn with_weights(knots: Vec<Vec<f64>>, weights: Vec<f64>) -> Result<Self, Box<dyn Error>> {
        Self::with_weight_mode(knots, Weights::PerJoint(weights))
    }

    /// Creates spline with a tangent weight rule. The rule is called with the
    /// interior knot index and the knots and is evaluated again on every
    /// refit, so it stays in effect when knots are replaced later.
    /// # Example
    /// ```
    /// use bezier_spline::BezierSpline;
    ///
    /// let knots = vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 3.0]];
    ///
    /// let from_rule = BezierSpline::with_weight_rule(knots.clone(), |_, _| 1.0).unwrap();
    /// let explicit = BezierSpline::with_weights(knots, vec![0.0, 1.0]).unwrap();
    ///
    /// assert_eq!(explicit.get_points(0, 1.5), from_rule.get_points(0, 1.5));
    /// ```
    pub fn with_weight_rule<F>(knots: Vec<Vec<f64>>, rule: F) -> Result<Self, Box<dyn Error>>
    where
        F: Fn(usize, &[Vec<f64>]) -> f64 + 'static,
    {
        Self::with_weight_mode(knots, Weights::Rule(Box::new(rule)))
    }

    fn with_weight_mode(knots: Vec<Vec<f64>>, weights: Weights) -> Result<Self, Box<dyn Error>> {
        let knots = Self::check_knots(knots)?;
        Self::check_weights(&weights, knots.len())?;

        let dimension = knots[0].len();
        let mut spline = BezierSpline {
            knots,
            weights,
            curves: Vec::new(),
            dimension,
        };
        spline.calculate_curves();
        return Ok(spline);
    }

    /// Every point of the spline whose coordinate along `axis` equals
    /// `value`, in segment order. A point touched by two neighboring segments
    /// is reported once; approximate duplicates are merged with the first
    /// occurrence winning. Panics when `axis` is not lower than the spline
    /// dimension.
    /// # Example
    /// ```
    /// use bezier_spline::BezierSpline;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let spline = BezierSpline::new(vec![
    ///     vec![0.0, 0.0],
    ///     vec![3.0, 3.0],
    ///     vec![6.0, 0.0]
    /// ]).unwrap();
    ///
    /// let points = spline.get_points(1, 1.5);
    /// assert_eq!(2, points.len());
    /// assert_approx_eq!(1.5, points[0][1], 1e-9);
    /// assert_approx_eq!(1.5, points[1][1], 1e-9);
    /// ```
    pub fn get_points(&self, axis: usize, value: f64) -> Vec<Vec<f64>> {
        let mut points: Vec<DVector<f64>> = Vec::new();

        for curve in &self.curves {
            for t in curve.solve(axis, value) {
                let point = curve.evaluate(t);
                let is_duplicate = points
                    .iter()
                    .any(|found| vector::approximately_equals(found.as_slice(), point.as_slice()));
                if !is_duplicate {
                    points.push(point);
                }
            }
        }

        points.iter().map(|point| point.as_slice().to_vec()).collect()
    }

    /// Replaces all knots and refits every segment. The spline dimension may
    /// change; the weight mode stays.
    /// # Errors
    /// Same checks as on construction; the spline is left untouched on error.
    pub fn set_knots(&mut self, knots: Vec<Vec<f64>>) -> Result<(), Box<dyn Error>> {
        let knots = Self::check_knots(knots)?;
        Self::check_weights(&self.weights, knots.len())?;

        self.dimension = knots[0].len();
        self.knots = knots;
        self.calculate_curves();
        Ok(())
    }

    /// Replaces a single knot and refits every segment.
    /// # Example
    /// ```
    /// use bezier_spline::BezierSpline;
    ///
    /// let mut spline = BezierSpline::new(vec![
    ///     vec![0.0, 0.0],
    ///     vec![3.0, 3.0],
    ///     vec![6.0, 0.0]
    /// ]).unwrap();
    /// spline.set_knot(1, vec![3.0, 4.0]).unwrap();
    ///
    /// assert_eq!(vec![3.0, 4.0], spline.get_curves()[0].get_control_points()[3]);
    /// ```
    /// # Errors
    /// Error is returned when the index is out of range, the knot dimension
    /// does not match the spline or the knot coincides with a neighbor.
    pub fn set_knot(&mut self, index: usize, knot: Vec<f64>) -> Result<(), Box<dyn Error>> {
        if index >= self.knots.len() {
            return Err(Box::new(SplineError("Knot index is out of range".to_string())));
        }
        if knot.len() != self.dimension {
            return Err(Box::new(SplineError(
                "Knot dimension does not match spline dimension".to_string(),
            )));
        }

        let knot = DVector::from_vec(knot);
        if index > 0 && (&knot - &self.knots[index - 1]).norm() < 1e-16 {
            return Err(Box::new(SplineError(
                "Consecutive knots must be distinct".to_string(),
            )));
        }
        if index + 1 < self.knots.len() && (&self.knots[index + 1] - &knot).norm() < 1e-16 {
            return Err(Box::new(SplineError(
                "Consecutive knots must be distinct".to_string(),
            )));
        }

        self.knots[index] = knot;
        self.calculate_curves();
        Ok(())
    }

    pub fn get_knots(&self) -> Vec<Vec<f64>> {
        self.knots.iter().map(|knot| knot.as_slice().to_vec()).collect()
    }

    pub fn get_curves(&self) -> &Vec<BezierCurve> {
        &self.curves
    }

    pub fn get_dimension(&self) -> usize {
        self.dimension
    }

    fn check_knots(knots: Vec<Vec<f64>>) -> Result<Vec<DVector<f64>>, Box<dyn Error>> {
        if knots.len() < 2 {
            return Err(Box::new(SplineError(
                "Spline must have at least 2 knots".to_string(),
            )));
        }

        let dimension = knots[0].len();
        if dimension == 0 {
            return Err(Box::new(SplineError(
                "Knots must have at least one dimension".to_string(),
            )));
        }
        if knots.iter().any(|knot| knot.len() != dimension) {
            return Err(Box::new(SplineError("Knots have unequal dimensions".to_string())));
        }

        let knots: Vec<DVector<f64>> = knots.into_iter().map(DVector::from_vec).collect();
        if knots.windows(2).any(|pair| (&pair[1] - &pair[0]).norm() < 1e-16) {
            return Err(Box::new(SplineError(
                "Consecutive knots must be distinct".to_string(),
            )));
        }

        Ok(knots)
    }

    fn check_weights(weights: &Weights, number_of_knots: usize) -> Result<(), Box<dyn Error>> {
        if let Weights::PerJoint(values) = weights {
            if values.len() != number_of_knots - 1 {
                return Err(Box::new(SplineError(
                    "Weights must have exactly one value per segment".to_string(),
                )));
            }
        }
        Ok(())
    }

    fn joint_weights(&self) -> Vec<f64> {
        let n = self.knots.len();

        match &self.weights {
            Weights::ChordRatio => {
                let chords: Vec<f64> = self
                    .knots
                    .windows(2)
                    .map(|pair| (&pair[1] - &pair[0]).norm())
                    .collect();
                let mut weights = vec![0.0; n - 1];
                for i in 1..n - 1 {
                    weights[i] = chords[i - 1] / chords[i];
                }
                weights
            }
            Weights::PerJoint(values) => values.clone(),
            Weights::Rule(rule) => {
                let plain_knots = self.get_knots();
                let mut weights = vec![0.0; n - 1];
                for i in 1..n - 1 {
                    weights[i] = rule(i, &plain_knots);
                }
                weights
            }
        }
    }

    /// Fits all segments at once. The unknowns of the tridiagonal system are
    /// the first interior control points; the first and last row carry the
    /// natural end conditions, interior row i carries the weighted continuity
    /// conditions of joint i. Second interior control points follow
    /// algebraically from the solution.
    fn calculate_curves(&mut self) {
        let n = self.knots.len();
        self.curves.clear();
        if n < 3 {
            return;
        }

        let k = self.joint_weights();
        let segments = n - 1;

        let mut a = vec![0.0; segments];
        let mut b = vec![0.0; segments];
        let mut c = vec![0.0; segments];
        let mut d: Vec<DVector<f64>> = Vec::with_capacity(segments);

        b[0] = 2.0;
        c[0] = k[1];
        d.push(&self.knots[0] + &self.knots[1] * (1.0 + k[1]));

        for i in 1..segments - 1 {
            a[i] = 1.0;
            b[i] = 2.0 * k[i] * (1.0 + k[i]);
            c[i] = k[i] * k[i] * k[i + 1];
            d.push(
                &self.knots[i] * ((1.0 + k[i]) * (1.0 + k[i]))
                    + &self.knots[i + 1] * (k[i] * k[i] * (1.0 + k[i + 1])),
            );
        }

        let last = segments - 1;
        a[last] = 2.0;
        b[last] = k[last] * (4.0 + 3.0 * k[last]);
        d.push(
            &self.knots[last] * (2.0 * (1.0 + k[last]) * (1.0 + k[last]))
                + &self.knots[n - 1] * (k[last] * k[last]),
        );

        let p1 = thomas::solve_scalar(&a, &b, &c, &d);

        for i in 0..segments {
            let p2 = if i < segments - 1 {
                &self.knots[i + 1] * (1.0 + k[i + 1]) - &p1[i + 1] * k[i + 1]
            } else {
                (&p1[last] + &self.knots[n - 1]) * 0.5
            };
            self.curves.push(BezierCurve::from_vectors(
                self.knots[i].clone(),
                p1[i].clone(),
                p2,
                self.knots[i + 1].clone(),
            ));
        }
    }
}

#[derive(Debug)]
struct SplineError(String);

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in BezierSpline: {}", self.0)
    }
}

impl Error for SplineError {}
