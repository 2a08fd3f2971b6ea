//! Library fitting smooth cubic Bezier splines through points of any dimension.
//! Fitted splines and standalone curves are solved for points by axis value,
//! for example to find every point of a planar spline at a given height.
//!
//! # Example
//! ```
//! use bezier_spline::BezierSpline;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let spline = BezierSpline::new(vec![
//!     vec![1.0, 2.0],
//!     vec![2.0, 4.0],
//!     vec![3.0, 3.0]
//! ]).unwrap();
//!
//! let points = spline.get_points(0, 1.5);
//!
//! assert_eq!(1, points.len());
//! assert_approx_eq!(1.5, points[0][0], 1e-9);
//! assert_approx_eq!(3.5590044, points[0][1], 1e-6);
//! ```

mod curve;
mod spline;
mod polynomial;
mod thomas;
mod vector;

pub use curve::BezierCurve;
pub use spline::BezierSpline;
