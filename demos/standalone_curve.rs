extern crate bezier_spline;

use bezier_spline::BezierCurve;

fn main() {

    let curve = BezierCurve::new(vec![
        vec![0.0, 0.0],
        vec![1.0, 2.0],
        vec![3.0, 2.0],
        vec![4.0, 0.0]
    ]).unwrap();

    let number_of_steps = 20;

    println!("x;y");
    for i in 0..=number_of_steps {
        let point = curve.at(i as f64 / number_of_steps as f64);
        println!("{:.2};{:.2}", point[0], point[1]);
    }

    println!("parameters at y = 1.0");
    for t in curve.solve(1, 1.0) {
        println!("{:.4}", t);
    }
}
