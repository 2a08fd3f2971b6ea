extern crate bezier_spline;

use bezier_spline::BezierSpline;

fn main() {

    let knots = vec![
        vec![0.0, 0.0],
        vec![1.0, 2.0],
        vec![4.0, 3.0],
        vec![5.0, 1.0]
    ];

    let chord_ratio = BezierSpline::new(knots.clone()).unwrap();
    let uniform = BezierSpline::with_weight_rule(knots, |_, _| 1.0).unwrap();

    println!("x_chord;y_chord;x_uniform;y_uniform");
    for segment in 0..chord_ratio.get_curves().len() {
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let point = chord_ratio.get_curves()[segment].at(t);
            let uniform_point = uniform.get_curves()[segment].at(t);
            println!("{:.2};{:.2};{:.2};{:.2}", point[0], point[1], uniform_point[0], uniform_point[1]);
        }
    }
}
