extern crate bezier_spline;

use bezier_spline::BezierSpline;

fn main() {

    let spline = BezierSpline::new(vec![
        vec![0.0, 0.0],
        vec![1.0, 2.0],
        vec![3.0, 3.0],
        vec![5.0, 1.0],
        vec![6.0, 2.0]
    ]).unwrap();

    let y_min = 0.0;
    let y_max = 3.0;
    let number_of_steps = 30;
    let step = (y_max - y_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let y = y_min + step * i as f64;
        for point in spline.get_points(1, y) {
            println!("{:.2};{:.2}", point[0], point[1]);
        }
    }
}
