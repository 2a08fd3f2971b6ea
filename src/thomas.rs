use nalgebra::DVector;

/// Solves a tridiagonal system by the Thomas algorithm. Row i reads
/// `a[i]*x[i-1] + b[i]*x[i] + c[i]*x[i+1] = d[i]` with `a[0]` and the last
/// `c` entry unused. Coefficients, right-hand sides and solutions are vectors
/// of one common dimension and every division is component-wise. The system
/// must be at least of size 1 and diagonally dominant enough to keep the
/// sweep denominators away from zero; neither is checked here.
pub fn solve(
    a: &Vec<DVector<f64>>,
    b: &Vec<DVector<f64>>,
    c: &Vec<DVector<f64>>,
    d: &Vec<DVector<f64>>,
) -> Vec<DVector<f64>> {
    let n = d.len();
    let mut c_prime: Vec<DVector<f64>> = Vec::with_capacity(n);
    let mut d_prime: Vec<DVector<f64>> = Vec::with_capacity(n);

    c_prime.push(c[0].component_div(&b[0]));
    d_prime.push(d[0].component_div(&b[0]));

    for i in 1..n {
        let denominator = &b[i] - a[i].component_mul(&c_prime[i - 1]);
        c_prime.push(c[i].component_div(&denominator));
        d_prime.push((&d[i] - a[i].component_mul(&d_prime[i - 1])).component_div(&denominator));
    }

    let mut x = vec![DVector::<f64>::zeros(d[0].len()); n];
    x[n - 1] = d_prime[n - 1].clone();
    for i in (0..n - 1).rev() {
        x[i] = &d_prime[i] - c_prime[i].component_mul(&x[i + 1]);
    }
    return x;
}

/// Same as [solve] with scalar coefficient rows; every scalar is broadcast to
/// the dimension of the right-hand side before the sweep.
pub fn solve_scalar(
    a: &Vec<f64>,
    b: &Vec<f64>,
    c: &Vec<f64>,
    d: &Vec<DVector<f64>>,
) -> Vec<DVector<f64>> {
    let dimension = d[0].len();
    let broadcast = |values: &Vec<f64>| -> Vec<DVector<f64>> {
        values
            .iter()
            .map(|value| DVector::from_element(dimension, *value))
            .collect()
    };
    solve(&broadcast(a), &broadcast(b), &broadcast(c), d)
}
