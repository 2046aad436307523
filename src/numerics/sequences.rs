//! Evenly spaced grids, running sums and closed-path integrals over `ndarray` sequences

use ndarray::*;

/// Returns `num` evenly spaced values over `[start, stop]`.
///
/// Every interior value is `start + i*step`; the last value is set to `stop` exactly so
/// that grids built from the same bounds share identical endpoints.
///
/// # Examples
/// ```
/// # use stirling_cycle_analyzer::numerics::sequences::linspace;
/// let v = linspace(1.0, 2.0, 5);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v[4], 2.0);
/// ```
pub fn linspace(start: f64, stop: f64, num: usize) -> Array1<f64> {
    if num < 2 {
        return Array1::from_elem(num, start);
    }
    let step = (stop - start) / (num - 1) as f64;
    let mut grid = Array1::from_shape_fn(num, |i| i as f64 * step + start);
    grid[num - 1] = stop;
    grid
}

/// Replaces every element with the sum of itself and all previous elements
pub fn cumulative_sum(values: &Array1<f64>) -> Array1<f64> {
    let mut summed = values.clone();
    for i in 1..summed.len() {
        let previous = summed[i - 1];
        summed[i] += previous;
    }
    summed
}

/// Integrates `y dx` along the closed path through every `(x, y)` pair, returning to the
/// first pair after the last one. Uses the trapezoidal rule on each segment.
///
/// A path traced clockwise in the `x-y` plane yields a positive value.
pub fn closed_loop_integral(x: &Array1<f64>, y: &Array1<f64>) -> f64 {
    let len = x.len().min(y.len());
    if len < 2 {
        return 0.0;
    }
    let mut integral = 0.0;
    for i in 0..len {
        let j = (i + 1) % len;
        integral += 0.5 * (y[i] + y[j]) * (x[j] - x[i]);
    }
    integral
}
