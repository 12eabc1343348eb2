//! Evenly spaced samples and the radial point layout built on them.

use std::f64::consts::TAU;

use crate::geometry::Point;

/// Returns `count` evenly spaced numbers over the closed interval `[start, stop]`.
///
/// The last sample is always exactly `stop`, so accumulated rounding never
/// shifts the outermost value.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// Lays out `count` points on a circle of `radius` around `center`.
///
/// Angles come from `linspace(0, 2π, count)`, so the last point sits on the
/// same angle as the first and closes the polygon. Angle 0 lies on the vertical
/// axis through the center (`x = cx + r·sin θ`, `y = cy + r·cos θ`).
pub fn circle_points(radius: f64, count: usize, center: Point) -> Vec<Point> {
    let mut points: Vec<Point> = linspace(0.0, TAU, count)
        .into_iter()
        .map(|angle| center.translate(radius * angle.sin(), radius * angle.cos()))
        .collect();

    // sin(2π) is not exactly zero in f64; reuse the first vertex so closure is exact.
    if count >= 2 {
        points[count - 1] = points[0];
    }
    points
}
