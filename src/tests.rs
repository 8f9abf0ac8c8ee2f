pub use crate::data::LightCurveSample;
pub use crate::float_trait::Float;

use std::f64::consts::TAU;

/// `n` evenly spaced values over `[start, end]`
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    let step = (end - start) / T::from_f64_lossy((n - 1) as f64);
    (0..n)
        .map(|i| start + step * T::from_f64_lossy(i as f64))
        .collect()
}

pub fn all_close<T: Float>(actual: &[T], desired: &[T], tol: T) {
    assert_eq!(actual.len(), desired.len());
    for (&a, &d) in actual.iter().zip(desired.iter()) {
        assert!(
            (a - d).abs() < tol + tol * T::max(a.abs(), d.abs()),
            "{a} is not close to {d}",
        );
    }
}

/// Synthetic light curve with a 0.5 % transit every 5 days
///
/// Samples every 0.1 days; every 50th and 51st sample is dipped, so each
/// transit spans two samples and the scanner measures a 0.2-day duration.
/// The deterministic sub-millimagnitude wiggle puts the flux minimum on the
/// second in-dip sample, keeping the dips symmetric and regularly spaced.
pub fn planet_series(n: usize) -> Vec<LightCurveSample<f64>> {
    (0..n)
        .map(|i| {
            let time = 0.1 * i as f64;
            let mut flux = 1.0 + 2e-4 * (TAU * time).cos();
            if i % 50 < 2 {
                flux *= 0.995;
            }
            (time, flux).into()
        })
        .collect()
}

/// The same series without the dips: low-amplitude wiggle only
pub fn quiet_series(n: usize) -> Vec<LightCurveSample<f64>> {
    (0..n)
        .map(|i| {
            let time = 0.1 * i as f64;
            let flux = 1.0 + 2e-4 * (TAU * time).cos();
            (time, flux).into()
        })
        .collect()
}

#[test]
fn planet_series_dips_where_expected() {
    let series = planet_series(1000);
    assert_eq!(series.len(), 1000);
    assert!(series[50].flux < 0.996);
    assert!(series[51].flux < 0.996);
    assert!(series[52].flux > 0.999);
    // the wiggle makes the second in-dip sample the minimum
    assert!(series[51].flux < series[50].flux);
}

#[test]
fn linspace_endpoints() {
    let grid = linspace(0.0_f64, 1.0, 11);
    assert_eq!(grid.len(), 11);
    all_close(&grid[..2], &[0.0, 0.1], 1e-12);
    all_close(&grid[10..], &[1.0], 1e-12);
}
