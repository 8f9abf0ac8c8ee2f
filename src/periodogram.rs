//! Simplified cosine-correlation period search
//!
//! A single-harmonic stand-in for a Lomb-Scargle periodogram: for each
//! candidate period $p$ the power is
//! $\left| \sum_i (f_i - \bar{f}) \cos(2 \pi t_i / p) \right|$,
//! with no sine term and no normalization by variance. Asymptotic time is
//! $O(N_\mathrm{periods} \times N_\mathrm{samples})$ and this is the
//! dominant cost of the whole pipeline.

use crate::data::LightCurve;
use crate::float_trait::Float;
use crate::thresholds::{MAX_PERIOD, MIN_PERIOD, PERIOD_STEP};

use conv::prelude::*;

/// Cosine-correlation power at a single trial period
pub fn power<T>(lc: &mut LightCurve<T>, period: T) -> T
where
    T: Float,
{
    let mean_flux = lc.get_mean_flux();
    lc.t.iter()
        .zip(lc.flux.iter())
        .map(|(&time, &flux)| (flux - mean_flux) * (T::TAU() * time / period).cos())
        .sum::<T>()
        .abs()
}

/// Period of maximum power over a bounded grid around an expected period
///
/// The grid spans `[max(MIN_PERIOD, expected / 2), min(MAX_PERIOD,
/// expected * 2)]` in `PERIOD_STEP` increments; ties keep the earlier
/// period. An expected period so short that the grid is empty yields the
/// lower bound without evaluating any power.
pub fn best_period<T>(lc: &mut LightCurve<T>, expected_period: T) -> T
where
    T: Float,
{
    let min_period = T::from_f64_lossy(MIN_PERIOD).max(expected_period * T::half());
    let max_period = T::from_f64_lossy(MAX_PERIOD).min(expected_period * T::two());
    let step = T::from_f64_lossy(PERIOD_STEP);

    let mut best = min_period;
    let mut best_power = T::neg_infinity();
    for i in 0_usize.. {
        let period = min_period + step * i.approx().unwrap();
        if period > max_period {
            break;
        }
        let period_power = power(lc, period);
        if period_power > best_power {
            best_power = period_power;
            best = period;
        }
    }
    best
}
