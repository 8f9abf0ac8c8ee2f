use crate::features::FeatureSet;
use crate::float_trait::Float;
use crate::thresholds::{
    MAX_MEAN_DURATION, MAX_PERIOD, MAX_TRANSIT_DEPTH, MIN_MEAN_DURATION, MIN_PERIOD,
    MIN_PERIODICITY, MIN_SIGNAL_TO_NOISE, MIN_SYMMETRY, MIN_TRANSIT_DEPTH,
};

use conv::prelude::*;

/// Threshold classification of a transit detection
///
/// All checks are AND-combined; any single failure rejects the candidate.
/// `depth` is the normalized mean transit depth, `duration` the mean dip
/// duration in days.
pub fn is_likely_planet<T>(
    depth: T,
    period: T,
    duration: T,
    signal_to_noise: T,
    features: &FeatureSet<T>,
) -> bool
where
    T: Float,
{
    if depth < T::from_f64_lossy(MIN_TRANSIT_DEPTH) || depth > T::from_f64_lossy(MAX_TRANSIT_DEPTH) {
        return false;
    }
    if period < T::from_f64_lossy(MIN_PERIOD) || period > T::from_f64_lossy(MAX_PERIOD) {
        return false;
    }
    if signal_to_noise < T::from_f64_lossy(MIN_SIGNAL_TO_NOISE) {
        return false;
    }
    features.periodicity > T::from_f64_lossy(MIN_PERIODICITY)
        && features.symmetry > T::from_f64_lossy(MIN_SYMMETRY)
        && duration > T::from_f64_lossy(MIN_MEAN_DURATION)
        && duration < T::from_f64_lossy(MAX_MEAN_DURATION)
}

/// Confidence score in `[0, 1]`, independent of the boolean classification
///
/// A weighted sum of five bounded terms: normalized depth (up to 0.3),
/// signal-to-noise (up to 0.3), periodicity (up to 0.2), symmetry (up to
/// 0.1) and transit count (up to 0.1). The terms cannot exceed one in total,
/// the final cap is kept anyway.
pub fn confidence_score<T>(features: &FeatureSet<T>, signal_to_noise: T, n_transits: usize) -> T
where
    T: Float,
{
    let depth_term = (features.depth * T::ten()).min(T::from_f64_lossy(0.3));
    let snr_term = (signal_to_noise / T::ten() * T::from_f64_lossy(0.3)).min(T::from_f64_lossy(0.3));
    let periodicity_term = features.periodicity * T::from_f64_lossy(0.2);
    let symmetry_term = features.symmetry * T::from_f64_lossy(0.1);
    let n_transits_f: T = n_transits.approx().unwrap();
    let count_term = (n_transits_f / T::ten() * T::from_f64_lossy(0.1)).min(T::from_f64_lossy(0.1));

    (depth_term + snr_term + periodicity_term + symmetry_term + count_term).min(T::one())
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn good_features() -> FeatureSet<f64> {
        FeatureSet {
            depth: 0.005,
            duration: 0.2,
            periodicity: 0.95,
            symmetry: 0.9,
            noise_level: 0.001,
        }
    }

    fn classify(features: &FeatureSet<f64>, period: f64, snr: f64) -> bool {
        is_likely_planet(features.depth, period, features.duration, snr, features)
    }

    #[test]
    fn accepts_clean_transit_signature() {
        assert!(classify(&good_features(), 5.0, 5.0));
    }

    #[test]
    fn rejects_depth_out_of_range() {
        let mut features = good_features();
        features.depth = 5e-5;
        assert!(!classify(&features, 5.0, 5.0));
        features.depth = 0.2;
        assert!(!classify(&features, 5.0, 5.0));
    }

    #[test]
    fn rejects_period_out_of_range() {
        assert!(!classify(&good_features(), 0.3, 5.0));
        assert!(!classify(&good_features(), 1500.0, 5.0));
    }

    #[test]
    fn rejects_low_signal_to_noise() {
        assert!(!classify(&good_features(), 5.0, 2.9));
        // exactly at the bound passes, the rejection is strict-less-than
        assert!(classify(&good_features(), 5.0, 3.0));
    }

    #[test]
    fn rejects_weak_periodicity() {
        let mut features = good_features();
        features.periodicity = 0.7;
        assert!(!classify(&features, 5.0, 5.0));
    }

    #[test]
    fn rejects_weak_symmetry() {
        let mut features = good_features();
        features.symmetry = 0.6;
        assert!(!classify(&features, 5.0, 5.0));
    }

    #[test]
    fn rejects_duration_out_of_range() {
        let mut features = good_features();
        features.duration = 0.04;
        assert!(!classify(&features, 5.0, 5.0));
        // the upper bound is exclusive: a mean duration of exactly 0.3 days
        // is not planet-like
        features.duration = 0.3;
        assert!(!classify(&features, 5.0, 5.0));
        features.duration = 0.6;
        assert!(!classify(&features, 5.0, 5.0));
    }

    #[test]
    fn confidence_weighted_sum() {
        let features = FeatureSet {
            depth: 0.01,
            duration: 0.2,
            periodicity: 0.9,
            symmetry: 0.8,
            noise_level: 0.001,
        };
        // 0.1 + 0.15 + 0.18 + 0.08 + 0.05
        assert_relative_eq!(
            confidence_score(&features, 5.0, 5),
            0.56,
            epsilon = 1e-12
        );
    }

    #[test]
    fn confidence_terms_saturate() {
        let features = FeatureSet {
            depth: 0.09,
            duration: 0.2,
            periodicity: 1.0,
            symmetry: 1.0,
            noise_level: 0.001,
        };
        // depth, snr and count terms all capped: 0.3 + 0.3 + 0.2 + 0.1 + 0.1
        assert_relative_eq!(
            confidence_score(&features, 100.0, 50),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn confidence_is_bounded() {
        for &(depth, snr, n) in &[
            (0.0, 0.0, 0_usize),
            (0.5, 1000.0, 1000),
            (1e-6, 0.1, 1),
        ] {
            let features = FeatureSet {
                depth,
                duration: 0.2,
                periodicity: 1.0,
                symmetry: 1.0,
                noise_level: 0.001,
            };
            let confidence = confidence_score(&features, snr, n);
            assert!((0.0..=1.0).contains(&confidence));
        }
    }
}
