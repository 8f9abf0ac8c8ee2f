use crate::classifier::{confidence_score, is_likely_planet};
use crate::data::{LightCurve, LightCurveSample};
use crate::error::DetectionError;
use crate::features::{self, FeatureSet};
use crate::float_trait::Float;
use crate::periodogram;
use crate::thresholds::{MAX_NOISE_LEVEL, MIN_DATA_POINTS};
use crate::transit::find_transits;

use conv::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Terminal output of one detection run
///
/// Immutable once produced. `transit_depth` is fractional (normalized by the
/// mean flux), `period` and `duration` are in days, `epoch` is the time of
/// minimum flux of the first detected transit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct DetectionResult<T>
where
    T: Float,
{
    pub is_planet: bool,
    pub confidence: T,
    pub transit_depth: T,
    pub period: T,
    pub duration: T,
    pub epoch: T,
    pub signal_to_noise: T,
    pub features: FeatureSet<T>,
}

impl<T> DetectionResult<T>
where
    T: Float,
{
    /// The all-zero negative result every failure path degrades to
    ///
    /// `noise_level` is the only field that differs between failure modes:
    /// the sentinel `1` for an unusably short input, the measured value for
    /// a too-noisy or transit-free one.
    pub fn null_result(noise_level: T) -> Self {
        Self {
            is_planet: false,
            confidence: T::zero(),
            transit_depth: T::zero(),
            period: T::zero(),
            duration: T::zero(),
            epoch: T::zero(),
            signal_to_noise: T::zero(),
            features: FeatureSet::zeroed(noise_level),
        }
    }
}

/// Detect exoplanet transits in a light curve
///
/// Total over arbitrary input: malformed samples are filtered, and every
/// failure mode (too few valid samples, noise above [MAX_NOISE_LEVEL], no
/// transit events) degrades to [DetectionResult::null_result] instead of
/// erroring, so a caller always has something to render.
pub fn detect_transits<T>(samples: &[LightCurveSample<T>]) -> DetectionResult<T>
where
    T: Float,
{
    run_pipeline(samples).unwrap_or_else(|error| {
        DetectionResult::null_result(error.reported_noise_level())
    })
}

fn run_pipeline<T>(
    samples: &[LightCurveSample<T>],
) -> Result<DetectionResult<T>, DetectionError<T>>
where
    T: Float,
{
    let mut lc = LightCurve::clean(samples);
    if lc.lenu() < MIN_DATA_POINTS {
        return Err(DetectionError::ShortLightCurve {
            actual: lc.lenu(),
            minimum: MIN_DATA_POINTS,
        });
    }

    let noise_level = lc.get_noise_level();
    if noise_level > T::from_f64_lossy(MAX_NOISE_LEVEL) {
        return Err(DetectionError::NoisyLightCurve {
            noise_level,
            maximum: T::from_f64_lossy(MAX_NOISE_LEVEL),
        });
    }

    let transits = find_transits(&mut lc);
    if transits.is_empty() {
        return Err(DetectionError::NoTransits { noise_level });
    }

    let mean_flux = lc.get_mean_flux();
    let transit_depth = features::mean_transit_depth(&transits, mean_flux);
    let duration = features::mean_transit_duration(&transits);
    let epoch = transits[0].time;
    let signal_to_noise = features::signal_to_noise(&transits, noise_level);

    // A single transit gives expected_period = time_span, which conflates
    // period with the observed span. Harmless: the periodicity gate needs
    // three events, so such detections never classify as planets.
    let n_transits: T = transits.len().approx().unwrap();
    let expected_period = lc.time_span() / n_transits;
    let period = periodogram::best_period(&mut lc, expected_period);

    let features = FeatureSet {
        depth: transit_depth,
        duration,
        periodicity: features::periodicity(&transits),
        symmetry: features::symmetry(&transits),
        noise_level,
    };

    let is_planet = is_likely_planet(transit_depth, period, duration, signal_to_noise, &features);
    let confidence = confidence_score(&features, signal_to_noise, transits.len());

    Ok(DetectionResult {
        is_planet,
        confidence,
        transit_depth,
        period,
        duration,
        epoch,
        signal_to_noise,
        features,
    })
}
