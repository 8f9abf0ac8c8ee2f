//! Fixed numeric thresholds of the transit-detection pipeline
//!
//! These are domain constants, not tuning knobs: the classifier, the dip
//! scanner and the period search all assume exactly these values.

/// Minimum number of valid samples required for any analysis
pub const MIN_DATA_POINTS: usize = 100;

/// Maximum acceptable noise level (population standard deviation of flux)
pub const MAX_NOISE_LEVEL: f64 = 0.01;

/// How many sigmas below the mean flux a sample must drop to count as in-dip
pub const DIP_THRESHOLD_SIGMA: f64 = 2.0;

/// Minimum absolute transit depth, also the lower bound of the normalized
/// depth accepted by the classifier (0.01 % of the mean flux)
pub const MIN_TRANSIT_DEPTH: f64 = 1e-4;

/// Maximum normalized transit depth accepted by the classifier (10 %)
pub const MAX_TRANSIT_DEPTH: f64 = 0.1;

/// Dip duration bounds applied by the scanner, days, both exclusive.
/// Shorter dips are single-sample noise spikes, longer ones are stellar
/// variability trends rather than planet-like transits.
pub const MIN_DIP_DURATION: f64 = 0.1;
pub const MAX_DIP_DURATION: f64 = 0.5;

/// Orbital period search range, days
pub const MIN_PERIOD: f64 = 0.5;
pub const MAX_PERIOD: f64 = 1000.0;

/// Period search grid step, days
pub const PERIOD_STEP: f64 = 0.1;

/// Minimum signal-to-noise ratio for a positive classification
pub const MIN_SIGNAL_TO_NOISE: f64 = 3.0;

/// Classifier gate on the periodicity feature
pub const MIN_PERIODICITY: f64 = 0.7;

/// Classifier gate on the symmetry feature
pub const MIN_SYMMETRY: f64 = 0.6;

/// Mean transit duration accepted by the classifier, days, both exclusive
pub const MIN_MEAN_DURATION: f64 = 0.05;
pub const MAX_MEAN_DURATION: f64 = 0.3;

/// Candidate synthesis requires a confidence strictly above this value
pub const CANDIDATE_CONFIDENCE_GATE: f64 = 0.6;
