#![doc = include_str!("../README.md")]

#[cfg(test)]
mod tests;

mod candidate;
pub use candidate::{
    DiscoveryClock, ExoplanetCandidate, SystemClock, UNKNOWN_HOST_STAR,
    generate_exoplanet_candidate, generate_exoplanet_candidate_with,
};

mod classifier;
pub use classifier::{confidence_score, is_likely_planet};

mod data;
pub use data::{LightCurve, LightCurveSample};

mod detector;
pub use detector::{DetectionResult, detect_transits};

mod error;
pub use error::DetectionError;

mod features;
pub use features::FeatureSet;

mod float_trait;
pub use float_trait::Float;

pub mod periodogram;

pub mod thresholds;

mod transit;
pub use transit::{DipScanner, TransitEvent, find_transits};

pub use ndarray;
