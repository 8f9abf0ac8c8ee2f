use crate::float_trait::Float;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single photometric measurement
///
/// `time` is a measurement timestamp, unit-agnostic but treated as days by
/// the period search. `flux` is a relative brightness centered near unity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct LightCurveSample<T>
where
    T: Float,
{
    pub time: T,
    pub flux: T,
}

impl<T> LightCurveSample<T>
where
    T: Float,
{
    pub fn new(time: T, flux: T) -> Self {
        Self { time, flux }
    }

    /// Whether this sample may enter the analysis
    ///
    /// Both fields must be finite, flux positive and time non-negative.
    /// Invalid samples are filtered out, never reported as errors.
    pub fn is_valid(&self) -> bool {
        self.time.is_finite() && self.flux.is_finite() && self.flux > T::zero() && self.time >= T::zero()
    }
}

impl<T> From<(T, T)> for LightCurveSample<T>
where
    T: Float,
{
    fn from((time, flux): (T, T)) -> Self {
        Self { time, flux }
    }
}
