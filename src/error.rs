use crate::float_trait::Float;

/// Soft-failure modes of the detection pipeline
///
/// None of these escape [crate::detect_transits]: every variant degrades to
/// the null [crate::DetectionResult], carrying the noise level given by
/// [DetectionError::reported_noise_level].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DetectionError<T>
where
    T: Float,
{
    #[error("light curve has {actual} valid samples, the minimum required is {minimum}")]
    ShortLightCurve { actual: usize, minimum: usize },

    #[error("noise level {noise_level} exceeds the maximum acceptable {maximum}")]
    NoisyLightCurve { noise_level: T, maximum: T },

    #[error("no transit events found")]
    NoTransits { noise_level: T },
}

impl<T> DetectionError<T>
where
    T: Float,
{
    /// Noise level to report in the null detection result
    ///
    /// A too-short light curve reports the sentinel `1` ("unusable"), the
    /// other failures report the actually measured noise level.
    pub fn reported_noise_level(&self) -> T {
        match self {
            Self::ShortLightCurve { .. } => T::one(),
            Self::NoisyLightCurve { noise_level, .. } | Self::NoTransits { noise_level } => {
                *noise_level
            }
        }
    }
}
