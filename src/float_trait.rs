use conv::prelude::*;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Floating-point type the detection pipeline is generic over
///
/// Implemented for [f32] and [f64]. All fixed thresholds of the pipeline are
/// defined as `f64` constants and converted with [Float::from_f64_lossy].
pub trait Float:
    'static
    + ndarray::NdFloat
    + num_traits::FloatConst
    + num_traits::FromPrimitive
    + ApproxFrom<usize>
    + Serialize
    + DeserializeOwned
    + JsonSchema
    + std::iter::Sum
    + Send
    + Sync
{
    fn half() -> Self;
    fn two() -> Self;
    fn ten() -> Self;
    /// Lossy conversion of an `f64` constant
    fn from_f64_lossy(x: f64) -> Self;
}

impl Float for f32 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }

    #[inline]
    fn ten() -> Self {
        10.0
    }

    #[inline]
    fn from_f64_lossy(x: f64) -> Self {
        x as f32
    }
}

impl Float for f64 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }

    #[inline]
    fn ten() -> Self {
        10.0
    }

    #[inline]
    fn from_f64_lossy(x: f64) -> Self {
        x
    }
}
