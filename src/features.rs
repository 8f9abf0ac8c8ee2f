use crate::float_trait::Float;
use crate::transit::TransitEvent;

use conv::prelude::*;
use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Feature vector derived from the transit events of one light curve
///
/// `periodicity` and `symmetry` are bounded to `[0, 1]` by construction.
/// `depth` is the mean transit depth normalized by the mean flux, while
/// `noise_level` stays in absolute flux units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct FeatureSet<T>
where
    T: Float,
{
    pub depth: T,
    pub duration: T,
    pub periodicity: T,
    pub symmetry: T,
    pub noise_level: T,
}

impl<T> FeatureSet<T>
where
    T: Float,
{
    /// All-zero features of a failed detection, carrying the noise level
    pub fn zeroed(noise_level: T) -> Self {
        Self {
            depth: T::zero(),
            duration: T::zero(),
            periodicity: T::zero(),
            symmetry: T::zero(),
            noise_level,
        }
    }
}

fn mean_over_events<T, F>(transits: &[TransitEvent<T>], f: F) -> T
where
    T: Float,
    F: Fn(&TransitEvent<T>) -> T,
{
    let n: T = transits.len().approx().unwrap();
    transits.iter().map(f).sum::<T>() / n
}

/// Mean transit depth normalized by the mean flux
///
/// Must be called with a non-empty event list.
pub fn mean_transit_depth<T>(transits: &[TransitEvent<T>], mean_flux: T) -> T
where
    T: Float,
{
    mean_over_events(transits, |event| event.depth) / mean_flux
}

/// Mean dip duration, start to recovery
pub fn mean_transit_duration<T>(transits: &[TransitEvent<T>]) -> T
where
    T: Float,
{
    mean_over_events(transits, |event| event.end - event.start)
}

/// Regularity of the inter-transit spacing
///
/// `1 - std(intervals) / mean(intervals)` floored at zero, with the
/// population standard deviation over consecutive minimum-to-minimum
/// intervals. Requires at least three transits, otherwise zero: two events
/// give a single interval and no spread to judge.
pub fn periodicity<T>(transits: &[TransitEvent<T>]) -> T
where
    T: Float,
{
    if transits.len() < 3 {
        return T::zero();
    }
    let intervals: Vec<T> = transits
        .iter()
        .map(|event| event.time)
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect();
    let n: T = intervals.len().approx().unwrap();
    let mean = intervals.iter().copied().sum::<T>() / n;
    let std = (intervals
        .iter()
        .map(|&interval| (interval - mean).powi(2))
        .sum::<T>()
        / n)
        .sqrt();
    (T::one() - std / mean).max(T::zero())
}

/// Mean ingress/egress balance of the dips
///
/// Per event `1 - |ingress - egress| / (ingress + egress)`, where ingress is
/// the time from dip start to minimum and egress from minimum to recovery.
/// A genuine transit is expected to be nearly symmetric, unlike the fast
/// rise and slow decay of a stellar flare.
pub fn symmetry<T>(transits: &[TransitEvent<T>]) -> T
where
    T: Float,
{
    mean_over_events(transits, |event| {
        let ingress = event.time - event.start;
        let egress = event.end - event.time;
        T::one() - (ingress - egress).abs() / (ingress + egress)
    })
}

/// Mean *unnormalized* depth over the absolute noise level
///
/// Intentionally uses raw depth while the reported transit depth is
/// normalized, so the ratio is sensitive to the absolute flux scale.
pub fn signal_to_noise<T>(transits: &[TransitEvent<T>], noise_level: T) -> T
where
    T: Float,
{
    mean_over_events(transits, |event| event.depth) / noise_level
}
