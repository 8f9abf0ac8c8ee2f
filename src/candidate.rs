use crate::data::LightCurveSample;
use crate::detector::DetectionResult;
use crate::float_trait::Float;
use crate::thresholds::CANDIDATE_CONFIDENCE_GATE;

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fallback host-star label when the caller has none
pub const UNKNOWN_HOST_STAR: &str = "Unknown Star";

/// Planet radius clamp, Earth radii
const MIN_PLANET_RADIUS: f64 = 0.3;
const MAX_PLANET_RADIUS: f64 = 20.0;

/// Planet equilibrium temperature clamp, Kelvin
const MIN_PLANET_TEMPERATURE: f64 = 50.0;
const MAX_PLANET_TEMPERATURE: f64 = 2000.0;

/// Wall-clock source for candidate id and discovery-date stamps
///
/// The detection half of the pipeline is fully deterministic; only candidate
/// synthesis reads a clock and an RNG, both injected so tests can pin them.
pub trait DiscoveryClock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl DiscoveryClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A presentable planet candidate synthesized from a positive detection
///
/// Physical properties are rough scaling approximations for display, not
/// astrophysical estimates: radius from the square root of the transit
/// depth, distance from a Kepler's-third-law-flavored power law, equilibrium
/// temperature from a randomized stellar temperature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct ExoplanetCandidate<T>
where
    T: Float,
{
    /// Process-unique token built from a timestamp and a random suffix
    pub id: String,
    /// Host-star label plus a planet letter in `b..=f`
    pub name: String,
    /// Orbital distance, AU
    pub distance: T,
    /// Planet radius, Earth radii
    pub size: T,
    /// Equilibrium temperature, Kelvin
    pub temperature: T,
    /// Orbital period, days, copied from the detection
    pub orbital_period: T,
    pub discovery_method: String,
    pub confidence: T,
    pub transit_depth: T,
    /// Wall-clock date of synthesis, not a real discovery date
    pub discovery_date: NaiveDate,
    pub host_star: String,
    /// The analyzed input, retained for display
    pub light_curve: Vec<LightCurveSample<T>>,
}

/// Synthesize a candidate from a detection, with explicit RNG and clock
///
/// Returns `None` unless the detection is positive with confidence strictly
/// above [CANDIDATE_CONFIDENCE_GATE] — a stricter gate than the classifier
/// boolean, so a detected planet can still yield no candidate.
pub fn generate_exoplanet_candidate_with<T, R, C>(
    detection: &DetectionResult<T>,
    samples: &[LightCurveSample<T>],
    host_star_name: &str,
    rng: &mut R,
    clock: &C,
) -> Option<ExoplanetCandidate<T>>
where
    T: Float,
    R: Rng + ?Sized,
    C: DiscoveryClock,
{
    if !detection.is_planet || detection.confidence <= T::from_f64_lossy(CANDIDATE_CONFIDENCE_GATE) {
        return None;
    }

    let transit_depth = detection.transit_depth;
    let period = detection.period;

    let size = (transit_depth.sqrt() * T::ten())
        .min(T::from_f64_lossy(MAX_PLANET_RADIUS))
        .max(T::from_f64_lossy(MIN_PLANET_RADIUS));

    let distance = (period / T::from_f64_lossy(365.25)).powf(T::from_f64_lossy(2.0 / 3.0))
        * T::from_f64_lossy(1.5);

    let stellar_temperature = T::from_f64_lossy(5000.0 + rng.random::<f64>() * 2000.0);
    let temperature = (stellar_temperature * (T::half() / distance).sqrt())
        .min(T::from_f64_lossy(MAX_PLANET_TEMPERATURE))
        .max(T::from_f64_lossy(MIN_PLANET_TEMPERATURE));

    let planet_letter = char::from(b'b' + rng.random_range(0..5));
    let now = clock.now();
    let id = format!(
        "exoplanet-{}-{:08x}",
        now.timestamp_millis(),
        rng.random::<u32>()
    );

    Some(ExoplanetCandidate {
        id,
        name: format!("{host_star_name} {planet_letter}"),
        distance,
        size,
        temperature,
        orbital_period: period,
        discovery_method: "Transit Method".to_owned(),
        confidence: detection.confidence,
        transit_depth,
        discovery_date: now.date_naive(),
        host_star: host_star_name.to_owned(),
        light_curve: samples.to_vec(),
    })
}

/// [generate_exoplanet_candidate_with] using the thread RNG and system clock
pub fn generate_exoplanet_candidate<T>(
    detection: &DetectionResult<T>,
    samples: &[LightCurveSample<T>],
    host_star_name: &str,
) -> Option<ExoplanetCandidate<T>>
where
    T: Float,
{
    generate_exoplanet_candidate_with(detection, samples, host_star_name, &mut rand::rng(), &SystemClock)
}
