use crate::data::LightCurve;
use crate::float_trait::Float;
use crate::thresholds::{
    DIP_THRESHOLD_SIGMA, MAX_DIP_DURATION, MIN_DIP_DURATION, MIN_TRANSIT_DEPTH,
};

/// A single below-threshold dip accepted as a transit
///
/// Ephemeral: produced by the scan, consumed by feature extraction and the
/// period search, never persisted. `time` is the timestamp of minimum flux
/// within the dip, `depth` is `mean_flux - min_flux` in absolute units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitEvent<T>
where
    T: Float,
{
    pub time: T,
    pub depth: T,
    pub start: T,
    pub end: T,
}

#[derive(Clone, Copy, Debug)]
enum DipState<T> {
    Outside,
    Inside { start: T, min_flux: T, min_time: T },
}

/// Two-state dip scanner
///
/// Feeding time-ordered samples through [DipScanner::step] yields a
/// [TransitEvent] each time a below-threshold run ends within the accepted
/// duration and depth bounds. The threshold is
/// `mean_flux - 2 * noise_level`.
#[derive(Clone, Copy, Debug)]
pub struct DipScanner<T>
where
    T: Float,
{
    mean_flux: T,
    threshold: T,
    state: DipState<T>,
}

impl<T> DipScanner<T>
where
    T: Float,
{
    pub fn new(mean_flux: T, noise_level: T) -> Self {
        Self {
            mean_flux,
            threshold: mean_flux - T::from_f64_lossy(DIP_THRESHOLD_SIGMA) * noise_level,
            state: DipState::Outside,
        }
    }

    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Advance the scanner by one sample
    ///
    /// Returns an event on the in-dip to outside transition if the completed
    /// dip is transit-like: duration strictly inside
    /// (`MIN_DIP_DURATION`, `MAX_DIP_DURATION`) and absolute depth above
    /// `MIN_TRANSIT_DEPTH`. A dip still open when the data ends produces
    /// nothing.
    pub fn step(&mut self, time: T, flux: T) -> Option<TransitEvent<T>> {
        match self.state {
            DipState::Outside => {
                if flux < self.threshold {
                    self.state = DipState::Inside {
                        start: time,
                        min_flux: flux,
                        min_time: time,
                    };
                }
                None
            }
            DipState::Inside {
                start,
                min_flux,
                min_time,
            } => {
                if flux < self.threshold {
                    if flux < min_flux {
                        self.state = DipState::Inside {
                            start,
                            min_flux: flux,
                            min_time: time,
                        };
                    }
                    None
                } else {
                    self.state = DipState::Outside;
                    let duration = time - start;
                    let depth = self.mean_flux - min_flux;
                    let accepted = duration > T::from_f64_lossy(MIN_DIP_DURATION)
                        && duration < T::from_f64_lossy(MAX_DIP_DURATION)
                        && depth > T::from_f64_lossy(MIN_TRANSIT_DEPTH);
                    accepted.then_some(TransitEvent {
                        time: min_time,
                        depth,
                        start,
                        end: time,
                    })
                }
            }
        }
    }
}

/// Scan a light curve for transit events, in time order
pub fn find_transits<T>(lc: &mut LightCurve<T>) -> Vec<TransitEvent<T>>
where
    T: Float,
{
    let mean_flux = lc.get_mean_flux();
    let noise_level = lc.get_noise_level();
    let mut scanner = DipScanner::new(mean_flux, noise_level);
    lc.t.iter()
        .zip(lc.flux.iter())
        .filter_map(|(&time, &flux)| scanner.step(time, flux))
        .collect()
}
