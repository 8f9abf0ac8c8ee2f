use crate::data::sample::LightCurveSample;
use crate::float_trait::Float;

use conv::prelude::*;
use ndarray::Array1;

/// Validated time/flux series the pipeline operates on
///
/// This struct caches its statistics (mean flux and noise level), that's why
/// a mutable reference is required by the analysis functions. Samples are
/// assumed to be ordered by time; ordering is never verified.
#[derive(Clone, Debug)]
pub struct LightCurve<T>
where
    T: Float,
{
    pub t: Array1<T>,
    pub flux: Array1<T>,
    mean_flux: Option<T>,
    noise_level: Option<T>,
}

macro_rules! light_curve_getter {
    ($attr: ident, $getter: ident, $func: expr) => {
        // This lint is false-positive in macros
        // https://github.com/rust-lang/rust-clippy/issues/1553
        #[allow(clippy::redundant_closure_call)]
        pub fn $getter(&mut self) -> T {
            match self.$attr {
                Some(x) => x,
                None => {
                    self.$attr = Some($func(self));
                    self.$attr.unwrap()
                }
            }
        }
    };
}

impl<T> LightCurve<T>
where
    T: Float,
{
    /// Construct from already-validated time and flux arrays
    ///
    /// Both arrays must have the same length.
    pub fn new(t: Array1<T>, flux: Array1<T>) -> Self {
        assert_eq!(
            t.len(),
            flux.len(),
            "t and flux should have the same size"
        );
        Self {
            t,
            flux,
            mean_flux: None,
            noise_level: None,
        }
    }

    /// Construct by dropping every invalid sample, preserving order
    pub fn clean(samples: &[LightCurveSample<T>]) -> Self {
        let (t, flux): (Vec<_>, Vec<_>) = samples
            .iter()
            .filter(|sample| sample.is_valid())
            .map(|sample| (sample.time, sample.flux))
            .unzip();
        Self::new(t.into(), flux.into())
    }

    /// Number of samples
    #[inline]
    pub fn lenu(&self) -> usize {
        self.t.len()
    }

    /// Float approximating the number of samples
    pub fn lenf(&self) -> T {
        self.lenu().approx().unwrap()
    }

    /// Observed time span, zero for an empty series
    pub fn time_span(&self) -> T {
        if self.t.is_empty() {
            T::zero()
        } else {
            self.t[self.lenu() - 1] - self.t[0]
        }
    }

    light_curve_getter!(mean_flux, get_mean_flux, |lc: &mut LightCurve<T>| {
        lc.flux.mean().expect("light curve must be non-empty")
    });

    // Population standard deviation of flux, the pipeline's noise estimate
    light_curve_getter!(noise_level, get_noise_level, |lc: &mut LightCurve<T>| {
        let mean = lc.get_mean_flux();
        (lc.flux
            .fold(T::zero(), |sum, &flux| sum + (flux - mean).powi(2))
            / lc.lenf())
        .sqrt()
    });
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn mean_flux() {
        let t: Vec<_> = (0..5).map(|i| i as f64).collect();
        let flux = [1.002, 0.998, 1.001, 0.999, 1.0];
        let mut lc = LightCurve::new(t.into(), flux.to_vec().into());
        assert_relative_eq!(lc.get_mean_flux(), 1.0, epsilon = 1e-12);
        // cached path
        assert_relative_eq!(lc.get_mean_flux(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn noise_level_is_population_std() {
        let t: Vec<_> = (0..4).map(|i| i as f64).collect();
        let flux = [1.0, 2.0, 3.0, 4.0];
        let mut lc = LightCurve::new(t.into(), flux.to_vec().into());
        // sqrt(mean((x - 2.5)^2)) = sqrt(1.25)
        assert_relative_eq!(
            lc.get_noise_level(),
            1.118033988749895,
            epsilon = 1e-12
        );
    }

    #[test]
    fn clean_drops_invalid_samples_and_preserves_order() {
        let samples = [
            LightCurveSample::new(0.0_f64, 1.0),
            LightCurveSample::new(f64::NAN, 1.0),
            LightCurveSample::new(1.0, -0.5),
            LightCurveSample::new(2.0, 0.998),
            LightCurveSample::new(-3.0, 1.0),
            LightCurveSample::new(3.0, 1.002),
        ];
        let lc = LightCurve::clean(&samples);
        assert_eq!(lc.lenu(), 3);
        assert_eq!(lc.t.to_vec(), vec![0.0, 2.0, 3.0]);
        assert_eq!(lc.flux.to_vec(), vec![1.0, 0.998, 1.002]);
    }

    #[test]
    fn time_span() {
        let samples: Vec<LightCurveSample<f64>> =
            (0..10).map(|i| (0.25 * i as f64, 1.0).into()).collect();
        let lc = LightCurve::clean(&samples);
        assert_relative_eq!(lc.time_span(), 2.25, epsilon = 1e-12);

        let empty = LightCurve::<f64>::clean(&[]);
        assert_eq!(empty.time_span(), 0.0);
    }
}
