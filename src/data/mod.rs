mod light_curve;
pub use light_curve::LightCurve;

mod sample;
pub use sample::LightCurveSample;
