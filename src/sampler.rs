//! Float samplers over a seeded [`SmallRng`].

use rand::distributions::Uniform;
use rand::rngs::SmallRng;
use statrs::distribution::Normal;

use crate::config::FloatDistribution;
use crate::error::{Error, Result};

/// Object-safe view of a float distribution, so the float generator can hold
/// whichever one was requested behind a single `Box`.
pub trait FloatSampler {
    fn sample(&self, rng: &mut SmallRng) -> f64;
}
impl<T: rand::distributions::Distribution<f64>> FloatSampler for T {
    fn sample(&self, rng: &mut SmallRng) -> f64 {
        rand::distributions::Distribution::sample(self, rng)
    }
}

impl FloatDistribution {
    /// Builds the sampler once so that it can be reused for every record.
    pub fn sampler(&self) -> Result<Box<dyn FloatSampler>> {
        let d: Box<dyn FloatSampler> = match *self {
            FloatDistribution::Uniform { min, max } => {
                if !(min <= max) || !(max - min).is_finite() {
                    return Err(Error::InvalidParameter(format!(
                        "uniform range [{}, {}] is not a finite interval",
                        min, max
                    )));
                }
                Box::new(Uniform::new_inclusive(min, max))
            }
            FloatDistribution::Normal { mean, std } => Box::new(
                Normal::new(mean, std).map_err(|e| Error::InvalidParameter(e.to_string()))?,
            ),
        };
        Ok(d)
    }
}

/// Draws one value from `[min, max]`.
pub fn sample_uniform(rng: &mut SmallRng, min: f64, max: f64) -> Result<f64> {
    Ok(FloatDistribution::Uniform { min, max }.sampler()?.sample(rng))
}

/// Draws one value from a normal distribution with the given mean and standard deviation.
pub fn sample_normal(rng: &mut SmallRng, mean: f64, std: f64) -> Result<f64> {
    Ok(FloatDistribution::Normal { mean, std }.sampler()?.sample(rng))
}
