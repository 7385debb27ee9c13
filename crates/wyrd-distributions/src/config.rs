//! Serializable selection of a named sampler.
//!
//! Lets content files name the shape of a roll (`{"shape": "gaussian",
//! "std_dev": 2.0}`) without the loader knowing every sampler type.

use serde::{Deserialize, Serialize};
use wyrd_core::distribution::Distribution;
use wyrd_core::error::RngError;

use crate::curved::Curved;
use crate::exponential::{Exponential, ExponentialParams};
use crate::gaussian::{Gaussian, GaussianParams};
use crate::spike::{Bathtub, Spike};
use crate::uniform::Uniform;

/// One named sampler plus its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeConfig {
    /// [`Uniform`].
    Uniform,
    /// [`Gaussian`].
    Gaussian(GaussianParams),
    /// [`Exponential`].
    Exponential(ExponentialParams),
    /// [`Spike`].
    Spike,
    /// [`Bathtub`].
    Bathtub,
    /// [`Curved`].
    Curved,
}

impl ShapeConfig {
    /// Builds the configured sampler.
    ///
    /// # Errors
    ///
    /// Returns `RngError::InvalidParameter` if the parameters are rejected by
    /// the sampler's constructor.
    pub fn build(self) -> Result<Box<dyn Distribution>, RngError> {
        let sampler: Box<dyn Distribution> = match self {
            Self::Uniform => Box::new(Uniform),
            Self::Gaussian(params) => Box::new(Gaussian::try_from(params)?),
            Self::Exponential(params) => Box::new(Exponential::try_from(params)?),
            Self::Spike => Box::new(Spike),
            Self::Bathtub => Box::new(Bathtub),
            Self::Curved => Box::new(Curved),
        };
        tracing::debug!(shape = ?self, support = %sampler.support(), "built sampler");
        Ok(sampler)
    }
}
