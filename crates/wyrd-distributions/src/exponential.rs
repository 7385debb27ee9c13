//! Exponential distribution by inversion.

use serde::{Deserialize, Serialize};
use wyrd_core::distribution::{Distribution, Support};
use wyrd_core::error::RngError;
use wyrd_core::source::BitSource;

use crate::uniform::unit_f64;

/// Largest `-ln(1 - u)` reachable from 53-bit uniforms: `53 ln 2`, rounded up.
pub const MAX_UNITS: f64 = 36.737;

/// Serializable configuration for [`Exponential`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExponentialParams {
    /// Rate (lambda); the mean of the distribution is `1 / rate`.
    pub rate: f64,
}

impl Default for ExponentialParams {
    fn default() -> Self {
        Self { rate: 1.0 }
    }
}

/// Exponential distribution with a configurable rate.
///
/// Algorithm: inversion of the CDF. One [`unit_f64`] draw `u`, returning
/// `-ln(1 - u) / rate`.
///
/// Support: `[0, 36.737 / rate]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Creates an exponential distribution.
    ///
    /// # Errors
    ///
    /// Returns `RngError::InvalidParameter` unless `rate` is a positive
    /// normal float large enough for the support to stay finite.
    pub fn new(rate: f64) -> Result<Self, RngError> {
        if !(rate.is_normal() && rate > 0.0 && (MAX_UNITS / rate).is_finite()) {
            return Err(RngError::InvalidParameter { name: "rate", value: rate });
        }
        Ok(Self { rate })
    }

    /// The configured rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Self { rate: 1.0 }
    }
}

impl TryFrom<ExponentialParams> for Exponential {
    type Error = RngError;

    fn try_from(params: ExponentialParams) -> Result<Self, Self::Error> {
        Self::new(params.rate)
    }
}

impl Distribution for Exponential {
    fn sample(&self, source: &mut dyn BitSource) -> f64 {
        let u = unit_f64(source);
        -(-u).ln_1p() / self.rate
    }

    fn support(&self) -> Support {
        Support::closed(0.0, MAX_UNITS / self.rate)
    }
}
