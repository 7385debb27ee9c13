//! Statistical-distribution sampler abstraction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::source::BitSource;

/// Maps draws from a [`BitSource`] to an `f64` with a fixed statistical shape.
///
/// Samplers hold configuration only. Every call is a pure function of the
/// draws it takes, so the same source state always yields the same sample.
/// The algorithm behind an implementation is part of its public contract:
/// changing it changes every sequence derived from a persisted seed.
pub trait Distribution {
    /// Draws one sample. The result is finite and lies within
    /// [`support`](Self::support).
    fn sample(&self, source: &mut dyn BitSource) -> f64;

    /// The interval every sample lies in.
    fn support(&self) -> Support;
}

impl<D: Distribution + ?Sized> Distribution for &D {
    fn sample(&self, source: &mut dyn BitSource) -> f64 {
        (**self).sample(source)
    }

    fn support(&self) -> Support {
        (**self).support()
    }
}

impl<D: Distribution + ?Sized> Distribution for Box<D> {
    fn sample(&self, source: &mut dyn BitSource) -> f64 {
        (**self).sample(source)
    }

    fn support(&self) -> Support {
        (**self).support()
    }
}

/// A documented sampling interval with explicit bound inclusivity.
///
/// Serializable so the interval can be published alongside a sampler's
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Lower bound.
    pub lower: f64,
    /// Whether `lower` itself can be returned.
    pub lower_inclusive: bool,
    /// Upper bound.
    pub upper: f64,
    /// Whether `upper` itself can be returned.
    pub upper_inclusive: bool,
}

impl Support {
    /// `[lower, upper)`.
    #[must_use]
    pub const fn half_open(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            lower_inclusive: true,
            upper,
            upper_inclusive: false,
        }
    }

    /// `[lower, upper]`.
    #[must_use]
    pub const fn closed(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            lower_inclusive: true,
            upper,
            upper_inclusive: true,
        }
    }

    /// Returns `true` if `value` is finite and lies inside the interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let above = if self.lower_inclusive {
            value >= self.lower
        } else {
            value > self.lower
        };
        let below = if self.upper_inclusive {
            value <= self.upper
        } else {
            value < self.upper
        };
        above && below
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower_inclusive { '[' } else { '(' };
        let close = if self.upper_inclusive { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.lower, self.upper)
    }
}
