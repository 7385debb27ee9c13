//! Wyrd Distributions: named samplers over bit sources.
//!
//! Every sampler here is stateless between calls and uses one fixed,
//! documented algorithm. Those algorithms are part of the public contract:
//! changing one changes every sequence derived from a persisted seed.

pub mod config;
pub mod curved;
pub mod exponential;
pub mod gaussian;
pub mod spike;
pub mod uniform;

pub use config::ShapeConfig;
pub use curved::Curved;
pub use exponential::{Exponential, ExponentialParams};
pub use gaussian::{Gaussian, GaussianParams};
pub use spike::{Bathtub, Spike};
pub use uniform::{Uniform, unit_f64};
