//! Wyrd Sources: reference generators for the randomness contracts.
//!
//! Each generator here is a consumer of `wyrd-core`: it implements the bit
//! source contracts and nothing more. Higher-level conveniences (ranges,
//! shuffles, floats) belong to whatever wraps a source.

pub mod bridge;
pub mod diver;
pub mod lcg;
pub mod linnorm;
pub mod thrust_alt;

pub use bridge::{RandSource, RngCoreBridge};
pub use diver::DiverSource;
pub use lcg::Lcg64Source;
pub use linnorm::LinnormSource;
pub use thrust_alt::ThrustAltSource;
