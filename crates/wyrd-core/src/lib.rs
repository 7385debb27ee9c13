//! Wyrd Core: contracts for reproducible random number generation.
//!
//! This crate defines the traits every generator, sampler and harness in the
//! workspace agrees on. It contains no generator algorithms of its own.

pub mod distribution;
pub mod error;
pub mod flaw;
pub mod snapshot;
pub mod source;

pub use distribution::{Distribution, Support};
pub use error::RngError;
pub use flaw::Flawed;
pub use snapshot::{SnapshotSource, SourceSnapshot};
pub use source::{BitSource, MAX_BITS, SkippingSource, StatefulSource};
