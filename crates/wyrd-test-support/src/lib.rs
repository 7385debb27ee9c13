//! Shared test sources, contract checks and statistics for Wyrd.

pub mod contract;
pub mod fairness;
mod logging;
mod sequence;
pub mod stats;

pub use fairness::{FairnessOutcome, FairnessSuite, Verdict};
pub use logging::init_test_tracing;
pub use sequence::{ConstantSource, SequenceSource};
