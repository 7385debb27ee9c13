//! Marker for knowingly non-uniform generators.

use crate::source::BitSource;

/// Declares that a source's output is intentionally degraded: detectable
/// periodicity, skew or correlation. Such sources are kept for aesthetic or
/// comparative use and must not serve as a statistical-quality baseline.
///
/// The marker carries no items. Test harnesses route on the trait bound, so a
/// flawed source is exempted from fairness checks at compile time rather than
/// by inspecting an instance.
pub trait Flawed: BitSource {}

impl<S: Flawed + ?Sized> Flawed for &mut S {}

impl<S: Flawed + ?Sized> Flawed for Box<S> {}

/// Compiles only when `S` carries the [`Flawed`] marker.
pub const fn assert_flawed<S: Flawed + ?Sized>() {}
