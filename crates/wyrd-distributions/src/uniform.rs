//! Uniform doubles in `[0, 1)`.

use wyrd_core::distribution::{Distribution, Support};
use wyrd_core::source::BitSource;

const MANTISSA_MASK: u64 = (1 << 53) - 1;

/// 2^-53, the gap between adjacent outputs.
const UNIT: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Draws one `next_u64` and scales its low 53 bits into `[0, 1)`.
///
/// Every multiple of 2^-53 in range is equally likely; the largest output is
/// `1 - 2^-53`.
#[must_use]
pub fn unit_f64(source: &mut dyn BitSource) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let mantissa = (source.next_u64() & MANTISSA_MASK) as f64;
    mantissa * UNIT
}

/// The uniform distribution over `[0, 1)`, via [`unit_f64`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uniform;

impl Distribution for Uniform {
    fn sample(&self, source: &mut dyn BitSource) -> f64 {
        unit_f64(source)
    }

    fn support(&self) -> Support {
        Support::half_open(0.0, 1.0)
    }
}
