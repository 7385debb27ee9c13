//! Curved: a bell-ish shape from one draw, bounded to `[-1, 1)`.

use wyrd_core::distribution::{Distribution, Support};
use wyrd_core::source::BitSource;

/// Scale mapping a 16-bit lane into `[0, 0.5)`.
const LANE_SCALE: f64 = 1.0 / 131_072.0;

/// Irwin-Hall shaped samples: frequently near 0, rarely near the bounds.
///
/// Algorithm: one `next_u64`, split into four 16-bit lanes, each mapped to
/// `0.5 + lane / 2^17`; returns the sum minus 3.
///
/// Support: `[-1, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Curved;

impl Distribution for Curved {
    fn sample(&self, source: &mut dyn BitSource) -> f64 {
        let word = source.next_u64();
        let lanes: f64 = (0..4)
            .map(|lane| {
                let bits = (word >> (lane * 16)) & 0xFFFF;
                #[allow(clippy::cast_precision_loss)]
                let value = bits as f64;
                0.5 + value * LANE_SCALE
            })
            .sum();
        lanes - 3.0
    }

    fn support(&self) -> Support {
        Support::half_open(-1.0, 1.0)
    }
}
