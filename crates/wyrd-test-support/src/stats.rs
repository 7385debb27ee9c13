//! Small statistics toolkit for distribution and fairness tests.

/// Standard-normal quantile for a one-sided 0.999 confidence level.
pub const Z_999: f64 = 3.090_232;

/// Running mean and variance (Welford's method).
#[derive(Debug, Clone, Copy, Default)]
pub struct Moments {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Moments {
    /// Adds one observation.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        #[allow(clippy::cast_precision_loss)]
        let n = self.count as f64;
        let delta = value - self.mean;
        self.mean += delta / n;
        self.m2 += delta * (value - self.mean);
    }

    /// Observations seen so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sample mean, `0.0` when empty.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Unbiased sample variance, `0.0` with fewer than two observations.
    #[must_use]
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let denominator = (self.count - 1) as f64;
        self.m2 / denominator
    }
}

impl FromIterator<f64> for Moments {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut moments = Self::default();
        for value in iter {
            moments.push(value);
        }
        moments
    }
}

/// Counts `samples` into `buckets` equal-width buckets over `[lower, upper)`.
/// Values outside the range are clamped into the edge buckets.
#[must_use]
pub fn bucket_counts<I>(samples: I, buckets: usize, lower: f64, upper: f64) -> Vec<u64>
where
    I: IntoIterator<Item = f64>,
{
    let mut counts = vec![0_u64; buckets];
    #[allow(clippy::cast_precision_loss)]
    let scale = buckets as f64 / (upper - lower);
    for sample in samples {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (((sample - lower) * scale).max(0.0) as usize).min(buckets - 1);
        counts[index] += 1;
    }
    counts
}

/// Pearson's chi-squared statistic of `counts` against a uniform expectation.
#[must_use]
pub fn chi_squared(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    #[allow(clippy::cast_precision_loss)]
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            #[allow(clippy::cast_precision_loss)]
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Approximate chi-squared critical value for `degrees_of_freedom` at the
/// one-sided level matching normal quantile `z` (Wilson-Hilferty).
#[must_use]
pub fn chi_squared_critical(degrees_of_freedom: usize, z: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let k = degrees_of_freedom as f64;
    let h = 2.0 / (9.0 * k);
    k * (1.0 - h + z * h.sqrt()).powi(3)
}
