//! Fairness suite: uniformity checks that respect the `Flawed` marker.
//!
//! Baseline sources go through chi-squared checks; sources carrying
//! [`Flawed`] can only be registered through [`FairnessSuite::flawed`], which
//! records them as exempt. The routing is decided by trait bounds, so a sound
//! source cannot be exempted by mistake.

use wyrd_core::flaw::Flawed;
use wyrd_core::source::BitSource;

use crate::stats::{Z_999, chi_squared, chi_squared_critical};

/// Buckets used by both checks (4 bits, or two 2-bit draws).
const BUCKETS: usize = 16;

/// Result of running one source through the suite.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Every check stayed under its critical value.
    Passed {
        /// Largest statistic observed across the checks.
        worst: f64,
        /// The critical value each check was held to.
        critical: f64,
    },
    /// A check exceeded its critical value.
    Failed {
        /// Name of the failing check.
        check: &'static str,
        /// The observed statistic.
        statistic: f64,
        /// The critical value it exceeded.
        critical: f64,
    },
    /// The source is marked `Flawed` and was not checked.
    Exempt,
}

/// A named verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct FairnessOutcome {
    /// Label given at registration.
    pub name: String,
    /// What the suite concluded.
    pub verdict: Verdict,
}

/// Collects fairness verdicts for a set of sources.
#[derive(Debug)]
pub struct FairnessSuite {
    draws: usize,
    outcomes: Vec<FairnessOutcome>,
}

impl FairnessSuite {
    /// Create a suite that draws `draws` samples per check.
    #[must_use]
    pub fn new(draws: usize) -> Self {
        Self {
            draws,
            outcomes: Vec::new(),
        }
    }

    /// Runs the uniformity checks against `source` and records the verdict.
    pub fn baseline<S: BitSource + ?Sized>(&mut self, name: &str, source: &mut S) -> &Verdict {
        let critical = chi_squared_critical(BUCKETS - 1, Z_999);
        let checks = [
            ("top bits", top_bits_chi_squared(source, self.draws)),
            ("serial low bits", serial_low_bits_chi_squared(source, self.draws)),
        ];

        let verdict = match checks.iter().find(|(_, statistic)| *statistic > critical) {
            Some(&(check, statistic)) => {
                tracing::warn!(source = name, check, statistic, critical, "fairness check failed");
                Verdict::Failed {
                    check,
                    statistic,
                    critical,
                }
            }
            None => {
                let worst = checks.iter().map(|(_, s)| *s).fold(0.0, f64::max);
                tracing::debug!(source = name, worst, critical, "fairness checks passed");
                Verdict::Passed { worst, critical }
            }
        };
        self.record(name, verdict)
    }

    /// Records `source` as exempt from fairness checks.
    pub fn flawed<S: Flawed + ?Sized>(&mut self, name: &str, _source: &S) -> &Verdict {
        tracing::debug!(source = name, "flawed source exempt from fairness checks");
        self.record(name, Verdict::Exempt)
    }

    /// Every verdict recorded so far, in registration order.
    #[must_use]
    pub fn outcomes(&self) -> &[FairnessOutcome] {
        &self.outcomes
    }

    /// Asserts that no recorded source failed.
    ///
    /// # Panics
    ///
    /// Panics listing every failed source.
    pub fn assert_no_failures(&self) {
        let failures: Vec<&FairnessOutcome> = self
            .outcomes
            .iter()
            .filter(|outcome| matches!(outcome.verdict, Verdict::Failed { .. }))
            .collect();
        assert!(failures.is_empty(), "fairness failures: {failures:#?}");
    }

    fn record(&mut self, name: &str, verdict: Verdict) -> &Verdict {
        self.outcomes.push(FairnessOutcome {
            name: name.to_owned(),
            verdict,
        });
        &self.outcomes[self.outcomes.len() - 1].verdict
    }
}

/// Chi-squared of the top four bits of `draws` words over 16 buckets.
///
/// # Panics
///
/// Never in practice; `next_bits(4)` is always a valid request.
pub fn top_bits_chi_squared<S: BitSource + ?Sized>(source: &mut S, draws: usize) -> f64 {
    let mut counts = [0_u64; BUCKETS];
    for _ in 0..draws {
        let bucket = source.next_bits(4).expect("4 is a valid bit count");
        counts[bucket as usize] += 1;
    }
    chi_squared(&counts)
}

/// Chi-squared of consecutive pairs of the lowest two bits over 16 buckets.
/// Catches generators whose low bits cycle with a short period.
pub fn serial_low_bits_chi_squared<S: BitSource + ?Sized>(source: &mut S, draws: usize) -> f64 {
    let mut counts = [0_u64; BUCKETS];
    for _ in 0..draws {
        let first = source.next_u32() & 3;
        let second = source.next_u32() & 3;
        counts[(first << 2 | second) as usize] += 1;
    }
    chi_squared(&counts)
}
