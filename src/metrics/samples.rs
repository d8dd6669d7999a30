use std::time::Duration;

use super::report::LatencySummary;

/// Numerator of the rank used for the tail percentile.
const P99_NUMERATOR: u64 = 99;
/// Denominator of the rank used for the tail percentile.
const P99_DENOMINATOR: u64 = 100;

/// Operation kind a sample set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Download,
}

impl Operation {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Operation::Upload => "http-upload",
            Operation::Download => "http-download",
        }
    }
}

/// Append-only latency samples for one operation kind.
#[derive(Debug, Clone)]
pub struct LatencySamples {
    operation: Operation,
    samples: Vec<Duration>,
}

impl LatencySamples {
    #[must_use]
    pub const fn new(operation: Operation) -> Self {
        Self {
            operation,
            samples: Vec::new(),
        }
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.samples.push(elapsed);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Count, arithmetic mean, and rank-based p99.
    ///
    /// The p99 is the sorted sample at index `floor(count * 99 / 100)`,
    /// clamped to the last sample. An empty set summarizes to zeros.
    #[must_use]
    pub fn summary(&self) -> LatencySummary {
        let count = u64::try_from(self.samples.len()).unwrap_or(u64::MAX);
        if count == 0 {
            return LatencySummary::empty(self.operation);
        }

        let total_ns = self
            .samples
            .iter()
            .fold(0_u128, |acc, sample| acc.saturating_add(sample.as_nanos()));
        let mean_ns = total_ns.checked_div(u128::from(count)).unwrap_or(0);
        let mean = Duration::from_nanos(u64::try_from(mean_ns).unwrap_or(u64::MAX));

        let mut sorted = self.samples.clone();
        sorted.sort_unstable();
        let rank = count
            .saturating_mul(P99_NUMERATOR)
            .checked_div(P99_DENOMINATOR)
            .unwrap_or(0)
            .min(count.saturating_sub(1));
        let p99 = usize::try_from(rank)
            .ok()
            .and_then(|idx| sorted.get(idx).copied())
            .unwrap_or_default();

        LatencySummary {
            operation: self.operation,
            count,
            mean,
            p99,
        }
    }
}
