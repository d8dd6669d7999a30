use std::fmt;
use std::time::Duration;

use super::samples::Operation;

/// Nanoseconds per millisecond.
const NS_PER_MS: u128 = 1_000_000;
/// Nanoseconds per displayed fraction digit group.
const NS_PER_US: u128 = 1_000;

/// Aggregate latency figures for one operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySummary {
    pub operation: Operation,
    pub count: u64,
    pub mean: Duration,
    pub p99: Duration,
}

impl LatencySummary {
    #[must_use]
    pub const fn empty(operation: Operation) -> Self {
        Self {
            operation,
            count: 0,
            mean: Duration::ZERO,
            p99: Duration::ZERO,
        }
    }
}

impl fmt::Display for LatencySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} files, average latency: {} ms, 0.99P latency: {} ms",
            self.operation.label(),
            self.count,
            format_ms(self.mean),
            format_ms(self.p99)
        )
    }
}

/// Render a duration as milliseconds with three decimals.
#[must_use]
pub fn format_ms(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    let whole = nanos.checked_div(NS_PER_MS).unwrap_or(0);
    let fraction = nanos
        .checked_rem(NS_PER_MS)
        .and_then(|rest| rest.checked_div(NS_PER_US))
        .unwrap_or(0);
    format!("{}.{:03}", whole, fraction)
}
