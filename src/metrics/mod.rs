//! Latency sample collection and summary reporting.
mod report;
mod samples;


pub use report::{LatencySummary, format_ms};
pub use samples::{LatencySamples, Operation};
