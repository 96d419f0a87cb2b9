//! Process resource sampling.
//!
//! The driver shows the resident memory of this process and the 1-minute
//! system load average on every tick and in the summary.

mod sampler;

pub use sampler::{ResourceSampler, ResourceSnapshot, SystemSampler};
