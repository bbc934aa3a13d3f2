//! Job registry: identifier allocation and per-job state.

mod memory;

pub use memory::JobRegistry;

/// Result of applying one poll to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The id was never allocated.
    Unknown,

    /// The job exists but is not reported as finished yet.
    Pending,

    /// The job is finished; the proof can be returned.
    Completed,
}
