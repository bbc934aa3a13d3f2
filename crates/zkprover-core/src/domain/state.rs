//! Job state machine.

use serde::{Deserialize, Serialize};

/// State of a proof job.
///
/// State transitions:
/// - Created -> Notified
///
/// There is no stored "completed" state: a job in `Notified` answers every
/// further poll with the finished proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// Submitted, never polled.
    Created,

    /// Polled at least once; the next poll reports completion.
    Notified,
}

impl JobState {
    /// Transitions only move forward (or stay put).
    pub fn can_advance_to(self, next: JobState) -> bool {
        next >= self
    }
}
