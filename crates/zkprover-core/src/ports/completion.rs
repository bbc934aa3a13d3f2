//! CompletionPolicy port - decide what a poll of a known job reports.
//!
//! Policies are pure: they see the job's current state and return the reply
//! kind plus the state to store. The registry applies the result atomically
//! and refuses transitions that would move a job backwards.

use crate::domain::JobState;

/// What a poll of a known job reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollVerdict {
    Pending,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub verdict: PollVerdict,
    pub next: JobState,
}

pub trait CompletionPolicy: Send + Sync {
    fn on_poll(&self, current: JobState) -> Transition;
}

/// "Ask once, get told to wait; ask again, get the result."
///
/// - Created  -> reply Pending,   store Notified
/// - Notified -> reply Completed, store Notified
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoStepPolicy;

impl CompletionPolicy for TwoStepPolicy {
    fn on_poll(&self, current: JobState) -> Transition {
        match current {
            JobState::Created => Transition {
                verdict: PollVerdict::Pending,
                next: JobState::Notified,
            },
            JobState::Notified => Transition {
                verdict: PollVerdict::Completed,
                next: JobState::Notified,
            },
        }
    }
}
