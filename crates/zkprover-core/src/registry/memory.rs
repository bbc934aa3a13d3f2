//! In-memory job registry.

use std::collections::HashMap;

use tokio::sync::Mutex;

use super::PollOutcome;
use crate::domain::{JobCounts, JobId, JobState};
use crate::ports::{CompletionPolicy, PollVerdict};

/// In-memory registry state.
struct RegistryState {
    /// All jobs ever submitted. Nothing is evicted.
    jobs: HashMap<JobId, JobState>,

    /// Sequence number of the most recently allocated id (0 = none yet).
    last_seq: u64,
}

impl RegistryState {
    fn new() -> Self {
        Self {
            jobs: HashMap::new(),
            last_seq: 0,
        }
    }

    /// Allocate a new JobId.
    fn allocate(&mut self) -> JobId {
        self.last_seq += 1;
        JobId::from_seq(self.last_seq)
    }

    fn counts_by_state(&self) -> JobCounts {
        let mut counts = JobCounts::default();
        for state in self.jobs.values() {
            match state {
                JobState::Created => counts.created += 1,
                JobState::Notified => counts.notified += 1,
            }
        }
        counts
    }
}

/// Process-wide job registry.
///
/// Design:
/// - Submission (writer), polling (reader + writer) and status (reader) run
///   concurrently, so every operation holds the lock for its whole
///   read-modify-write.
/// - `poll` looks up and transitions under a single lock acquisition; two
///   exchanges polling the same fresh id can never both see `Created`.
pub struct JobRegistry {
    state: Mutex<RegistryState>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState::new()),
        }
    }

    /// Increment the counter and return the new id. No entry is created.
    pub async fn allocate(&self) -> JobId {
        let mut state = self.state.lock().await;
        state.allocate()
    }

    /// Create or overwrite the entry for `id`.
    ///
    /// This is the raw store primitive; it does not check transition order.
    pub async fn put(&self, id: JobId, job_state: JobState) {
        let mut state = self.state.lock().await;
        state.jobs.insert(id, job_state);
    }

    pub async fn get(&self, id: &JobId) -> Option<JobState> {
        let state = self.state.lock().await;
        state.jobs.get(id).copied()
    }

    /// Allocate an id and register it as `Created`.
    pub async fn submit(&self) -> JobId {
        let mut state = self.state.lock().await;
        let id = state.allocate();
        state.jobs.insert(id.clone(), JobState::Created);
        id
    }

    /// Apply one poll of `id` under `policy`.
    pub async fn poll(&self, id: &JobId, policy: &dyn CompletionPolicy) -> PollOutcome {
        let mut state = self.state.lock().await;
        let Some(current) = state.jobs.get_mut(id) else {
            return PollOutcome::Unknown;
        };

        let transition = policy.on_poll(*current);
        if !current.can_advance_to(transition.next) {
            tracing::warn!(
                job_id = %id,
                from = ?current,
                to = ?transition.next,
                "completion policy requested a backward transition; keeping current state"
            );
            // The reply follows the state that stays stored, not the refused verdict.
            return match *current {
                JobState::Created => PollOutcome::Pending,
                JobState::Notified => PollOutcome::Completed,
            };
        }

        *current = transition.next;
        match transition.verdict {
            PollVerdict::Pending => PollOutcome::Pending,
            PollVerdict::Completed => PollOutcome::Completed,
        }
    }

    /// Sequence number of the most recently allocated id (0 before the first).
    pub async fn last_seq(&self) -> u64 {
        self.state.lock().await.last_seq
    }

    pub async fn counts_by_state(&self) -> JobCounts {
        self.state.lock().await.counts_by_state()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.jobs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.jobs.is_empty()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}
