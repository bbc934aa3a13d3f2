//! GetStatus snapshot.
//!
//! The mock prover is always idle. "Last computed" is the most recently
//! allocated id and "currently computing" is the id the next submission will
//! receive; neither reflects real progress.

use chrono::{DateTime, Utc};

use crate::domain::{GetStatusResponse, ProverState};

pub const SERVER_PROTO_VERSION: &str = "1";
pub const SERVER_VERSION: &str = "1";

/// Static version strings reported by `GetStatus`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versions {
    pub proto: String,
    pub server: String,
}

impl Default for Versions {
    fn default() -> Self {
        Self {
            proto: SERVER_PROTO_VERSION.to_string(),
            server: SERVER_VERSION.to_string(),
        }
    }
}

pub(crate) fn snapshot(last_seq: u64, now: DateTime<Utc>, versions: &Versions) -> GetStatusResponse {
    GetStatusResponse {
        state: ProverState::Idle,
        last_computed_request_id: last_seq.to_string(),
        last_computed_end_time: u64::try_from(now.timestamp()).unwrap_or(0),
        current_computing_request_id: last_seq.saturating_add(1).to_string(),
        current_computing_start_time: 0,
        version_proto: versions.proto.clone(),
        version_server: versions.server.clone(),
        pending_request_queue_ids: Vec::new(),
    }
}
