use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for GetProof exchanges, shared by every WebSocket connection.
#[derive(Debug, Default)]
pub struct ExchangeStats {
    opened: AtomicU64,
    closed_by_peer: AtomicU64,
    cancelled: AtomicU64,
    transport_errors: AtomicU64,
}

/// Point-in-time view of [`ExchangeStats`], as reported by `/health`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExchangeSnapshot {
    pub open: u64,
    pub closed_by_peer: u64,
    pub cancelled: u64,
    pub transport_errors: u64,
}

impl ExchangeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_opened(&self) {
        self.opened.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_closed_by_peer(&self) {
        self.closed_by_peer.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cancelled(&self) {
        self.cancelled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_transport_error(&self) {
        self.transport_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ExchangeSnapshot {
        let opened = self.opened.load(Ordering::Relaxed);
        let closed_by_peer = self.closed_by_peer.load(Ordering::Relaxed);
        let cancelled = self.cancelled.load(Ordering::Relaxed);
        ExchangeSnapshot {
            open: opened.saturating_sub(closed_by_peer + cancelled),
            closed_by_peer,
            cancelled,
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
        }
    }
}
