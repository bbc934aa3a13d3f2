//! ProverService - the mock prover's operations.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::poll_loop;
use super::status::{self, Versions};
use crate::domain::{
    CancelRequest, CancelResponse, CancelResult, ExchangeError, GenProofRequest,
    GenProofResponse, GenProofResult, GetProofRequest, GetProofResponse, GetStatusResponse,
    JobCounts, Proof, ProverError, PublicInputsExtended,
};
use crate::ports::{Clock, CompletionPolicy, PollChannel};
use crate::registry::{JobRegistry, PollOutcome};

/// One service instance per process; cheap to share behind `Arc`.
///
/// Build it with [`ServiceBuilder`](super::ServiceBuilder).
pub struct ProverService {
    pub(crate) registry: Arc<JobRegistry>,
    pub(crate) policy: Arc<dyn CompletionPolicy>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) versions: Versions,
    pub(crate) proof: Proof,
    pub(crate) public: PublicInputsExtended,
}

impl ProverService {
    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// Register a new job. Never fails and never inspects the payload.
    pub async fn gen_proof(&self, request: GenProofRequest) -> GenProofResponse {
        let id = self.registry.submit().await;
        tracing::info!(job_id = %id, input_is_null = request.0.is_null(), "proof job submitted");
        GenProofResponse {
            id,
            result: GenProofResult::Ok,
        }
    }

    /// Apply a single poll and build its reply.
    pub async fn answer_poll(&self, request: &GetProofRequest) -> GetProofResponse {
        let id = request.id.clone();
        match self.registry.poll(&id, self.policy.as_ref()).await {
            PollOutcome::Unknown => {
                tracing::debug!(job_id = %id, "poll for unknown job");
                GetProofResponse::error(id)
            }
            PollOutcome::Pending => GetProofResponse::pending(id),
            PollOutcome::Completed => {
                GetProofResponse::completed(id, self.proof.clone(), self.public.clone())
            }
        }
    }

    /// Serve one GetProof exchange over `channel`.
    ///
    /// Returns `Ok(())` when the peer closes cleanly and
    /// `Err(ExchangeError::Cancelled)` when `cancel` fires first.
    pub async fn get_proof<C>(
        &self,
        channel: &mut C,
        cancel: &CancellationToken,
    ) -> Result<(), ExchangeError>
    where
        C: PollChannel + ?Sized,
    {
        poll_loop::run_exchange(self, channel, cancel).await
    }

    /// Read-only snapshot. Never touches job state.
    pub async fn get_status(&self) -> GetStatusResponse {
        let last_seq = self.registry.last_seq().await;
        status::snapshot(last_seq, self.clock.now(), &self.versions)
    }

    /// Acknowledge a cancel request. The job, known or not, is left untouched.
    pub async fn cancel(&self, request: CancelRequest) -> CancelResponse {
        tracing::debug!(job_id = %request.id, "cancel acknowledged without effect");
        CancelResponse {
            result: CancelResult::Ok,
        }
    }

    pub async fn job_counts(&self) -> JobCounts {
        self.registry.counts_by_state().await
    }

    pub async fn execute(&self) -> Result<(), ProverError> {
        Err(ProverError::Unimplemented("Execute"))
    }

    pub async fn synchronize_batch_proposal(&self) -> Result<(), ProverError> {
        Err(ProverError::Unimplemented("SynchronizeBatchProposal"))
    }
}
