//! Domain model (ids, job state, proof artifact, messages, errors).

pub mod errors;
pub mod ids;
pub mod messages;
pub mod proof;
pub mod state;

pub use errors::{ExchangeError, ProverError, StreamError};
pub use ids::JobId;
pub use messages::{
    CancelRequest, CancelResponse, CancelResult, GenProofRequest, GenProofResponse,
    GenProofResult, GetProofRequest, GetProofResponse, GetProofResult, GetStatusResponse,
    JobCounts, ProverState,
};
pub use proof::{Proof, ProofB, PublicInputs, PublicInputsExtended, hex_to_decimal};
pub use state::JobState;
