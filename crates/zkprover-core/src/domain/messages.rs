//! Request and response shapes of the prover service.
//!
//! These are transport-agnostic; the server crate moves them as JSON.

use serde::{Deserialize, Serialize};

use super::ids::JobId;
use super::proof::{Proof, PublicInputsExtended};

/// Proof generation request. The payload is opaque to the mock prover: any
/// JSON value (including `null` for an empty body) is accepted as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenProofRequest(pub serde_json::Value);

impl GenProofRequest {
    /// Wrap a raw request body. Empty bodies become `null`; bodies that are
    /// not JSON are kept as a string.
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        match serde_json::from_slice(body) {
            Ok(value) => Self(value),
            Err(_) => Self(serde_json::Value::String(
                String::from_utf8_lossy(body).into_owned(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenProofResult {
    Ok,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenProofResponse {
    pub id: JobId,
    pub result: GenProofResult,
}

/// One poll within an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProofRequest {
    pub id: JobId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GetProofResult {
    Pending,
    CompletedOk,
    Error,
}

/// Reply to one poll. `proof` and `public` are only set on `CompletedOk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProofResponse {
    pub id: JobId,
    pub result: GetProofResult,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<Proof>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<PublicInputsExtended>,
}

impl GetProofResponse {
    pub fn pending(id: JobId) -> Self {
        Self {
            id,
            result: GetProofResult::Pending,
            proof: None,
            public: None,
        }
    }

    pub fn error(id: JobId) -> Self {
        Self {
            id,
            result: GetProofResult::Error,
            proof: None,
            public: None,
        }
    }

    pub fn completed(id: JobId, proof: Proof, public: PublicInputsExtended) -> Self {
        Self {
            id,
            result: GetProofResult::CompletedOk,
            proof: Some(proof),
            public: Some(public),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProverState {
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStatusResponse {
    pub state: ProverState,
    pub last_computed_request_id: String,
    /// Unix seconds.
    pub last_computed_end_time: u64,
    pub current_computing_request_id: String,
    /// Unix seconds. Always 0: nothing is ever computing.
    pub current_computing_start_time: u64,
    pub version_proto: String,
    pub version_server: String,
    pub pending_request_queue_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
    pub id: JobId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelResult {
    Ok,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    pub result: CancelResult,
}

/// Aggregate view of the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCounts {
    pub created: usize,
    pub notified: usize,
}

impl JobCounts {
    pub fn total(&self) -> usize {
        self.created + self.notified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proof::PublicInputs;

    #[test]
    fn pending_reply_omits_artifact_fields() {
        let json = serde_json::to_value(GetProofResponse::pending(JobId::from_seq(1))).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "1", "result": "pending" }));
    }

    #[test]
    fn completed_reply_carries_proof_and_roots() {
        let public = PublicInputsExtended {
            public_inputs: PublicInputs::placeholder().unwrap(),
        };
        let resp = GetProofResponse::completed(JobId::from_seq(3), Proof::placeholder(), public);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["result"], "completed_ok");
        assert_eq!(json["proof"]["proof_a"], serde_json::json!(["0", "0"]));
        assert!(json["public"]["public_inputs"]["new_state_root"].is_string());
    }

    #[test]
    fn gen_proof_request_accepts_any_json_value() {
        for raw in ["{}", "\"opaque\"", "[1,2,3]", "42", "null"] {
            let req: GenProofRequest = serde_json::from_str(raw).unwrap();
            assert_eq!(req.0, serde_json::from_str::<serde_json::Value>(raw).unwrap());
        }
    }

    #[test]
    fn gen_proof_request_from_body_never_rejects() {
        assert_eq!(GenProofRequest::from_body(b""), GenProofRequest::default());
        assert_eq!(GenProofRequest::from_body(b"  \n"), GenProofRequest::default());
        assert_eq!(
            GenProofRequest::from_body(b"[1,2]").0,
            serde_json::json!([1, 2])
        );
        assert_eq!(
            GenProofRequest::from_body(b"not json").0,
            serde_json::json!("not json")
        );
    }
}
