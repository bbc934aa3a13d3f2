use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use zkprover_core::domain::ProverError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `zkprover_core`.
    #[error(transparent)]
    Prover(#[from] ProverError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Prover(ProverError::Unimplemented(_)) => (
                StatusCode::NOT_IMPLEMENTED,
                "NOT_IMPLEMENTED",
                self.to_string(),
            ),
            AppError::Prover(err @ ProverError::InvalidHex(_)) => {
                tracing::error!(error = %err, "Internal prover error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
