//! Construction of [`ProverService`].
//!
//! The placeholder public inputs are derived once here, so a bad mock
//! constant fails at startup instead of on the first completed poll.

use std::sync::Arc;

use super::service::ProverService;
use super::status::Versions;
use crate::domain::{Proof, ProverError, PublicInputs, PublicInputsExtended};
use crate::ports::{Clock, CompletionPolicy, SystemClock, TwoStepPolicy};
use crate::registry::JobRegistry;

/// Builds a [`ProverService`]. Defaults: fresh registry, [`TwoStepPolicy`],
/// [`SystemClock`], versions "1"/"1".
///
/// ```ignore
/// let service = ServiceBuilder::new().versions("1", "1").build()?;
/// ```
pub struct ServiceBuilder {
    registry: Option<Arc<JobRegistry>>,
    policy: Arc<dyn CompletionPolicy>,
    clock: Arc<dyn Clock>,
    versions: Versions,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to derive placeholder public inputs: {0}")]
    PublicInputs(#[from] ProverError),

    #[error("{0} version must not be empty")]
    EmptyVersion(&'static str),
}

impl ServiceBuilder {
    pub fn new() -> Self {
        Self {
            registry: None,
            policy: Arc::new(TwoStepPolicy),
            clock: Arc::new(SystemClock),
            versions: Versions::default(),
        }
    }

    /// Share an existing registry instead of creating a fresh one.
    pub fn registry(mut self, registry: Arc<JobRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn completion_policy<P: CompletionPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn versions(mut self, proto: impl Into<String>, server: impl Into<String>) -> Self {
        self.versions = Versions {
            proto: proto.into(),
            server: server.into(),
        };
        self
    }

    pub fn build(self) -> Result<ProverService, BuildError> {
        if self.versions.proto.is_empty() {
            return Err(BuildError::EmptyVersion("proto"));
        }
        if self.versions.server.is_empty() {
            return Err(BuildError::EmptyVersion("server"));
        }

        let public = PublicInputsExtended {
            public_inputs: PublicInputs::placeholder()?,
        };

        Ok(ProverService {
            registry: self.registry.unwrap_or_default(),
            policy: self.policy,
            clock: self.clock,
            versions: self.versions,
            proof: Proof::placeholder(),
            public,
        })
    }
}

impl Default for ServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GenProofRequest;

    #[tokio::test]
    async fn test_build_defaults() {
        let service = ServiceBuilder::new().build().unwrap();
        let status = service.get_status().await;
        assert_eq!(status.version_proto, "1");
        assert_eq!(status.version_server, "1");
    }

    #[tokio::test]
    async fn test_build_custom_versions() {
        let service = ServiceBuilder::new().versions("2", "0.3.1").build().unwrap();
        let status = service.get_status().await;
        assert_eq!(status.version_proto, "2");
        assert_eq!(status.version_server, "0.3.1");
    }

    #[test]
    fn test_build_rejects_empty_version() {
        let result = ServiceBuilder::new().versions("", "1").build();
        assert!(matches!(result, Err(BuildError::EmptyVersion("proto"))));

        let result = ServiceBuilder::new().versions("1", "").build();
        assert!(matches!(result, Err(BuildError::EmptyVersion("server"))));
    }

    #[tokio::test]
    async fn test_build_shares_registry() {
        let registry = Arc::new(JobRegistry::new());
        let service = ServiceBuilder::new()
            .registry(Arc::clone(&registry))
            .build()
            .unwrap();

        service.gen_proof(GenProofRequest::default()).await;
        assert_eq!(registry.last_seq().await, 1);
    }
}
