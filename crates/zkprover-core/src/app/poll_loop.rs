//! GetProof exchange loop.
//!
//! Each iteration:
//! 1. Stop with `ExchangeError::Cancelled` if the token has fired.
//! 2. Receive the next poll, racing the token.
//!    - `Ok(None)`: the peer closed its side; finish cleanly.
//!    - `Err(_)`: log and go to the next iteration.
//! 3. Apply the poll to the registry and build the reply.
//! 4. Send the reply. A send failure is logged and the loop goes on.

use tokio_util::sync::CancellationToken;

use super::service::ProverService;
use crate::domain::ExchangeError;
use crate::ports::PollChannel;

/// Drive one exchange until the peer closes or `cancel` fires.
pub async fn run_exchange<C>(
    service: &ProverService,
    channel: &mut C,
    cancel: &CancellationToken,
) -> Result<(), ExchangeError>
where
    C: PollChannel + ?Sized,
{
    let mut answered: u64 = 0;

    loop {
        if cancel.is_cancelled() {
            tracing::debug!(answered, "poll exchange cancelled");
            return Err(ExchangeError::Cancelled);
        }

        let received = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(answered, "poll exchange cancelled while waiting");
                return Err(ExchangeError::Cancelled);
            }
            received = channel.recv() => received,
        };

        let request = match received {
            Ok(Some(request)) => request,
            Ok(None) => {
                tracing::debug!(answered, "peer closed poll exchange");
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(error = %e, "GetProof receive failed");
                continue;
            }
        };

        let response = service.answer_poll(&request).await;
        tracing::debug!(job_id = %response.id, result = ?response.result, "poll answered");

        if let Err(e) = channel.send(response).await {
            tracing::warn!(job_id = %request.id, error = %e, "GetProof send failed");
            continue;
        }
        answered += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;

    use super::*;
    use crate::app::ServiceBuilder;
    use crate::domain::{
        GenProofRequest, GetProofRequest, GetProofResponse, GetProofResult, JobId, StreamError,
    };

    /// Replays a fixed script of receive results, then reports a clean close
    /// (or blocks forever when `hang_at_end` is set).
    #[derive(Default)]
    struct ScriptedChannel {
        incoming: VecDeque<Result<Option<GetProofRequest>, StreamError>>,
        sent: Vec<GetProofResponse>,
        failing_sends: usize,
        hang_at_end: bool,
    }

    impl ScriptedChannel {
        fn polls(ids: &[&str]) -> Self {
            Self {
                incoming: ids
                    .iter()
                    .map(|id| Ok(Some(GetProofRequest { id: JobId::from(*id) })))
                    .collect(),
                ..Default::default()
            }
        }

        fn results(&self) -> Vec<(String, GetProofResult)> {
            self.sent
                .iter()
                .map(|r| (r.id.to_string(), r.result))
                .collect()
        }
    }

    #[async_trait]
    impl PollChannel for ScriptedChannel {
        async fn recv(&mut self) -> Result<Option<GetProofRequest>, StreamError> {
            match self.incoming.pop_front() {
                Some(next) => next,
                None if self.hang_at_end => std::future::pending().await,
                None => Ok(None),
            }
        }

        async fn send(&mut self, response: GetProofResponse) -> Result<(), StreamError> {
            if self.failing_sends > 0 {
                self.failing_sends -= 1;
                return Err(StreamError::Transport("broken pipe".into()));
            }
            self.sent.push(response);
            Ok(())
        }
    }

    #[tokio::test]
    async fn pending_then_completed_then_completed() {
        let service = ServiceBuilder::new().build().unwrap();
        let id = service.gen_proof(GenProofRequest::default()).await.id;
        assert_eq!(id.as_str(), "1");

        let mut channel = ScriptedChannel::polls(&["1", "1", "1", "999"]);
        let outcome = run_exchange(&service, &mut channel, &CancellationToken::new()).await;

        assert_eq!(outcome, Ok(()));
        assert_eq!(
            channel.results(),
            vec![
                ("1".to_string(), GetProofResult::Pending),
                ("1".to_string(), GetProofResult::CompletedOk),
                ("1".to_string(), GetProofResult::CompletedOk),
                ("999".to_string(), GetProofResult::Error),
            ]
        );
        assert_eq!(channel.sent[1], channel.sent[2]);
        assert!(channel.sent[0].proof.is_none());
        assert!(channel.sent[3].proof.is_none());
    }

    #[tokio::test]
    async fn interleaved_jobs_keep_separate_state() {
        let service = ServiceBuilder::new().build().unwrap();
        service.gen_proof(GenProofRequest::default()).await;
        service.gen_proof(GenProofRequest::default()).await;

        let mut channel = ScriptedChannel::polls(&["2", "1", "2", "1"]);
        run_exchange(&service, &mut channel, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            channel.results(),
            vec![
                ("2".to_string(), GetProofResult::Pending),
                ("1".to_string(), GetProofResult::Pending),
                ("2".to_string(), GetProofResult::CompletedOk),
                ("1".to_string(), GetProofResult::CompletedOk),
            ]
        );
    }

    #[tokio::test]
    async fn receive_errors_do_not_end_the_exchange() {
        let service = ServiceBuilder::new().build().unwrap();
        service.gen_proof(GenProofRequest::default()).await;

        let mut channel = ScriptedChannel::default();
        channel
            .incoming
            .push_back(Err(StreamError::Malformed("not json".into())));
        channel
            .incoming
            .push_back(Ok(Some(GetProofRequest { id: JobId::from("1") })));

        run_exchange(&service, &mut channel, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(
            channel.results(),
            vec![("1".to_string(), GetProofResult::Pending)]
        );
    }

    #[tokio::test]
    async fn send_errors_do_not_end_the_exchange() {
        let service = ServiceBuilder::new().build().unwrap();
        service.gen_proof(GenProofRequest::default()).await;

        let mut channel = ScriptedChannel::polls(&["1", "1"]);
        channel.failing_sends = 1;

        run_exchange(&service, &mut channel, &CancellationToken::new())
            .await
            .unwrap();

        // The lost reply still advanced the job.
        assert_eq!(
            channel.results(),
            vec![("1".to_string(), GetProofResult::CompletedOk)]
        );
    }

    #[tokio::test]
    async fn already_cancelled_token_ends_before_receiving() {
        let service = ServiceBuilder::new().build().unwrap();
        service.gen_proof(GenProofRequest::default()).await;

        let mut channel = ScriptedChannel::polls(&["1"]);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = run_exchange(&service, &mut channel, &cancel).await;
        assert_eq!(outcome, Err(ExchangeError::Cancelled));
        assert!(channel.sent.is_empty());
        assert_eq!(channel.incoming.len(), 1);
    }

    #[tokio::test]
    async fn cancellation_interrupts_a_blocked_receive() {
        let service = ServiceBuilder::new().build().unwrap();
        service.gen_proof(GenProofRequest::default()).await;

        let mut channel = ScriptedChannel::polls(&["1"]);
        channel.hang_at_end = true;
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let outcome = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            run_exchange(&service, &mut channel, &cancel),
        )
        .await
        .expect("exchange must observe cancellation");

        assert_eq!(outcome, Err(ExchangeError::Cancelled));
        assert_eq!(
            channel.results(),
            vec![("1".to_string(), GetProofResult::Pending)]
        );
    }
}
