use std::time::Duration;

use tokio::sync::watch;

use crate::{
    domain::repositories::messaging_gateway::MessagingGateway,
    entities::{DispatchAction, DispatchOutcome, DispatchRecord, DispatchReport},
};

/// Stops a running dispatch loop before its next item.
#[derive(Debug)]
pub struct DispatchCanceller {
    tx: watch::Sender<bool>,
}

#[derive(Debug, Clone)]
pub struct DispatchCancellation {
    rx: watch::Receiver<bool>,
}

pub fn dispatch_cancellation() -> (DispatchCanceller, DispatchCancellation) {
    let (tx, rx) = watch::channel(false);
    (DispatchCanceller { tx }, DispatchCancellation { rx })
}

impl DispatchCanceller {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl DispatchCancellation {
    /// A token that is never cancelled.
    pub fn none() -> Self {
        dispatch_cancellation().1
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // Canceller dropped without cancelling.
                std::future::pending::<()>().await;
            }
        }
    }
}

pub(crate) struct NotifyArrearsUsecase {
    interval: Duration,
}

impl NotifyArrearsUsecase {
    pub(crate) fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Hands each action to the gateway in order, waiting `interval` between
    /// consecutive hand-offs. A failed hand-off is recorded and the loop moves
    /// on; there are no retries. Cancellation is checked before every item and
    /// while waiting.
    pub(crate) async fn dispatch_all<G>(
        &self,
        actions: Vec<DispatchAction>,
        gateway: &G,
        mut cancellation: DispatchCancellation,
    ) -> DispatchReport
    where
        G: MessagingGateway + ?Sized,
    {
        let mut report = DispatchReport::default();
        let mut pending = actions.into_iter();

        while let Some(action) = pending.next() {
            if !report.records.is_empty() {
                tokio::select! {
                    _ = tokio::time::sleep(self.interval) => {}
                    _ = cancellation.cancelled() => {}
                }
            }
            if cancellation.is_cancelled() {
                report.cancelled = true;
                report.skipped.push(action);
                report.skipped.extend(pending.by_ref());
                tracing::info!(
                    dispatched = report.records.len(),
                    skipped = report.skipped.len(),
                    "reminder dispatch cancelled"
                );
                break;
            }

            let outcome = match gateway.open_external_link(&action.url) {
                Ok(()) => {
                    tracing::debug!(member = %action.member_id, "reminder handed off");
                    DispatchOutcome::HandedOff
                }
                Err(e) => {
                    tracing::warn!(member = %action.member_id, "reminder hand-off failed: {}", e);
                    DispatchOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            report.records.push(DispatchRecord { action, outcome });
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use fractic_server_error::ServerError;
    use tokio::time::Instant;

    use super::*;
    use crate::{entities::MemberId, errors::MessagingHandoffFailed};

    struct RecordingGateway {
        calls: Mutex<Vec<(String, Instant)>>,
        fail_on: Option<usize>,
        cancel_after: Option<(usize, DispatchCanceller)>,
    }

    impl RecordingGateway {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: None,
                cancel_after: None,
            }
        }
    }

    impl MessagingGateway for RecordingGateway {
        fn open_external_link(&self, url: &str) -> Result<(), ServerError> {
            let mut calls = self.calls.lock().unwrap();
            calls.push((url.to_string(), Instant::now()));
            let n = calls.len();
            if let Some((after, canceller)) = &self.cancel_after {
                if n == *after {
                    canceller.cancel();
                }
            }
            if self.fail_on == Some(n) {
                return Err(MessagingHandoffFailed::new(url));
            }
            Ok(())
        }
    }

    fn actions(n: usize) -> Vec<DispatchAction> {
        (1..=n)
            .map(|i| DispatchAction {
                member_id: MemberId::new(i.to_string()),
                member_name: format!("Üye {}", i),
                message: "Merhaba".to_string(),
                url: format!("https://wa.me/{}?text=Merhaba", i),
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn dispatches_every_action_with_gaps_between_them() {
        let gateway = RecordingGateway::new();
        let usecase = NotifyArrearsUsecase::new(Duration::from_millis(1500));

        let report = usecase
            .dispatch_all(actions(4), &gateway, DispatchCancellation::none())
            .await;

        assert_eq!(report.records.len(), 4);
        assert!(!report.cancelled);
        let calls = gateway.calls.lock().unwrap();
        let gaps: Vec<Duration> = calls.windows(2).map(|w| w[1].1 - w[0].1).collect();
        assert_eq!(gaps.len(), 3);
        assert!(gaps.iter().all(|g| *g >= Duration::from_millis(1500)));
    }

    #[tokio::test(start_paused = true)]
    async fn continues_past_failed_hand_off() {
        let gateway = RecordingGateway {
            fail_on: Some(2),
            ..RecordingGateway::new()
        };
        let usecase = NotifyArrearsUsecase::new(Duration::from_millis(1500));

        let report = usecase
            .dispatch_all(actions(3), &gateway, DispatchCancellation::none())
            .await;

        assert_eq!(report.records.len(), 3);
        assert_eq!(report.handed_off(), 2);
        assert_eq!(report.failed(), 1);
        assert!(matches!(
            report.records[1].outcome,
            DispatchOutcome::Failed { .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_skips_remaining_actions() {
        let (canceller, cancellation) = dispatch_cancellation();
        let gateway = RecordingGateway {
            cancel_after: Some((2, canceller)),
            ..RecordingGateway::new()
        };
        let usecase = NotifyArrearsUsecase::new(Duration::from_millis(1500));

        let report = usecase.dispatch_all(actions(5), &gateway, cancellation).await;

        assert!(report.cancelled);
        assert_eq!(report.records.len(), 2);
        let skipped: Vec<&str> = report.skipped.iter().map(|a| a.member_id.as_str()).collect();
        assert_eq!(skipped, vec!["3", "4", "5"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_before_start_dispatches_nothing() {
        let (canceller, cancellation) = dispatch_cancellation();
        canceller.cancel();
        let gateway = RecordingGateway::new();
        let usecase = NotifyArrearsUsecase::new(Duration::from_millis(1500));

        let report = usecase.dispatch_all(actions(2), &gateway, cancellation).await;

        assert!(report.cancelled);
        assert!(report.records.is_empty());
        assert_eq!(report.skipped.len(), 2);
    }
}
