use crate::config::FlowConfig;
use crate::types::StateTag;
use crate::SelectionFlow;
use std::future::Future;
use std::time::Duration;

/// How a reveal came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The dwell ran out
    Elapsed,
    /// The host acknowledged before the dwell ran out
    Acknowledged,
    /// The flow was not revealing, nothing was awaited
    NotRevealing,
}

/// Holds a flow in `Revealing` for a fixed dwell, then moves it on.
///
/// The wait is an awaited tokio timer so other sessions on the same runtime
/// keep running during the reveal.
#[derive(Debug, Clone, Copy)]
pub struct RevealTimer {
    dwell: Duration,
}

impl Default for RevealTimer {
    fn default() -> Self {
        Self::new(FlowConfig::default().reveal_dwell)
    }
}

impl RevealTimer {
    pub fn new(dwell: Duration) -> Self {
        Self { dwell }
    }

    pub fn from_config(config: &FlowConfig) -> Self {
        Self::new(config.reveal_dwell)
    }

    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    /// Wait for the dwell or for `early`, whichever finishes first, then
    /// acknowledge the reveal.
    ///
    /// Pass `std::future::pending()` when the host offers no way to skip.
    pub async fn run<F>(&self, flow: &mut SelectionFlow, early: F) -> RevealOutcome
    where
        F: Future<Output = ()>,
    {
        if flow.state_tag() != StateTag::Revealing {
            return RevealOutcome::NotRevealing;
        }

        tracing::debug!("Flow {} revealing for {:?}", flow.id(), self.dwell);

        let outcome = tokio::select! {
            _ = tokio::time::sleep(self.dwell) => RevealOutcome::Elapsed,
            _ = early => RevealOutcome::Acknowledged,
        };

        tracing::debug!("Flow {} reveal ended: {:?}", flow.id(), outcome);
        flow.acknowledge_reveal();
        outcome
    }
}
