use crate::error::{NamedrawError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest reveal a config may ask for
pub const MAX_REVEAL_DWELL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub reveal_dwell: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            reveal_dwell: Duration::from_secs(3),
        }
    }
}

impl FlowConfig {
    pub fn with_reveal_secs(secs: u64) -> Self {
        Self {
            reveal_dwell: Duration::from_secs(secs),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.reveal_dwell > MAX_REVEAL_DWELL {
            return Err(NamedrawError::config(format!(
                "Reveal dwell must be at most {} seconds, got {:?}",
                MAX_REVEAL_DWELL.as_secs(),
                self.reveal_dwell
            )));
        }

        Ok(())
    }
}
