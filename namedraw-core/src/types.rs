use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateTag {
    Input,
    Selecting,
    Revealing,
    Done,
}

impl fmt::Display for StateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            StateTag::Input => "input",
            StateTag::Selecting => "selecting",
            StateTag::Revealing => "revealing",
            StateTag::Done => "done",
        };
        f.write_str(tag)
    }
}

/// One completed draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub round: usize,
    pub slot: usize,
    pub name: String,
    pub drawn_at: DateTime<Utc>,
}

/// Flow projection for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub flow_id: Uuid,
    pub state: StateTag,
    pub all: Vec<String>,
    pub remaining: Vec<String>,
    pub remaining_count: usize,
    pub winner: Option<String>,
    pub history: Vec<DrawRecord>,
    pub notice: Option<String>,
}
