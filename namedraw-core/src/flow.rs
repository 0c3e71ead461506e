use crate::participants::{parse_participants, ParticipantList};
use crate::types::{DrawRecord, FlowSnapshot, StateTag};
use crate::ParseError;
use chrono::Utc;
use rand::Rng;
use std::mem;
use uuid::Uuid;

/// Where a flow currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Input,
    Selecting {
        participants: ParticipantList,
    },
    /// `winner` is a slot in `participants.all()` that has already been
    /// removed from the remaining entries.
    Revealing {
        participants: ParticipantList,
        winner: usize,
    },
    Done {
        participants: ParticipantList,
    },
}

impl FlowState {
    pub fn tag(&self) -> StateTag {
        match self {
            FlowState::Input => StateTag::Input,
            FlowState::Selecting { .. } => StateTag::Selecting,
            FlowState::Revealing { .. } => StateTag::Revealing,
            FlowState::Done { .. } => StateTag::Done,
        }
    }

    pub fn participants(&self) -> Option<&ParticipantList> {
        match self {
            FlowState::Input => None,
            FlowState::Selecting { participants }
            | FlowState::Revealing { participants, .. }
            | FlowState::Done { participants } => Some(participants),
        }
    }
}

/// A single linear run from name entry until every name has been drawn.
///
/// One instance belongs to one session. Every operation is synchronous and
/// total: calls made in the wrong state are logged and ignored instead of
/// failing.
#[derive(Debug)]
pub struct SelectionFlow {
    id: Uuid,
    state: FlowState,
    history: Vec<DrawRecord>,
    notice: Option<String>,
}

impl Default for SelectionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionFlow {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: FlowState::Input,
            history: Vec::new(),
            notice: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn state_tag(&self) -> StateTag {
        self.state.tag()
    }

    /// Validation message from the last rejected `start`
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn history(&self) -> &[DrawRecord] {
        &self.history
    }

    pub fn all(&self) -> Option<&[String]> {
        self.state.participants().map(ParticipantList::all)
    }

    pub fn remaining(&self) -> Vec<&str> {
        self.state
            .participants()
            .map(ParticipantList::remaining)
            .unwrap_or_default()
    }

    pub fn remaining_count(&self) -> usize {
        self.state
            .participants()
            .map_or(0, ParticipantList::remaining_count)
    }

    /// Name being revealed, only while `Revealing`
    pub fn winner(&self) -> Option<&str> {
        match &self.state {
            FlowState::Revealing {
                participants,
                winner,
            } => participants.name(*winner),
            _ => None,
        }
    }

    /// Parse `raw_text` and begin selecting.
    ///
    /// On a parse failure the flow stays in `Input` and keeps the message
    /// available through [`SelectionFlow::notice`].
    pub fn start(&mut self, raw_text: &str) -> Result<(), ParseError> {
        if !matches!(self.state, FlowState::Input) {
            tracing::warn!(
                "Flow {} ignored start while {}",
                self.id,
                self.state.tag()
            );
            return Ok(());
        }

        match parse_participants(raw_text) {
            Ok(participants) => {
                tracing::info!(
                    "Flow {} started with {} participants",
                    self.id,
                    participants.len()
                );
                self.notice = None;
                self.state = FlowState::Selecting { participants };
                Ok(())
            }
            Err(e) => {
                tracing::info!("Flow {} rejected input: {}", self.id, e);
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Draw with the thread-local RNG
    pub fn draw(&mut self) -> Option<&str> {
        let mut rng = rand::thread_rng();
        self.draw_with(&mut rng)
    }

    /// Remove one uniformly chosen remaining entry and reveal it.
    ///
    /// Returns the winner's name. Outside `Selecting` nothing happens and
    /// `None` is returned; an already exhausted list moves the flow to `Done`.
    pub fn draw_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        let mut participants = match mem::replace(&mut self.state, FlowState::Input) {
            FlowState::Selecting { participants } => participants,
            other => {
                tracing::warn!("Flow {} ignored draw while {}", self.id, other.tag());
                self.state = other;
                return None;
            }
        };

        if participants.is_exhausted() {
            tracing::info!("Flow {} has nobody left to draw", self.id);
            self.state = FlowState::Done { participants };
            return None;
        }

        let index = rng.gen_range(0..participants.remaining_count());
        let Some(winner) = participants.take(index) else {
            self.state = FlowState::Selecting { participants };
            return None;
        };

        let name = participants.all()[winner].clone();
        let round = self.history.len() + 1;
        tracing::info!(
            "Flow {} round {}: drew {} ({} left)",
            self.id,
            round,
            name,
            participants.remaining_count()
        );

        self.history.push(DrawRecord {
            round,
            slot: winner,
            name,
            drawn_at: Utc::now(),
        });
        self.state = FlowState::Revealing {
            participants,
            winner,
        };

        self.winner()
    }

    /// Leave the reveal. Returns `false` when the flow was not revealing.
    pub fn acknowledge_reveal(&mut self) -> bool {
        let participants = match mem::replace(&mut self.state, FlowState::Input) {
            FlowState::Revealing { participants, .. } => participants,
            other => {
                tracing::debug!(
                    "Flow {} already past reveal ({})",
                    self.id,
                    other.tag()
                );
                self.state = other;
                return false;
            }
        };

        if participants.is_exhausted() {
            tracing::info!(
                "Flow {} done after {} draws",
                self.id,
                self.history.len()
            );
            self.state = FlowState::Done { participants };
        } else {
            self.state = FlowState::Selecting { participants };
        }

        true
    }

    /// Drop everything and go back to `Input` under a fresh flow id
    pub fn reset(&mut self) {
        let previous = self.id;
        self.id = Uuid::new_v4();
        self.state = FlowState::Input;
        self.history.clear();
        self.notice = None;

        tracing::info!("Flow {} reset, now {}", previous, self.id);
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            flow_id: self.id,
            state: self.state_tag(),
            all: self.all().map(<[String]>::to_vec).unwrap_or_default(),
            remaining: self.remaining().into_iter().map(str::to_string).collect(),
            remaining_count: self.remaining_count(),
            winner: self.winner().map(str::to_string),
            history: self.history.clone(),
            notice: self.notice.clone(),
        }
    }
}
