use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// Fewest names a flow can start with
pub const MIN_PARTICIPANTS: usize = 2;

/// Names entered for one flow.
///
/// `all` keeps the entry order and never changes once built. `remaining`
/// holds slot indices into `all`, so two entries with the same text are
/// still two independent slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantList {
    all: Vec<String>,
    remaining: Vec<usize>,
}

impl ParticipantList {
    fn new(all: Vec<String>) -> Self {
        let remaining = (0..all.len()).collect();
        Self { all, remaining }
    }

    pub fn all(&self) -> &[String] {
        &self.all
    }

    /// Names not yet drawn, in entry order
    pub fn remaining(&self) -> Vec<&str> {
        self.remaining
            .iter()
            .map(|&slot| self.all[slot].as_str())
            .collect()
    }

    pub fn remaining_slots(&self) -> &[usize] {
        &self.remaining
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn name(&self, slot: usize) -> Option<&str> {
        self.all.get(slot).map(String::as_str)
    }

    /// Remove the entry at `index` within `remaining` and return its slot.
    ///
    /// Order of the other remaining entries is preserved.
    pub(crate) fn take(&mut self, index: usize) -> Option<usize> {
        if index < self.remaining.len() {
            Some(self.remaining.remove(index))
        } else {
            None
        }
    }
}

/// Split `raw_text` into lines, trim each one and drop the blank ones.
pub fn parse_participants(raw_text: &str) -> Result<ParticipantList, ParseError> {
    let names: Vec<String> = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if names.len() < MIN_PARTICIPANTS {
        return Err(ParseError::InsufficientParticipants {
            found: names.len(),
            min: MIN_PARTICIPANTS,
        });
    }

    Ok(ParticipantList::new(names))
}
