//! namedraw - draw names one at a time until everyone has been picked
//!
//! A [`SelectionFlow`] takes a block of names (one per line), then hands out
//! one uniformly random, not yet drawn name per draw. Each draw is followed by
//! a reveal that a [`RevealTimer`] ends after a short dwell.

pub mod config;
pub mod error;
pub mod flow;
pub mod participants;
pub mod reveal;
pub mod types;

pub use config::FlowConfig;
pub use error::{NamedrawError, ParseError, Result};
pub use flow::{FlowState, SelectionFlow};
pub use participants::{parse_participants, ParticipantList, MIN_PARTICIPANTS};
pub use reveal::{RevealOutcome, RevealTimer};
pub use types::{DrawRecord, FlowSnapshot, StateTag};

/// Start a flow from raw text, or return why the text was rejected
pub fn start_flow(raw_text: &str) -> std::result::Result<SelectionFlow, ParseError> {
    let mut flow = SelectionFlow::new();
    flow.start(raw_text)?;
    Ok(flow)
}

/// Draw every name without any reveal dwell and return the finished flow
pub fn draw_all(raw_text: &str) -> std::result::Result<SelectionFlow, ParseError> {
    let mut flow = start_flow(raw_text)?;
    while flow.state_tag() == StateTag::Selecting {
        flow.draw();
        flow.acknowledge_reveal();
    }
    Ok(flow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_all_exhausts_list() {
        let flow = draw_all("Kim\nLee\nPark\nKim").unwrap();

        assert_eq!(flow.state_tag(), StateTag::Done);
        assert_eq!(flow.remaining_count(), 0);
        assert_eq!(flow.history().len(), 4);

        let mut drawn: Vec<usize> = flow.history().iter().map(|r| r.slot).collect();
        drawn.sort_unstable();
        assert_eq!(drawn, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_start_flow_rejects_short_input() {
        assert!(start_flow("solo").is_err());
    }
}
