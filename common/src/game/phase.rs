use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Choice {
    Accept,
    Decline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseEvent {
    GoalReached,
    Chose(Choice),
}

/// Coarse game state. Only ever moves forward; going back means starting a
/// new session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Phase {
    #[default]
    Exploring,
    WonPendingChoice,
    FinalizedPositive,
    FinalizedNegative,
}

impl Phase {
    /// The phase this event leads to, or `None` if the event means nothing
    /// here.
    pub fn next(self, event: PhaseEvent) -> Option<Phase> {
        match (self, event) {
            (Phase::Exploring, PhaseEvent::GoalReached) => Some(Phase::WonPendingChoice),
            (Phase::WonPendingChoice, PhaseEvent::Chose(Choice::Accept)) => {
                Some(Phase::FinalizedPositive)
            }
            (Phase::WonPendingChoice, PhaseEvent::Chose(Choice::Decline)) => {
                Some(Phase::FinalizedNegative)
            }
            _ => None,
        }
    }

    pub fn is_finalized(self) -> bool {
        matches!(self, Phase::FinalizedPositive | Phase::FinalizedNegative)
    }
}
