//! Per-session conversation state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dialogue phase for the BMI slot-filling flow.
///
/// Two states only; no other intent triggers multi-turn slot filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialoguePhase {
    #[default]
    Idle,
    AwaitingMeasurement,
}

/// Role in a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One message in the session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Mutable per-session record.
///
/// One instance per session, exclusively owned by the caller, who must
/// serialize turns for that session. The dialogue state machine is the only
/// mutator of the phase flag. Nothing here outlives the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationState {
    phase: DialoguePhase,
    turns: Vec<Turn>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialoguePhase {
        self.phase
    }

    pub fn awaiting_measurement(&self) -> bool {
        self.phase == DialoguePhase::AwaitingMeasurement
    }

    pub fn set_phase(&mut self, phase: DialoguePhase) {
        self.phase = phase;
    }

    pub fn push_turn(&mut self, role: TurnRole, text: impl Into<String>) {
        self.turns.push(Turn::new(role, text));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}
