use super::poll::{Candidate, PollState, Vote};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Malformed message envelope: {0}")]
    Envelope(#[source] serde_json::Error),
    #[error("Malformed {kind} payload: {source}")]
    Payload {
        kind: MessageType,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    ParticipantJoined,
    VoteCast,
    PollStarted,
    PollCompleted,
    StateUpdate,
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::ParticipantJoined => write!(f, "PARTICIPANT_JOINED"),
            MessageType::VoteCast => write!(f, "VOTE_CAST"),
            MessageType::PollStarted => write!(f, "POLL_STARTED"),
            MessageType::PollCompleted => write!(f, "POLL_COMPLETED"),
            MessageType::StateUpdate => write!(f, "STATE_UPDATE"),
        }
    }
}

/// Decoded message payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    ParticipantJoined(Candidate),
    VoteCast(Vote),
    PollStarted,
    PollCompleted,
    StateUpdate(PollState),
}

impl PollEvent {
    pub fn message_type(&self) -> MessageType {
        match self {
            PollEvent::ParticipantJoined(_) => MessageType::ParticipantJoined,
            PollEvent::VoteCast(_) => MessageType::VoteCast,
            PollEvent::PollStarted => MessageType::PollStarted,
            PollEvent::PollCompleted => MessageType::PollCompleted,
            PollEvent::StateUpdate(_) => MessageType::StateUpdate,
        }
    }
}

/// Raw envelope as it travels between frames: a type tag, an untyped payload
/// and the sender's clock.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: MessageType,
    #[serde(default)]
    payload: Value,
    timestamp: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollMessage {
    pub event: PollEvent,
    /// Sender's epoch milliseconds.
    pub timestamp: i64,
}

impl PollMessage {
    pub fn new(event: PollEvent, timestamp: i64) -> Self {
        PollMessage { event, timestamp }
    }

    pub fn from_json(raw: &str) -> Result<Self, MessageError> {
        let envelope: Envelope = serde_json::from_str(raw).map_err(MessageError::Envelope)?;
        let kind = envelope.kind;
        let payload_err = |source| MessageError::Payload { kind, source };

        let event = match kind {
            MessageType::ParticipantJoined => {
                PollEvent::ParticipantJoined(serde_json::from_value(envelope.payload).map_err(payload_err)?)
            }
            MessageType::VoteCast => {
                PollEvent::VoteCast(serde_json::from_value(envelope.payload).map_err(payload_err)?)
            }
            MessageType::PollStarted => PollEvent::PollStarted,
            MessageType::PollCompleted => PollEvent::PollCompleted,
            MessageType::StateUpdate => {
                PollEvent::StateUpdate(serde_json::from_value(envelope.payload).map_err(payload_err)?)
            }
        };

        Ok(PollMessage {
            event,
            timestamp: envelope.timestamp,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let payload = match &self.event {
            PollEvent::ParticipantJoined(candidate) => serde_json::to_value(candidate)?,
            PollEvent::VoteCast(vote) => serde_json::to_value(vote)?,
            PollEvent::PollStarted | PollEvent::PollCompleted => Value::Null,
            PollEvent::StateUpdate(state) => serde_json::to_value(state)?,
        };

        serde_json::to_string(&Envelope {
            kind: self.event.message_type(),
            payload,
            timestamp: self.timestamp,
        })
    }
}
