//! Client-local reduction of the broadcast message stream.
//!
//! Every frame (main stage and each side panel) receives the same broadcast
//! messages and folds them into its own copy of the poll. There is no
//! authoritative server; two replicas agree only if they saw the same messages
//! in an order the conflict policy resolves identically.

use crate::model::{PollEvent, PollMessage, PollState, PollStatus};
use crate::tabulator::{calculate_results, VoteResults};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How conflicting writes are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Whatever was processed last wins.
    #[serde(rename = "arrival")]
    ArrivalOrder,
    /// Votes and full-state replacements older than what the replica already
    /// holds are ignored. Equal timestamps fall back to arrival order.
    Timestamp,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        ConflictPolicy::ArrivalOrder
    }
}

/// Apply one event to a poll state.
///
/// A voter keeps at most one vote: a new vote replaces the earlier one. A
/// participant id already present is not added twice. Staleness of
/// `StateUpdate` is tracked by [`PollReplica`], so here it always replaces.
pub fn reduce(mut state: PollState, event: &PollEvent, policy: ConflictPolicy) -> PollState {
    match event {
        PollEvent::ParticipantJoined(candidate) => {
            if state.candidates.iter().all(|c| c.id != candidate.id) {
                state.candidates.push(candidate.clone());
            }
        }
        PollEvent::VoteCast(vote) => {
            let newer_exists = policy == ConflictPolicy::Timestamp
                && state
                    .votes
                    .iter()
                    .any(|v| v.voter_id == vote.voter_id && v.timestamp > vote.timestamp);
            if newer_exists {
                debug!(voter = %vote.voter_id, "ignoring stale vote");
            } else {
                state.votes.retain(|v| v.voter_id != vote.voter_id);
                state.votes.push(vote.clone());
            }
        }
        PollEvent::PollStarted => state.status = PollStatus::Voting,
        PollEvent::PollCompleted => state.status = PollStatus::Completed,
        PollEvent::StateUpdate(next) => state = next.clone(),
    }
    state
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollReplica {
    state: Option<PollState>,
    policy: ConflictPolicy,
    last_replaced_at: Option<i64>,
}

impl PollReplica {
    /// A replica that has not received its starting state yet.
    pub fn new(policy: ConflictPolicy) -> Self {
        PollReplica {
            state: None,
            policy,
            last_replaced_at: None,
        }
    }

    /// Seed with a starting state that carries no timestamp. Under
    /// [`ConflictPolicy::Timestamp`] any later `StateUpdate` replaces it; use
    /// [`PollReplica::with_state_at`] when the seed's send time is known.
    pub fn with_state(state: PollState, policy: ConflictPolicy) -> Self {
        PollReplica {
            state: Some(state),
            ..PollReplica::new(policy)
        }
    }

    /// Seed with a starting state sent at `timestamp` (epoch ms), so older
    /// `StateUpdate`s are treated as stale under [`ConflictPolicy::Timestamp`].
    pub fn with_state_at(state: PollState, policy: ConflictPolicy, timestamp: i64) -> Self {
        PollReplica {
            last_replaced_at: Some(timestamp),
            ..PollReplica::with_state(state, policy)
        }
    }

    pub fn state(&self) -> Option<&PollState> {
        self.state.as_ref()
    }

    pub fn into_state(self) -> Option<PollState> {
        self.state
    }

    /// Current results, once there is at least one candidate to show.
    pub fn results(&self) -> Option<VoteResults> {
        self.state
            .as_ref()
            .filter(|s| !s.candidates.is_empty())
            .map(|s| calculate_results(&s.votes, &s.candidates))
    }

    pub fn apply(mut self, message: &PollMessage) -> Self {
        let kind = message.event.message_type();

        match (&message.event, self.state.take()) {
            (PollEvent::StateUpdate(next), current) => {
                let stale = self.policy == ConflictPolicy::Timestamp
                    && matches!(self.last_replaced_at, Some(last) if message.timestamp < last);
                if stale {
                    debug!(timestamp = message.timestamp, "ignoring stale state update");
                    self.state = current;
                } else {
                    self.last_replaced_at = Some(message.timestamp);
                    self.state = Some(next.clone());
                }
            }
            (_, None) => {
                debug!(%kind, "no poll state yet, ignoring message");
            }
            (event, Some(state)) => {
                debug!(%kind, "applying message");
                self.state = Some(reduce(state, event, self.policy));
            }
        }

        self
    }

    /// Decode and apply a raw message. Undecodable messages are logged and
    /// leave the replica untouched.
    pub fn apply_json(self, raw: &str) -> Self {
        match PollMessage::from_json(raw) {
            Ok(message) => self.apply(&message),
            Err(e) => {
                warn!("skipping message: {}", e);
                self
            }
        }
    }
}
