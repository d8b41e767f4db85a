use crate::ids::IdSource;
use crate::tabulator::{calculate_results, voting_progress, VoteResults};
use serde::{Deserialize, Serialize};

/// Something that can receive votes: a registered participant or a free-text option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Candidate {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single ballot. The voter is identified by `voter_id`; `voter_name` is only for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub voter_id: String,
    pub voter_name: String,
    #[serde(rename = "selectedParticipantId", alias = "selectedCandidateId")]
    pub selected_candidate_id: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollStatus {
    Setup,
    Voting,
    Completed,
}

impl std::fmt::Display for PollStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollStatus::Setup => write!(f, "setup"),
            PollStatus::Voting => write!(f, "voting"),
            PollStatus::Completed => write!(f, "completed"),
        }
    }
}

/// One client's view of the poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollState {
    #[serde(rename = "participants", alias = "candidates")]
    pub candidates: Vec<Candidate>,
    pub votes: Vec<Vote>,
    pub status: PollStatus,
    pub question: String,
    pub poll_id: String,
    /// 1 for the initial round, 2+ for tiebreakers.
    pub round: u32,
}

impl PollState {
    /// The state an initiator broadcasts when the activity starts. Participants
    /// register themselves afterwards.
    pub fn new_poll(question: impl Into<String>, ids: &mut dyn IdSource) -> Self {
        PollState {
            candidates: Vec::new(),
            votes: Vec::new(),
            status: PollStatus::Voting,
            question: question.into(),
            poll_id: ids.next_id("poll"),
            round: 1,
        }
    }

    /// Options-mode poll: candidates are fixed up front instead of self-registered.
    pub fn with_options(
        question: impl Into<String>,
        options: Vec<Candidate>,
        ids: &mut dyn IdSource,
    ) -> Self {
        PollState {
            candidates: options,
            ..PollState::new_poll(question, ids)
        }
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn results(&self) -> VoteResults {
        calculate_results(&self.votes, &self.candidates)
    }

    /// Share of registered candidates that have a vote in, 0-100.
    pub fn progress(&self) -> u32 {
        voting_progress(self.votes.len(), self.candidates.len())
    }

    /// Next round restricted to the candidates tied for first place, or `None`
    /// if `results` has a clear outcome.
    pub fn tiebreaker(&self, results: &VoteResults, ids: &mut dyn IdSource) -> Option<PollState> {
        if !results.has_tie {
            return None;
        }

        Some(PollState {
            candidates: results.tied_candidates.clone(),
            votes: Vec::new(),
            status: PollStatus::Voting,
            question: self.question.clone(),
            poll_id: ids.next_id("poll"),
            round: self.round + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    fn vote(voter: &str, target: &str) -> Vote {
        Vote {
            voter_id: voter.to_string(),
            voter_name: voter.to_string(),
            selected_candidate_id: target.to_string(),
            timestamp: 0,
        }
    }

    #[test]
    fn new_poll_starts_voting_in_round_one() {
        let mut ids = SequentialIds::new();
        let state = PollState::new_poll("Who?", &mut ids);

        assert_eq!(state.status, PollStatus::Voting);
        assert_eq!(state.round, 1);
        assert_eq!(state.poll_id, "poll_1");
        assert!(state.candidates.is_empty());
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn serializes_with_wire_names() {
        let mut ids = SequentialIds::new();
        let mut state = PollState::with_options("Q", vec![Candidate::new("o", "Opt")], &mut ids);
        state.votes.push(vote("v", "o"));

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["participants"][0]["id"], "o");
        assert_eq!(value["votes"][0]["selectedParticipantId"], "o");
        assert_eq!(value["pollId"], "poll_1");
        assert_eq!(value["status"], "voting");
    }

    #[test]
    fn tiebreaker_keeps_only_tied_candidates() {
        let mut ids = SequentialIds::new();
        let candidates = vec![
            Candidate::new("a", "Ada"),
            Candidate::new("b", "Bo"),
            Candidate::new("c", "Cy"),
        ];
        let mut state = PollState::with_options("Q", candidates, &mut ids);
        state.votes = vec![vote("1", "c"), vote("2", "a"), vote("3", "b"), vote("4", "c"), vote("5", "a")];
        assert_eq!(state.progress(), 167);

        let next = state.tiebreaker(&state.results(), &mut ids).unwrap();
        assert_eq!(next.round, 2);
        assert_eq!(next.poll_id, "poll_2");
        assert_eq!(next.question, "Q");
        assert!(next.votes.is_empty());
        assert_eq!(next.candidates, vec![Candidate::new("a", "Ada"), Candidate::new("c", "Cy")]);
    }

    #[test]
    fn no_tiebreaker_with_clear_winner() {
        let mut ids = SequentialIds::new();
        let mut state = PollState::with_options("Q", vec![Candidate::new("a", "Ada")], &mut ids);
        state.votes.push(vote("1", "a"));

        assert!(state.tiebreaker(&state.results(), &mut ids).is_none());
        assert_eq!(state.candidate("a").map(|c| c.name.as_str()), Some("Ada"));
    }
}
