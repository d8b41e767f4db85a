use crate::model::{Candidate, Vote};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Tally for a single candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResult {
    pub candidate_id: String,
    pub candidate_name: String,
    pub vote_count: usize,
    /// Share of all votes cast, 0-100.
    pub percentage: f64,
    /// Display names of the voters, in the order their votes were scanned.
    pub voters: Vec<String>,
}

impl VoteResult {
    fn empty(candidate: &Candidate) -> Self {
        VoteResult {
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            vote_count: 0,
            percentage: 0.0,
            voters: Vec::new(),
        }
    }

    pub fn candidate(&self) -> Candidate {
        Candidate::new(self.candidate_id.clone(), self.candidate_name.clone())
    }
}

/// Snapshot of a poll's results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResults {
    /// Sorted by vote count, descending. Equal counts keep candidate order.
    pub results: Vec<VoteResult>,
    pub total_votes: usize,
    pub has_tie: bool,
    pub tied_candidates: Vec<Candidate>,
    pub winner: Option<VoteResult>,
}

/// Tally `votes` against `candidates`.
///
/// Votes for ids that are not in `candidates` still count towards
/// `total_votes` but land in no bucket. A candidate id listed twice keeps its
/// first position and takes the later name. No deduplication of voters is done
/// here; callers that want one vote per voter must reduce the list first.
pub fn calculate_results(votes: &[Vote], candidates: &[Candidate]) -> VoteResults {
    let total_votes = votes.len();

    let mut results: Vec<VoteResult> = Vec::with_capacity(candidates.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(candidates.len());
    for candidate in candidates {
        match index.get(candidate.id.as_str()) {
            Some(&slot) => results[slot].candidate_name = candidate.name.clone(),
            None => {
                index.insert(candidate.id.as_str(), results.len());
                results.push(VoteResult::empty(candidate));
            }
        }
    }

    for vote in votes {
        if let Some(&slot) = index.get(vote.selected_candidate_id.as_str()) {
            let result = &mut results[slot];
            result.vote_count += 1;
            result.voters.push(vote.voter_name.clone());
        }
    }

    for result in &mut results {
        result.percentage = if total_votes > 0 {
            result.vote_count as f64 / total_votes as f64 * 100.0
        } else {
            0.0
        };
    }

    // Stable, so equal counts stay in candidate order.
    results.sort_by_key(|r| Reverse(r.vote_count));

    let max_votes = results.first().map(|r| r.vote_count).unwrap_or(0);
    let top_results: Vec<&VoteResult> = results
        .iter()
        .take_while(|r| max_votes > 0 && r.vote_count == max_votes)
        .collect();

    let has_tie = top_results.len() > 1;
    let tied_candidates = if has_tie {
        top_results.iter().map(|r| r.candidate()).collect()
    } else {
        Vec::new()
    };
    let winner = if !has_tie && max_votes > 0 {
        results.first().cloned()
    } else {
        None
    };

    VoteResults {
        results,
        total_votes,
        has_tie,
        tied_candidates,
        winner,
    }
}

/// The tied candidates, if first place is shared.
pub fn detect_tie(results: &VoteResults) -> Option<&[Candidate]> {
    if results.has_tie {
        Some(&results.tied_candidates)
    } else {
        None
    }
}

pub fn sort_by_vote_count(results: &[VoteResult]) -> Vec<VoteResult> {
    let mut sorted = results.to_vec();
    sorted.sort_by_key(|r| Reverse(r.vote_count));
    sorted
}

pub fn has_voted(votes: &[Vote], voter_id: &str) -> bool {
    votes.iter().any(|v| v.voter_id == voter_id)
}

/// First vote cast by `voter_id`.
pub fn vote_of<'a>(votes: &'a [Vote], voter_id: &str) -> Option<&'a Vote> {
    votes.iter().find(|v| v.voter_id == voter_id)
}

/// Percentage of eligible voters who have voted, rounded to the nearest integer.
pub fn voting_progress(total_votes: usize, total_candidates: usize) -> u32 {
    if total_candidates == 0 {
        return 0;
    }
    (total_votes as f64 / total_candidates as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(ids: &[&str]) -> Vec<Candidate> {
        ids.iter()
            .map(|id| Candidate::new(*id, id.to_uppercase()))
            .collect()
    }

    fn vote(voter: &str, target: &str) -> Vote {
        Vote {
            voter_id: voter.to_string(),
            voter_name: format!("Voter {}", voter),
            selected_candidate_id: target.to_string(),
            timestamp: 0,
        }
    }

    fn votes(targets: &[&str]) -> Vec<Vote> {
        targets
            .iter()
            .enumerate()
            .map(|(i, t)| vote(&i.to_string(), t))
            .collect()
    }

    #[test]
    fn single_winner() {
        let results = calculate_results(&votes(&["a", "a", "b"]), &candidates(&["a", "b"]));

        let winner = results.winner.as_ref().unwrap();
        assert_eq!(winner.candidate_id, "a");
        assert_eq!(winner.vote_count, 2);
        assert!((winner.percentage - 66.666_666).abs() < 0.001);
        assert!(!results.has_tie);
        assert!(results.tied_candidates.is_empty());
        assert_eq!(results.results[1].candidate_id, "b");
        assert_eq!(results.results[1].voters, vec!["Voter 2"]);
    }

    #[test]
    fn tie_between_two() {
        let results = calculate_results(&votes(&["a", "b"]), &candidates(&["a", "b"]));

        assert!(results.has_tie);
        assert!(results.winner.is_none());
        assert_eq!(
            results.tied_candidates,
            vec![Candidate::new("a", "A"), Candidate::new("b", "B")]
        );
        assert_eq!(detect_tie(&results).map(|c| c.len()), Some(2));
    }

    #[test]
    fn tie_excludes_lower_counts() {
        let results = calculate_results(
            &votes(&["c", "b", "c", "b", "a"]),
            &candidates(&["a", "b", "c"]),
        );

        assert!(results.has_tie);
        let tied: Vec<_> = results.tied_candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(tied, vec!["b", "c"]);
    }

    #[test]
    fn no_votes() {
        let results = calculate_results(&[], &[Candidate::new("a", "Alice")]);

        assert_eq!(
            results.results,
            vec![VoteResult {
                candidate_id: "a".to_string(),
                candidate_name: "Alice".to_string(),
                vote_count: 0,
                percentage: 0.0,
                voters: vec![],
            }]
        );
        assert_eq!(results.total_votes, 0);
        assert!(!results.has_tie);
        assert!(results.winner.is_none());
        assert!(detect_tie(&results).is_none());
    }

    #[test]
    fn all_candidates_at_zero_is_not_a_tie() {
        let results = calculate_results(&votes(&["ghost"]), &candidates(&["a", "b"]));

        assert!(!results.has_tie);
        assert!(results.winner.is_none());
        assert_eq!(results.total_votes, 1);
    }

    #[test]
    fn orphan_votes_count_towards_total_only() {
        let results = calculate_results(&votes(&["a", "zzz", "a"]), &candidates(&["a"]));

        assert_eq!(results.total_votes, 3);
        assert_eq!(results.results[0].vote_count, 2);
        assert!((results.results[0].percentage - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_candidates() {
        let results = calculate_results(&votes(&["a", "b"]), &[]);

        assert!(results.results.is_empty());
        assert_eq!(results.total_votes, 2);
        assert!(results.winner.is_none());
        assert!(!results.has_tie);
    }

    #[test]
    fn equal_counts_keep_candidate_order() {
        let results = calculate_results(
            &votes(&["d", "b", "d"]),
            &candidates(&["a", "b", "c", "d"]),
        );

        let order: Vec<_> = results.results.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(order, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn duplicate_candidate_ids_collapse() {
        let list = vec![
            Candidate::new("a", "First"),
            Candidate::new("b", "Bee"),
            Candidate::new("a", "Second"),
        ];
        let results = calculate_results(&votes(&["a"]), &list);

        assert_eq!(results.results.len(), 2);
        assert_eq!(results.results[0].candidate_name, "Second");
        assert_eq!(results.results[0].vote_count, 1);
    }

    #[test]
    fn voters_listed_in_scan_order() {
        let mut list = votes(&["a", "a", "a"]);
        list[0].timestamp = 30;
        list[1].timestamp = 10;
        list[2].timestamp = 20;

        let results = calculate_results(&list, &candidates(&["a"]));
        assert_eq!(results.results[0].voters, vec!["Voter 0", "Voter 1", "Voter 2"]);
    }

    #[test]
    fn percentages_sum_to_hundred_when_all_votes_match() {
        let results = calculate_results(
            &votes(&["a", "b", "c", "c", "a", "c", "b"]),
            &candidates(&["a", "b", "c"]),
        );

        let sum: f64 = results.results.iter().map(|r| r.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        let counted: usize = results.results.iter().map(|r| r.vote_count).sum();
        assert_eq!(counted, results.total_votes);
    }

    #[test]
    fn sort_helper_is_stable_copy() {
        let results = calculate_results(&votes(&["b"]), &candidates(&["a", "b", "c"]));
        let mut shuffled = results.results.clone();
        shuffled.reverse();

        let sorted = sort_by_vote_count(&shuffled);
        let order: Vec<_> = sorted.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(shuffled[0].candidate_id, "c");
    }

    #[test]
    fn voter_lookups() {
        let list = vec![vote("x", "a"), vote("y", "b"), vote("x", "b")];

        assert!(has_voted(&list, "x"));
        assert!(!has_voted(&list, "z"));
        assert_eq!(vote_of(&list, "x").map(|v| v.selected_candidate_id.as_str()), Some("a"));
        assert!(vote_of(&list, "z").is_none());
    }

    #[test]
    fn progress() {
        assert_eq!(voting_progress(0, 0), 0);
        assert_eq!(voting_progress(5, 0), 0);
        assert_eq!(voting_progress(1, 3), 33);
        assert_eq!(voting_progress(2, 3), 67);
        assert_eq!(voting_progress(1, 8), 13);
        assert_eq!(voting_progress(4, 4), 100);
    }
}
