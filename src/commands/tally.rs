use colored::*;
use itertools::Itertools;
use meet_poll::model::PollState;
use meet_poll::reports::ReportResult;
use meet_poll::tabulator::{detect_tie, VoteResults};
use meet_poll::util::read_serialized;
use std::path::Path;

pub fn tally(state_path: &Path) -> ReportResult<()> {
    let state: PollState = read_serialized(state_path)?;
    print_results(&state, &state.results());
    Ok(())
}

pub(crate) fn print_results(state: &PollState, results: &VoteResults) {
    println!(
        "📊 {} (round {}, {})",
        state.question.as_str().bold(),
        state.round,
        state.status
    );

    if state.candidates.is_empty() {
        println!("⏳ Waiting for participants to register...");
        return;
    }

    for (rank, result) in results.results.iter().enumerate() {
        let name = format!("{:<30}", result.candidate_name);
        println!(
            "  {:>2}. {} {:>4} votes {:>6.1}%  {}",
            rank + 1,
            name.bold(),
            result.vote_count,
            result.percentage,
            result.voters.iter().join(", ").as_str().dimmed()
        );
    }

    match (&results.winner, detect_tie(results)) {
        (Some(winner), _) => println!("🏆 Winner: {}", winner.candidate_name.as_str().bright_green().bold()),
        (None, Some(tied)) => {
            let names = tied.iter().map(|c| &c.name).join(", ");
            println!("🤝 Tie between {}", names.as_str().bright_yellow());
        }
        (None, None) => println!("No votes yet"),
    }

    println!(
        "🗳️  {} votes cast ({}% of participants)",
        results.total_votes.to_string().bright_cyan(),
        state.progress()
    );
}
