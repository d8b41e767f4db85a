use colored::*;
use meet_poll::config::PollConfig;
use meet_poll::model::PollState;
use meet_poll::reports::{ReportError, ReportResult};
use meet_poll::util::{read_serialized, write_serialized};
use std::path::Path;

pub fn tiebreak(state_path: &Path, out: &Path, config: &PollConfig) -> ReportResult<()> {
    let state: PollState = read_serialized(state_path)?;
    let mut ids = config.id_scheme.source();

    let next = state
        .tiebreaker(&state.results(), ids.as_mut())
        .ok_or_else(|| ReportError::NoTie(state.poll_id.clone()))?;

    write_serialized(out, &next)?;

    println!(
        "🤝 Round {} between {} candidates: {}",
        next.round.to_string().bright_cyan(),
        next.candidates.len().to_string().bright_yellow(),
        out.display()
    );
    Ok(())
}
