use super::tally::print_results;
use colored::*;
use meet_poll::config::PollConfig;
use meet_poll::model::PollMessage;
use meet_poll::replica::PollReplica;
use meet_poll::reports::{ReportError, ReportResult};
use meet_poll::util::{read_lines, read_serialized, write_serialized};
use std::path::Path;

/// Fold a JSON-lines broadcast log into a poll state, as one client would.
pub fn replay(
    log: &Path,
    initial: Option<&Path>,
    out: Option<&Path>,
    strict: bool,
    config: &PollConfig,
) -> ReportResult<()> {
    let mut replica = match initial {
        Some(path) => PollReplica::with_state(read_serialized(path)?, config.conflict_policy),
        None => PollReplica::new(config.conflict_policy),
    };

    let lines = read_lines(log)?;
    let mut applied = 0usize;
    let mut skipped = 0usize;

    for (line, raw) in lines {
        match PollMessage::from_json(&raw) {
            Ok(message) => {
                replica = replica.apply(&message);
                applied += 1;
            }
            Err(source) if strict => return Err(ReportError::Message { line, source }),
            Err(e) => {
                eprintln!("⚠️  Skipping line {}: {}", line, e);
                skipped += 1;
            }
        }
    }

    println!(
        "🔁 Replayed {} messages ({} skipped)",
        applied.to_string().bright_green(),
        skipped.to_string().bright_yellow()
    );

    let state = replica.into_state().ok_or_else(|| {
        ReportError::NoState(format!("{} never delivered a STATE_UPDATE", log.display()))
    })?;

    print_results(&state, &state.results());

    if let Some(out) = out {
        write_serialized(out, &state)?;
        println!("✅ Final state written to {}", out.display().to_string().bright_green());
    }

    Ok(())
}
