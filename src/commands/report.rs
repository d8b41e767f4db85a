use colored::*;
use meet_poll::model::PollState;
use meet_poll::reports::{generate_report, ReportResult};
use meet_poll::util::{read_serialized, write_serialized};
use std::path::Path;

pub fn report(state_path: &Path, out: &Path) -> ReportResult<()> {
    let state: PollState = read_serialized(state_path)?;
    let report = generate_report(&state);
    write_serialized(out, &report)?;

    println!(
        "✅ Report for {} written to {}",
        report.poll_id.as_str().bright_cyan(),
        out.display().to_string().bright_green()
    );
    Ok(())
}
