use colored::*;
use meet_poll::config::PollConfig;
use meet_poll::formats::parse_custom_options;
use meet_poll::model::PollState;
use meet_poll::reports::ReportResult;
use meet_poll::util::{read_text, write_serialized};
use meet_poll::validation::validate_custom_options_with;
use std::path::Path;

pub fn new_poll(
    out: &Path,
    question: Option<&str>,
    options_file: Option<&Path>,
    config: &PollConfig,
) -> ReportResult<()> {
    let mut ids = config.id_scheme.source();
    let question = question.unwrap_or(config.question.as_str());

    let state = match options_file {
        Some(path) => {
            let text = read_text(path)?;
            validate_custom_options_with(&text, &config.limits)?;
            let options = parse_custom_options(&text, ids.as_mut());
            PollState::with_options(question, options, ids.as_mut())
        }
        None => PollState::new_poll(question, ids.as_mut()),
    };

    write_serialized(out, &state)?;

    println!(
        "🗳️  Created poll {} with {} options: {}",
        state.poll_id.as_str().bright_cyan(),
        state.candidates.len().to_string().bright_yellow(),
        out.display()
    );
    Ok(())
}
