use colored::*;
use meet_poll::config::PollConfig;
use meet_poll::reports::ReportResult;
use meet_poll::util::read_text;
use meet_poll::validation::validate_custom_options_with;
use std::path::Path;

pub fn validate(options_file: &Path, config: &PollConfig) -> ReportResult<()> {
    let text = read_text(options_file)?;
    let names = validate_custom_options_with(&text, &config.limits)?;

    println!("✅ {} valid options", names.len().to_string().bright_green());
    for name in names {
        println!("  • {}", name);
    }
    Ok(())
}
