use crate::ids::IdSource;
use crate::model::Candidate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// Trimmed, non-blank lines of `text`, in input order.
pub fn split_option_lines(text: &str) -> Vec<String> {
    LINE_BREAK
        .split(text)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Turn free text (one option per line) into candidates with fresh ids.
pub fn parse_custom_options(text: &str, ids: &mut dyn IdSource) -> Vec<Candidate> {
    split_option_lines(text)
        .into_iter()
        .map(|name| Candidate {
            id: ids.next_id("option"),
            name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn splits_on_every_line_break_style() {
        let lines = split_option_lines("Red\nGreen\r\nBlue\rYellow");
        assert_eq!(lines, vec!["Red", "Green", "Blue", "Yellow"]);
    }

    #[test]
    fn trims_and_drops_blank_lines_keeping_inner_spacing() {
        let lines = split_option_lines("\n   \n  Deep   Purple \n\n\tThe  Who\t\n");
        assert_eq!(lines, vec!["Deep   Purple", "The  Who"]);
    }

    #[test]
    fn assigns_ids_in_parse_order() {
        let mut ids = SequentialIds::new();
        let options = parse_custom_options("Alice\n\nBob\n", &mut ids);

        assert_eq!(
            options,
            vec![Candidate::new("option_1", "Alice"), Candidate::new("option_2", "Bob")]
        );
    }

    #[test]
    fn empty_text_has_no_options() {
        let mut ids = SequentialIds::new();
        assert!(parse_custom_options("", &mut ids).is_empty());
        assert!(parse_custom_options(" \r\n ", &mut ids).is_empty());
    }
}
