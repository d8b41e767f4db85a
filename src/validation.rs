use crate::config::Limits;
use crate::formats::split_option_lines;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsErrorKind {
    TooFew,
    TooMany,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("At least {min} options are required, found {found}")]
    TooFew { min: usize, found: usize },
    #[error("At most {max} options are allowed, found {found}")]
    TooMany { max: usize, found: usize },
    #[error("Option \"{name}\" is listed more than once")]
    Duplicate { name: String },
}

impl OptionsError {
    pub fn kind(&self) -> OptionsErrorKind {
        match self {
            OptionsError::TooFew { .. } => OptionsErrorKind::TooFew,
            OptionsError::TooMany { .. } => OptionsErrorKind::TooMany,
            OptionsError::Duplicate { .. } => OptionsErrorKind::Duplicate,
        }
    }
}

pub fn is_valid_name(name: &str) -> bool {
    is_valid_name_with(name, &Limits::default())
}

/// Length is counted in characters, after trimming.
pub fn is_valid_name_with(name: &str, limits: &Limits) -> bool {
    let len = name.trim().chars().count();
    len >= 1 && len <= limits.max_name_len
}

pub fn validate_custom_options(text: &str) -> Result<Vec<String>, OptionsError> {
    validate_custom_options_with(text, &Limits::default())
}

/// Parse `text` into option names and check the set. Returns the names on success.
pub fn validate_custom_options_with(text: &str, limits: &Limits) -> Result<Vec<String>, OptionsError> {
    let names = split_option_lines(text);

    if names.len() < limits.min_options {
        return Err(OptionsError::TooFew {
            min: limits.min_options,
            found: names.len(),
        });
    }
    if names.len() > limits.max_options {
        return Err(OptionsError::TooMany {
            max: limits.max_options,
            found: names.len(),
        });
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in &names {
        if !seen.insert(name.to_lowercase()) {
            return Err(OptionsError::Duplicate { name: name.clone() });
        }
    }

    Ok(names)
}
