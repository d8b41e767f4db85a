use crate::config::ConfigError;
use crate::model::{MessageError, PollStatus};
use crate::tabulator::VoteResults;
use crate::validation::OptionsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod generator;

pub use generator::generate_report;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid options: {0}")]
    Options(#[from] OptionsError),
    #[error("Message error on line {line}: {source}")]
    Message {
        line: usize,
        #[source]
        source: MessageError,
    },
    #[error("No poll state: {0}")]
    NoState(String),
    #[error("Poll {0} has no tie to break")]
    NoTie(String),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Everything the results screen shows, frozen at one moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollReport {
    pub poll_id: String,
    pub question: String,
    pub round: u32,
    pub status: PollStatus,
    pub participant_count: usize,
    /// Share of participants who have voted, 0-100.
    pub progress: u32,
    pub results: VoteResults,
    pub generated_at: DateTime<Utc>,
}
