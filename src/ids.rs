//! Identifier generation for participants, options and polls.
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

pub trait IdSource {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// `<prefix>_<epoch-millis>_<6 base36 chars>`. Collisions are unlikely, not
/// impossible, and the suffix is not suitable for anything secret.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIds;

impl IdSource for TimestampIds {
    fn next_id(&mut self, prefix: &str) -> String {
        generate_id(prefix)
    }
}

/// `<prefix>_<n>` with `n` counting up from 1 for the lifetime of the source.
/// Scope one of these to a poll session to get ids that never collide within it.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{}_{}", prefix, self.next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    Timestamp,
    Sequential,
}

impl Default for IdScheme {
    fn default() -> Self {
        IdScheme::Timestamp
    }
}

impl IdScheme {
    pub fn source(self) -> Box<dyn IdSource> {
        match self {
            IdScheme::Timestamp => Box::new(TimestampIds),
            IdScheme::Sequential => Box::new(SequentialIds::new()),
        }
    }
}

pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{}_{}_{}", prefix, Utc::now().timestamp_millis(), suffix)
}

pub fn participant_id() -> String {
    generate_id("participant")
}

pub fn poll_id() -> String {
    generate_id("poll")
}

pub fn option_id() -> String {
    generate_id("option")
}
