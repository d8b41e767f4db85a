//! Tallying and state reduction for a live meeting poll.
//!
//! Participants register, each casts one vote for another participant (or a
//! custom option), and every client derives the results from its own copy of
//! the poll. [`tabulator::calculate_results`] is the heart of it; the
//! [`replica`] module folds the broadcast message stream into a
//! [`model::PollState`] to feed it.

pub mod config;
pub mod formats;
pub mod ids;
pub mod model;
pub mod replica;
pub mod reports;
pub mod tabulator;
pub mod util;
pub mod validation;

pub use model::{Candidate, PollMessage, PollState, PollStatus, Vote};
pub use replica::{ConflictPolicy, PollReplica};
pub use tabulator::{calculate_results, VoteResult, VoteResults};
