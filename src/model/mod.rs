pub mod message;
pub mod poll;

pub use message::{MessageError, MessageType, PollEvent, PollMessage};
pub use poll::{Candidate, PollState, PollStatus, Vote};
