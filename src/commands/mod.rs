mod new_poll;
mod replay;
mod report;
mod tally;
mod tiebreak;
mod validate;

pub use new_poll::new_poll;
pub use replay::replay;
pub use report::report;
pub use tally::tally;
pub use tiebreak::tiebreak;
pub use validate::validate;
