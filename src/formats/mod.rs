pub mod options;

pub use options::{parse_custom_options, split_option_lines};
