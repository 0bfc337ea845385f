//! Command-line front end.

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use help::write_help;
pub use parse::{ParseError, parse};
