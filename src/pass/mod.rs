//! Password generation.

pub mod charset;
mod error;
mod generate;
mod rules;
pub mod strength;

pub use charset::Charset;
pub use error::GenerateError;
pub use generate::generate;
pub use rules::{Class, Rule};
