//! Single-shot password generator.
//!
//! Builds an alphabet from the enabled character classes minus a deny-list,
//! then samples whole candidates until one contains at least one character of
//! every enabled class.

pub mod cli;
mod error;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::Error;
pub use settings::Settings;
