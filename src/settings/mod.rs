//! Password generation settings.

use crate::pass::Class;

pub const DEFAULT_LENGTH: i64 = 16;

/// One invocation's configuration. Built once from the command line and only
/// read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Signed so that a negative request survives parsing and is rejected
    /// with a proper error instead of a parse failure.
    pub pass_length: i64,
    pub alpha: bool,
    pub numeric: bool,
    pub symbols: bool,
    pub deny: String,
    pub seed: Option<u64>,
}

impl Settings {
    /// Classes switched on, in alphabet order. Alpha contributes two.
    pub fn enabled_classes(&self) -> Vec<Class> {
        let mut classes = Vec::with_capacity(4);
        if self.alpha {
            classes.push(Class::Lowercase);
            classes.push(Class::Uppercase);
        }
        if self.numeric {
            classes.push(Class::Digit);
        }
        if self.symbols {
            classes.push(Class::Symbol);
        }
        classes
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            alpha: false,
            numeric: false,
            symbols: false,
            deny: String::new(),
            seed: None,
        }
    }
}
