//! Category rules: "the password contains at least one X".

use std::fmt;

use super::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl Class {
    pub const ALL: [Class; 4] = [Class::Lowercase, Class::Uppercase, Class::Digit, Class::Symbol];

    /// Full character set of the class before any deny-list is applied.
    pub fn source(self) -> &'static [u8] {
        match self {
            Class::Lowercase => LOWERCASE,
            Class::Uppercase => UPPERCASE,
            Class::Digit => DIGITS,
            Class::Symbol => SYMBOLS,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Class::Lowercase => "lowercase",
            Class::Uppercase => "uppercase",
            Class::Digit => "digit",
            Class::Symbol => "symbol",
        })
    }
}

/// Presence test for one enabled class, backed by that class's characters
/// after the deny-list was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    class: Class,
    members: Vec<u8>,
}

impl Rule {
    pub fn new(class: Class, members: Vec<u8>) -> Self {
        Self { class, members }
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn members(&self) -> &[u8] {
        &self.members
    }

    /// An empty backing set can never match anything.
    pub fn is_satisfiable(&self) -> bool {
        !self.members.is_empty()
    }

    #[inline]
    pub fn matches(&self, candidate: &[u8]) -> bool {
        candidate.iter().any(|b| self.members.contains(b))
    }
}
