use thiserror::Error;

use super::rules::Class;

/// Conditions under which no password can be produced. All of them are
/// detected before the first candidate is sampled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("password length must be a positive integer, got {0}")]
    InvalidLength(i64),

    #[error("no character classes enabled; pass at least one of -a, -n, -s")]
    NoClasses,

    #[error("every {0} character is denied, so no password can contain one")]
    Unsatisfiable(Class),

    /// Sampler's own guard. A charset from `Charset::build` that passed the
    /// class checks always has characters, so this is not reached through it.
    #[error("alphabet is empty after applying the deny-list")]
    EmptyAlphabet,

    #[error("length {length} cannot fit one character from each of the {required} required classes")]
    TooShort { length: i64, required: usize },

    /// Positive but too large to hold in memory.
    #[error("length {0} is too large to allocate")]
    TooLong(i64),
}
