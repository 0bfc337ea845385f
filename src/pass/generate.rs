//! Rejection sampling over the charset until every rule holds.

use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::charset::Charset;
use super::error::GenerateError;
use crate::rand::Source;

/// Generate one password of `length` characters drawn from `charset`.
///
/// Each attempt samples a whole candidate independently and uniformly from
/// the alphabet, then checks every rule against that candidate alone. A
/// candidate failing any rule is wiped and replaced, never patched. Inputs
/// that could never pass are rejected up front, so the loop below only runs
/// when every rule has at least one reachable character and the length leaves
/// room for all of them; it then terminates with probability 1.
pub fn generate<S: Source>(
    length: i64,
    charset: &Charset,
    rng: &mut S,
) -> Result<Zeroizing<String>, GenerateError> {
    let size = check(length, charset)?;
    let alphabet = charset.alphabet();
    let rules = charset.rules();

    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| GenerateError::TooLong(length))?;
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;
        buf.clear();
        buf.extend((0..size).map(|_| alphabet[rng.below(alphabet.len())]));

        match rules.iter().find(|rule| !rule.matches(&buf)) {
            None => break,
            Some(rule) => {
                debug!(attempt = attempts, class = %rule.class(), "candidate rejected");
                buf.zeroize();
            }
        }
    }

    debug!(attempts, "candidate accepted");

    // Safety: alphabet is all ASCII
    Ok(Zeroizing::new(unsafe { String::from_utf8_unchecked(buf) }))
}

/// Fail-fast validation. Returns the length as a buffer size.
fn check(length: i64, charset: &Charset) -> Result<usize, GenerateError> {
    if length <= 0 {
        return Err(GenerateError::InvalidLength(length));
    }
    let size = usize::try_from(length).map_err(|_| GenerateError::TooLong(length))?;

    let rules = charset.rules();
    if rules.is_empty() {
        return Err(GenerateError::NoClasses);
    }
    if let Some(rule) = rules.iter().find(|rule| !rule.is_satisfiable()) {
        return Err(GenerateError::Unsatisfiable(rule.class()));
    }
    if charset.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }
    // Classes are disjoint: each rule needs a position of its own.
    if size < rules.len() {
        return Err(GenerateError::TooShort {
            length,
            required: rules.len(),
        });
    }

    Ok(size)
}
