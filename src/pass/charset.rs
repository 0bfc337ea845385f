//! Character set building for password generation.

use super::rules::{Class, Rule};
use crate::settings::Settings;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
/// Includes a literal space.
pub const SYMBOLS: &[u8] = b"#?!@$ %^&*-";

/// The alphabet to sample from plus one rule per enabled class.
///
/// Building never fails. An empty alphabet or a fully denied class is only
/// reported when generation is attempted, see [`super::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    alphabet: Vec<u8>,
    rules: Vec<Rule>,
}

impl Charset {
    pub fn build(settings: &Settings) -> Self {
        let denied = deny_mask(&settings.deny);
        let mut alphabet = Vec::with_capacity(
            LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SYMBOLS.len(),
        );
        let mut rules = Vec::with_capacity(4);

        for class in settings.enabled_classes() {
            let members: Vec<u8> = class
                .source()
                .iter()
                .copied()
                .filter(|&b| !denied[b as usize])
                .collect();
            alphabet.extend_from_slice(&members);
            rules.push(Rule::new(class, members));
        }

        Self { alphabet, rules }
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Effective symbol set: empty when symbols are disabled.
    pub fn symbols(&self) -> &[u8] {
        self.rules
            .iter()
            .find(|rule| rule.class() == Class::Symbol)
            .map(Rule::members)
            .unwrap_or(&[])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }
}

/// ASCII membership table for the deny-list. Class characters are all ASCII,
/// so anything outside that range cannot remove a character.
fn deny_mask(deny: &str) -> [bool; 128] {
    let mut mask = [false; 128];
    for b in deny.bytes().filter(u8::is_ascii) {
        mask[b as usize] = true;
    }
    mask
}
