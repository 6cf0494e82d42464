//! Shape checks over user-entered strings
//!
//! Every predicate is total over `&str` and never allocates except
//! `SymbolExceptions` construction. Lengths count Unicode scalar values.

use std::collections::HashSet;

use crate::consts::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

/// Inclusive character-count bounds for [`has_length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthOptions {
    pub min: usize,
    pub max: usize,
}

impl Default for LengthOptions {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

impl LengthOptions {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Characters that [`has_symbol`] treats as ordinary text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolExceptions(HashSet<char>);

impl SymbolExceptions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl FromIterator<char> for SymbolExceptions {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&str> for SymbolExceptions {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl<const N: usize> From<[char; N]> for SymbolExceptions {
    fn from(chars: [char; N]) -> Self {
        chars.into_iter().collect()
    }
}

/// Contains an ASCII letter (`a-z`, `A-Z`)
pub fn has_letter(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic())
}

/// Contains an ASCII digit
pub fn has_number(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

pub fn has_whitespace(s: &str) -> bool {
    s.chars().any(char::is_whitespace)
}

/// Contains a character that is not an ASCII letter, ASCII digit, plain
/// space, or one of `exceptions`.
///
/// Tabs, newlines and non-ASCII letters all count as symbols.
pub fn has_symbol(s: &str, exceptions: &SymbolExceptions) -> bool {
    s.chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == ' ' || exceptions.contains(c)))
}

pub fn is_gte_min_length(s: &str, min_length: usize) -> bool {
    s.chars().count() >= min_length
}

pub fn is_lte_max_length(s: &str, max_length: usize) -> bool {
    s.chars().count() <= max_length
}

pub fn has_length(s: &str, options: LengthOptions) -> bool {
    is_gte_min_length(s, options.min) && is_lte_max_length(s, options.max)
}
