//! Username and password policies built from the predicates

use serde::Deserialize;
use thiserror::Error;

use super::predicates::{
    LengthOptions, SymbolExceptions, has_length, has_letter, has_number, has_symbol,
    has_whitespace, is_gte_min_length,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must not contain whitespace")]
    ContainsWhitespace { field: &'static str },

    #[error("{field} contains characters that are not allowed")]
    ContainsSymbol { field: &'static str },

    #[error("{field} must contain a letter")]
    MissingLetter { field: &'static str },

    #[error("{field} must contain a number")]
    MissingNumber { field: &'static str },

    #[error("{field} must contain a symbol")]
    MissingSymbol { field: &'static str },
}

fn length_violation(
    value: &str,
    options: LengthOptions,
    field: &'static str,
) -> Option<ValidationError> {
    if has_length(value, options) {
        return None;
    }
    if is_gte_min_length(value, options.min) {
        Some(ValidationError::TooLong {
            field,
            max: options.max,
        })
    } else {
        Some(ValidationError::TooShort {
            field,
            min: options.min,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UsernameRules {
    pub min_length: usize,
    pub max_length: usize,
    /// Punctuation permitted in addition to letters and digits
    pub allowed_symbols: String,
}

impl Default for UsernameRules {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 30,
            allowed_symbols: "-_.".to_string(),
        }
    }
}

impl UsernameRules {
    const FIELD: &'static str = "username";

    pub fn violations(&self, value: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let options = LengthOptions::new(self.min_length, self.max_length);
        if let Some(e) = length_violation(value, options, Self::FIELD) {
            errors.push(e);
        }
        if has_whitespace(value) {
            errors.push(ValidationError::ContainsWhitespace { field: Self::FIELD });
        }
        // Plain spaces pass has_symbol; they are reported as whitespace above.
        let allowed = SymbolExceptions::from(self.allowed_symbols.as_str());
        if has_symbol(value, &allowed) {
            errors.push(ValidationError::ContainsSymbol { field: Self::FIELD });
        }
        errors
    }

    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self.violations(value).into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PasswordRules {
    pub min_length: usize,
    pub max_length: usize,
    pub require_letter: bool,
    pub require_number: bool,
    pub require_symbol: bool,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 200,
            require_letter: true,
            require_number: true,
            require_symbol: false,
        }
    }
}

impl PasswordRules {
    const FIELD: &'static str = "password";

    pub fn violations(&self, value: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let options = LengthOptions::new(self.min_length, self.max_length);
        if let Some(e) = length_violation(value, options, Self::FIELD) {
            errors.push(e);
        }
        if self.require_letter && !has_letter(value) {
            errors.push(ValidationError::MissingLetter { field: Self::FIELD });
        }
        if self.require_number && !has_number(value) {
            errors.push(ValidationError::MissingNumber { field: Self::FIELD });
        }
        if self.require_symbol && !has_symbol(value, &SymbolExceptions::none()) {
            errors.push(ValidationError::MissingSymbol { field: Self::FIELD });
        }
        errors
    }

    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self.violations(value).into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
