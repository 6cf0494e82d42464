//! Validation of user-entered fields
//!
//! `predicates` answers single yes/no questions about a string; `rules`
//! combines them into username and password policies.

mod predicates;
mod rules;

pub use predicates::{
    LengthOptions, SymbolExceptions, has_length, has_letter, has_number, has_symbol,
    has_whitespace, is_gte_min_length, is_lte_max_length,
};
pub use rules::{PasswordRules, UsernameRules, ValidationError};
