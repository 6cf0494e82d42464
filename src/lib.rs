//! Workout history statistics and account field validation
//!
//! - [`validation`]: string predicates and composite username/password rules
//! - [`core`]: completed-workout records and the aggregations over them
//! - [`source`]: loading workout history files from disk

pub mod config;
pub mod consts;
pub mod core;
pub mod error;
pub mod source;
pub mod utils;
pub mod validation;
