//! Workout history sources

pub mod loader;

pub use loader::load_history;
