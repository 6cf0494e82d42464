//! Core data types for workout history
//!
//! Records arrive from history files or from callers building them in memory;
//! every aggregation consumes or borrows these and returns new values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::date::flexible;

/// One finished session of a workout definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedWorkout {
    /// Identifier of the workout definition, shared by all its completions
    pub workout_id: String,
    /// Display name at the time of completion
    pub name: String,
    #[serde(with = "flexible")]
    pub date: DateTime<Utc>,
}

impl CompletedWorkout {
    pub fn new(workout_id: impl Into<String>, name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            workout_id: workout_id.into(),
            name: name.into(),
            date,
        }
    }
}

/// Latest completion plus the total number of completions of that workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostRecentSummary {
    pub id: String,
    #[serde(with = "flexible")]
    pub date: DateTime<Utc>,
    pub count: usize,
}

/// Per-workout totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutStats {
    pub workout_id: String,
    /// Name on the most recent completion
    pub name: String,
    pub count: usize,
    #[serde(with = "flexible")]
    pub first_completed: DateTime<Utc>,
    #[serde(with = "flexible")]
    pub last_completed: DateTime<Utc>,
}

/// Completions within one day, week or month
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PeriodStats {
    pub completions: usize,
    /// Completions keyed by workout id
    pub workouts: HashMap<String, usize>,
}

impl PeriodStats {
    pub fn add(&mut self, workout_id: &str) {
        self.completions += 1;
        *self.workouts.entry(workout_id.to_string()).or_default() += 1;
    }
}

/// Date filter for queries
#[derive(Debug, Clone, Default)]
pub struct DateFilter {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl DateFilter {
    pub fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { since, until }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(s) = self.since
            && date < s
        {
            return false;
        }
        if let Some(u) = self.until
            && date > u
        {
            return false;
        }
        true
    }
}

/// Loading result with statistics
#[derive(Debug, Default)]
pub struct LoadResult {
    pub workouts: Vec<CompletedWorkout>,
    /// Records that could not be parsed
    pub skipped: usize,
    /// Records parsed successfully, before date filtering
    pub valid: usize,
    pub files: usize,
}
