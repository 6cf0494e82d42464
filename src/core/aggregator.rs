//! Aggregation over completed workouts
//!
//! Converts a flat list of completions into the views the reports need:
//! recency order, the most recent summary, per-workout and per-period totals.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use crate::consts::DATE_FORMAT;
use crate::core::types::{CompletedWorkout, MostRecentSummary, PeriodStats, WorkoutStats};
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

/// Order completions newest first (consumes the list to avoid cloning).
///
/// The sort is stable, so completions with equal dates keep their input order.
pub fn sort_workouts_completed_by_date(mut workouts: Vec<CompletedWorkout>) -> Vec<CompletedWorkout> {
    workouts.sort_by(|a, b| b.date.cmp(&a.date));
    workouts
}

/// Summarize the latest completion and how often that workout was completed.
///
/// Returns `None` for an empty list. On equal dates the earliest record wins.
pub fn most_recent_workout_completed(workouts: &[CompletedWorkout]) -> Option<MostRecentSummary> {
    let latest = workouts
        .iter()
        .reduce(|acc, w| if w.date > acc.date { w } else { acc })?;

    let count = workouts
        .iter()
        .filter(|w| w.workout_id == latest.workout_id)
        .count();

    Some(MostRecentSummary {
        id: latest.workout_id.clone(),
        date: latest.date,
        count,
    })
}

/// Aggregate completions by workout id (consumes entries to avoid cloning)
pub fn aggregate_workouts(workouts: Vec<CompletedWorkout>) -> Vec<WorkoutStats> {
    let mut by_id: HashMap<String, WorkoutStats> = HashMap::new();

    for workout in workouts {
        match by_id.get_mut(&workout.workout_id) {
            Some(stats) => {
                stats.count += 1;
                if workout.date < stats.first_completed {
                    stats.first_completed = workout.date;
                }
                if workout.date > stats.last_completed {
                    stats.last_completed = workout.date;
                    stats.name = workout.name;
                }
            }
            None => {
                let stats = WorkoutStats {
                    workout_id: workout.workout_id.clone(),
                    name: workout.name,
                    count: 1,
                    first_completed: workout.date,
                    last_completed: workout.date,
                };
                by_id.insert(workout.workout_id, stats);
            }
        }
    }

    let mut stats: Vec<WorkoutStats> = by_id.into_values().collect();
    stats.sort_by(|a, b| {
        b.last_completed
            .cmp(&a.last_completed)
            .then_with(|| a.workout_id.cmp(&b.workout_id))
    });
    stats
}

/// Get the Monday of the week for a given date (ISO week)
fn week_start(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(weekday))
}

pub fn period_key(date: NaiveDate, period: Period) -> String {
    match period {
        Period::Day => date.format(DATE_FORMAT).to_string(),
        Period::Week => week_start(date).format(DATE_FORMAT).to_string(),
        Period::Month => date.format("%Y-%m").to_string(),
    }
}

/// Count completions per calendar period, placing each on its local day
pub fn aggregate_by_period(
    workouts: &[CompletedWorkout],
    period: Period,
    timezone: Timezone,
) -> HashMap<String, PeriodStats> {
    let mut aggregated: HashMap<String, PeriodStats> = HashMap::new();

    for workout in workouts {
        let key = period_key(timezone.local_date(workout.date), period);
        aggregated.entry(key).or_default().add(&workout.workout_id);
    }

    aggregated
}
