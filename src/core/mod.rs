//! Core module - workout records and the aggregations over them

mod aggregator;
mod types;

pub use aggregator::{
    Period, aggregate_by_period, aggregate_workouts, most_recent_workout_completed, period_key,
    sort_workouts_completed_by_date,
};
pub use types::{
    CompletedWorkout, DateFilter, LoadResult, MostRecentSummary, PeriodStats, WorkoutStats,
};
