use std::collections::HashMap;

use liftlog::core::{CompletedWorkout, MostRecentSummary, Period, PeriodStats, WorkoutStats};
use liftlog::error::AppError;
use liftlog::validation::ValidationError;

use crate::cli::SortOrder;
use crate::output::table::sorted_keys;

fn in_order<T>(items: &[T], order: SortOrder) -> Vec<&T> {
    let mut rows: Vec<&T> = items.iter().collect();
    if order == SortOrder::Asc {
        rows.reverse();
    }
    rows
}

/// `null` when there is nothing to report
pub(crate) fn output_recent_json(
    summary: Option<&MostRecentSummary>,
    name: Option<&str>,
) -> Result<String, AppError> {
    let value = match summary {
        Some(s) => serde_json::json!({
            "id": s.id,
            "name": name,
            "date": s.date.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            "count": s.count,
        }),
        None => serde_json::Value::Null,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

/// `workouts` must already be in display order
pub(crate) fn output_history_json(workouts: &[CompletedWorkout]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(workouts)?)
}

pub(crate) fn output_workouts_json(
    stats: &[WorkoutStats],
    order: SortOrder,
) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&in_order(stats, order))?)
}

fn period_field(period: Period) -> &'static str {
    match period {
        Period::Day => "date",
        Period::Week => "week",
        Period::Month => "month",
    }
}

pub(crate) fn output_period_json(
    stats: &HashMap<String, PeriodStats>,
    period: Period,
    order: SortOrder,
) -> Result<String, AppError> {
    let output: Vec<serde_json::Value> = sorted_keys(stats, order)
        .into_iter()
        .map(|key| {
            let p = &stats[key];
            serde_json::json!({
                period_field(period): key,
                "completions": p.completions,
                "workouts": p.workouts,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&output)?)
}

pub(crate) fn output_check_json(
    field: &str,
    errors: &[ValidationError],
) -> Result<String, AppError> {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    let value = serde_json::json!({
        "field": field,
        "valid": errors.is_empty(),
        "errors": messages,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
