use comfy_table::Color;
use std::collections::HashMap;

use liftlog::core::{CompletedWorkout, MostRecentSummary, Period, PeriodStats, WorkoutStats};
use liftlog::utils::Timezone;

use crate::cli::SortOrder;
use crate::output::format::{
    create_styled_table, format_count, header_cell, right_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    pub(crate) timezone: Timezone,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SummaryOptions {
    pub(crate) valid: usize,
    pub(crate) skipped: usize,
    pub(crate) files: usize,
}

/// Print the summary line below a table
pub(crate) fn print_summary_line(summary: SummaryOptions, use_color: bool) {
    let mut text = format!(
        "{} completions from {} file(s)",
        format_count(summary.valid),
        format_count(summary.files)
    );
    if summary.skipped > 0 {
        let skipped = format!("{} malformed records skipped", format_count(summary.skipped));
        if use_color {
            text = format!("{text} | \x1b[33m{skipped}\x1b[0m");
        } else {
            text = format!("{text} | {skipped}");
        }
    }
    println!("\n  {text}\n");
}

fn accent(use_color: bool, color: Color) -> Option<Color> {
    use_color.then_some(color)
}

pub(crate) fn print_recent_table(summary: &MostRecentSummary, name: &str, opts: TableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Workout", c),
        header_cell("Name", c),
        header_cell("Completed", c),
        header_cell("Times", c),
    ]);
    table.add_row(vec![
        styled_cell(&summary.id, accent(c, Color::Green), false),
        styled_cell(name, None, true),
        styled_cell(&opts.timezone.format(summary.date), None, false),
        right_cell(&format_count(summary.count), accent(c, Color::Yellow), true),
    ]);

    println!("\n  Most Recent Workout\n");
    println!("{table}");
}

/// `workouts` must already be in display order
pub(crate) fn print_history_table(workouts: &[CompletedWorkout], opts: TableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Completed", c),
        header_cell("Workout", c),
        header_cell("Name", c),
    ]);

    for w in workouts {
        table.add_row(vec![
            styled_cell(&opts.timezone.format(w.date), None, false),
            styled_cell(&w.workout_id, accent(c, Color::Green), false),
            styled_cell(&w.name, None, false),
        ]);
    }

    println!("\n  Workout History\n");
    println!("{table}");
}

/// `stats` must already be ordered by last completion, newest first
pub(crate) fn print_workout_table(stats: &[WorkoutStats], opts: TableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Workout", c),
        header_cell("Name", c),
        header_cell("Times", c),
        header_cell("First", c),
        header_cell("Last", c),
    ]);

    let mut rows: Vec<&WorkoutStats> = stats.iter().collect();
    if opts.order == SortOrder::Asc {
        rows.reverse();
    }
    let mut total = 0;
    for s in rows {
        total += s.count;
        table.add_row(vec![
            styled_cell(&s.workout_id, accent(c, Color::Green), false),
            styled_cell(&s.name, None, false),
            right_cell(&format_count(s.count), None, false),
            styled_cell(&opts.timezone.format(s.first_completed), None, false),
            styled_cell(&opts.timezone.format(s.last_completed), None, false),
        ]);
    }
    table.add_row(vec![
        styled_cell("TOTAL", accent(c, Color::Yellow), true),
        styled_cell("", None, false),
        right_cell(&format_count(total), accent(c, Color::Yellow), true),
        styled_cell("", None, false),
        styled_cell("", None, false),
    ]);

    println!("\n  Workouts\n");
    println!("{table}");
}

pub(super) fn period_label(period: Period) -> &'static str {
    match period {
        Period::Day => "Date",
        Period::Week => "Week",
        Period::Month => "Month",
    }
}

fn period_title(period: Period) -> &'static str {
    match period {
        Period::Day => "Daily Completions",
        Period::Week => "Weekly Completions",
        Period::Month => "Monthly Completions",
    }
}

pub(super) fn sorted_keys(stats: &HashMap<String, PeriodStats>, order: SortOrder) -> Vec<&String> {
    let mut keys: Vec<&String> = stats.keys().collect();
    match order {
        SortOrder::Asc => keys.sort(),
        SortOrder::Desc => keys.sort_by(|a, b| b.cmp(a)),
    }
    keys
}

pub(crate) fn print_period_table(
    stats: &HashMap<String, PeriodStats>,
    period: Period,
    opts: TableOptions,
) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell(period_label(period), c),
        header_cell("Completions", c),
        header_cell("Workouts", c),
        header_cell("Top", c),
    ]);

    let mut total = 0;
    for key in sorted_keys(stats, opts.order) {
        let p = &stats[key];
        total += p.completions;
        // Most completed workout; ties go to the smaller id
        let top = p
            .workouts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(id, count)| format!("{id} ({count})"))
            .unwrap_or_default();
        table.add_row(vec![
            styled_cell(key, None, false),
            right_cell(&format_count(p.completions), None, false),
            right_cell(&format_count(p.workouts.len()), None, false),
            styled_cell(&top, accent(c, Color::Green), false),
        ]);
    }
    table.add_row(vec![
        styled_cell("TOTAL", accent(c, Color::Yellow), true),
        right_cell(&format_count(total), accent(c, Color::Yellow), true),
        styled_cell("", None, false),
        styled_cell("", None, false),
    ]);

    println!("\n  {}\n", period_title(period));
    println!("{table}");
}
