mod format;
mod json;
mod table;

pub(crate) use json::{
    output_check_json, output_history_json, output_period_json, output_recent_json,
    output_workouts_json,
};
pub(crate) use table::{
    SummaryOptions, TableOptions, print_history_table, print_period_table, print_recent_table,
    print_summary_line, print_workout_table,
};
