use std::path::PathBuf;
use std::process::ExitCode;

use liftlog::config::Config;
use liftlog::core::{
    DateFilter, LoadResult, Period, aggregate_by_period, aggregate_workouts,
    most_recent_workout_completed, sort_workouts_completed_by_date,
};
use liftlog::error::AppError;
use liftlog::source::load_history;
use liftlog::utils::{Timezone, parse_date};

use crate::cli::{CheckField, Cli, Commands, SortOrder};
use crate::output::{
    SummaryOptions, TableOptions, output_check_json, output_history_json, output_period_json,
    output_recent_json, output_workouts_json, print_history_table, print_period_table,
    print_recent_table, print_summary_line, print_workout_table,
};

const NO_DATA: &str = "No completed workouts found.";

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) history: LoadResult,
    pub(crate) timezone: Timezone,
}

impl CommandContext<'_> {
    fn table_options(&self) -> TableOptions {
        TableOptions {
            order: self.cli.sort_order(),
            use_color: self.cli.use_color(),
            timezone: self.timezone,
        }
    }

    fn summary(&self) -> SummaryOptions {
        SummaryOptions {
            valid: self.history.workouts.len(),
            skipped: self.history.skipped,
            files: self.history.files,
        }
    }
}

fn handle_recent(ctx: CommandContext<'_>) -> Result<(), AppError> {
    let workouts = &ctx.history.workouts;
    let summary = most_recent_workout_completed(workouts);
    let name = summary.as_ref().and_then(|s| {
        workouts
            .iter()
            .find(|w| w.workout_id == s.id && w.date == s.date)
            .map(|w| w.name.as_str())
    });

    if ctx.cli.json {
        println!("{}", output_recent_json(summary.as_ref(), name)?);
        return Ok(());
    }
    match summary {
        Some(summary) => {
            print_recent_table(&summary, name.unwrap_or_default(), ctx.table_options());
            print_summary_line(ctx.summary(), ctx.cli.use_color());
        }
        None => println!("{NO_DATA}"),
    }
    Ok(())
}

fn handle_history(ctx: CommandContext<'_>) -> Result<(), AppError> {
    let opts = ctx.table_options();
    let summary = ctx.summary();
    // Both directions are stable, so equal dates keep their input order
    let sorted = match opts.order {
        SortOrder::Desc => sort_workouts_completed_by_date(ctx.history.workouts),
        SortOrder::Asc => {
            let mut workouts = ctx.history.workouts;
            workouts.sort_by(|a, b| a.date.cmp(&b.date));
            workouts
        }
    };

    if ctx.cli.json {
        println!("{}", output_history_json(&sorted)?);
    } else if sorted.is_empty() {
        println!("{NO_DATA}");
    } else {
        print_history_table(&sorted, opts);
        print_summary_line(summary, opts.use_color);
    }
    Ok(())
}

fn handle_workouts(ctx: CommandContext<'_>) -> Result<(), AppError> {
    let opts = ctx.table_options();
    let summary = ctx.summary();
    let stats = aggregate_workouts(ctx.history.workouts);

    if ctx.cli.json {
        println!("{}", output_workouts_json(&stats, opts.order)?);
    } else if stats.is_empty() {
        println!("{NO_DATA}");
    } else {
        print_workout_table(&stats, opts);
        print_summary_line(summary, opts.use_color);
    }
    Ok(())
}

fn handle_period(ctx: CommandContext<'_>, period: Period) -> Result<(), AppError> {
    let opts = ctx.table_options();
    let stats = aggregate_by_period(&ctx.history.workouts, period, ctx.timezone);

    if ctx.cli.json {
        println!("{}", output_period_json(&stats, period, opts.order)?);
    } else if stats.is_empty() {
        println!("{NO_DATA}");
    } else {
        print_period_table(&stats, period, opts);
        print_summary_line(ctx.summary(), opts.use_color);
    }
    Ok(())
}

/// Exit status reflects whether the value passed
fn handle_check(field: &CheckField, json: bool, config: &Config) -> Result<ExitCode, AppError> {
    let (name, errors) = match field {
        CheckField::Username { value } => ("username", config.username.violations(value)),
        CheckField::Password { value } => ("password", config.password.violations(value)),
    };

    if json {
        println!("{}", output_check_json(name, &errors)?);
    } else if errors.is_empty() {
        println!("OK");
    } else {
        for e in &errors {
            println!("{e}");
        }
    }

    Ok(if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub(crate) fn run(cli: &Cli, config: &Config) -> Result<ExitCode, AppError> {
    let default_command = Commands::Recent;
    let command = cli.command.as_ref().unwrap_or(&default_command);

    if let Commands::Check { field } = command {
        return handle_check(field, cli.json, config);
    }

    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let filter = DateFilter::new(
        cli.since.as_deref().map(parse_date).transpose()?,
        cli.until.as_deref().map(parse_date).transpose()?,
    );
    let path = cli
        .history_path()
        .ok_or_else(|| AppError::HistoryNotFound {
            path: PathBuf::from("~/.liftlog/history"),
        })?;
    let history = load_history(&path, &filter, timezone)?;

    let ctx = CommandContext {
        cli,
        history,
        timezone,
    };

    if let Some(period) = command.period() {
        handle_period(ctx, period)?;
        return Ok(ExitCode::SUCCESS);
    }
    match command {
        Commands::History => handle_history(ctx)?,
        Commands::Workouts => handle_workouts(ctx)?,
        _ => handle_recent(ctx)?,
    }
    Ok(ExitCode::SUCCESS)
}
