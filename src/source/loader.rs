//! Workout history loader
//!
//! Reads completions from a single file or from every `*.json` / `*.jsonl`
//! file below a directory. A file starting with `[` holds a JSON array of
//! records, a file holding one JSON object is a single record, and anything
//! else is read as JSON Lines.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{CompletedWorkout, DateFilter, LoadResult};
use crate::error::AppError;
use crate::utils::{Timezone, debug_enabled};

const HISTORY_PATTERNS: [&str; 2] = ["**/*.json", "**/*.jsonl"];

/// Records parsed from one file
#[derive(Debug, Default)]
struct FileRecords {
    workouts: Vec<CompletedWorkout>,
    skipped: usize,
}

fn find_history_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    // User-supplied directories may contain `[`, `*` or `?`
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    for pattern in HISTORY_PATTERNS {
        let full = format!("{base}/{pattern}");
        if let Ok(entries) = glob::glob(&full) {
            files.extend(entries.flatten().filter(|p| p.is_file()));
        }
    }
    files.sort();
    files
}

fn parse_record(value: serde_json::Value, path: &Path, position: usize) -> Option<CompletedWorkout> {
    match serde_json::from_value::<CompletedWorkout>(value) {
        Ok(workout) => Some(workout),
        Err(err) => {
            if debug_enabled() {
                eprintln!("Invalid record at {}:{}: {}", path.display(), position, err);
            }
            None
        }
    }
}

fn parse_json_array(content: &str, path: &Path) -> FileRecords {
    let values: Vec<serde_json::Value> = match serde_json::from_str(content) {
        Ok(values) => values,
        Err(err) => {
            if debug_enabled() {
                eprintln!("Invalid JSON array in {}: {}", path.display(), err);
            }
            return FileRecords {
                workouts: Vec::new(),
                skipped: 1,
            };
        }
    };

    let mut records = FileRecords::default();
    for (index, value) in values.into_iter().enumerate() {
        match parse_record(value, path, index + 1) {
            Some(workout) => records.workouts.push(workout),
            None => records.skipped += 1,
        }
    }
    records
}

fn parse_json_lines(content: &str, path: &Path) -> FileRecords {
    let mut records = FileRecords::default();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(err) => {
                if debug_enabled() {
                    eprintln!("Invalid JSON at {}:{}: {}", path.display(), line_no + 1, err);
                }
                records.skipped += 1;
                continue;
            }
        };

        match parse_record(value, path, line_no + 1) {
            Some(workout) => records.workouts.push(workout),
            None => records.skipped += 1,
        }
    }
    records
}

fn parse_history_content(content: &str, path: &Path) -> FileRecords {
    if content.trim_start().starts_with('[') {
        return parse_json_array(content, path);
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(content)
        && value.is_object()
    {
        return match parse_record(value, path, 1) {
            Some(workout) => FileRecords {
                workouts: vec![workout],
                skipped: 0,
            },
            None => FileRecords {
                workouts: Vec::new(),
                skipped: 1,
            },
        };
    }
    parse_json_lines(content, path)
}

fn read_history_file(path: &Path) -> Result<FileRecords, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_history_content(&content, path))
}

/// Load completions from `path`, keeping those whose local day passes `filter`
pub fn load_history(
    path: &Path,
    filter: &DateFilter,
    timezone: Timezone,
) -> Result<LoadResult, AppError> {
    if !path.exists() {
        return Err(AppError::HistoryNotFound {
            path: path.to_path_buf(),
        });
    }

    let parsed: Vec<FileRecords> = if path.is_dir() {
        find_history_files(path)
            .par_iter()
            .filter_map(|file| match read_history_file(file) {
                Ok(records) => Some(records),
                Err(err) => {
                    if debug_enabled() {
                        eprintln!("{err}");
                    }
                    None
                }
            })
            .collect()
    } else {
        vec![read_history_file(path)?]
    };

    // Unreadable files were dropped above and are not counted
    let mut result = LoadResult {
        files: parsed.len(),
        ..Default::default()
    };
    for records in parsed {
        result.skipped += records.skipped;
        result.valid += records.workouts.len();
        result.workouts.extend(
            records
                .workouts
                .into_iter()
                .filter(|w| filter.contains(timezone.local_date(w.date))),
        );
    }

    if debug_enabled() {
        eprintln!(
            "Loaded {} completions from {} file(s) ({} kept, {} skipped)",
            result.valid,
            result.files,
            result.workouts.len(),
            result.skipped
        );
    }

    Ok(result)
}
