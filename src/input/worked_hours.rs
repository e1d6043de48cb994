//! Worked-hours file parsing and line serialization.
//!
//! Each non-blank line of the worked-hours file reads
//! `EMPLOYEE_NAME=PERIOD,PERIOD,...`, where a period is `DDHH:MM-HH:MM`
//! with `DD` a two-letter day code. Parsing is strict: any structural
//! defect aborts the run with a specific error rather than skipping the
//! record.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Timelike;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, WorkedInterval, WorkedWeek};

use super::{day_code, parse_clock_range, parse_day_code};

/// A source of worked weeks.
///
/// The single-method interface exists so alternative sources (a network
/// feed, a fixture in tests) can replace the file reader without the
/// core noticing.
pub trait InputProcessor {
    /// The parsed worked weeks, in input order.
    fn worked_weeks(&self) -> EngineResult<Vec<WorkedWeek>>;
}

/// Reads worked weeks from a text file.
///
/// # Example
///
/// ```no_run
/// use payday::input::{FileInputReader, InputProcessor};
///
/// let reader = FileInputReader::new("hours.txt");
/// let weeks = reader.worked_weeks()?;
/// # Ok::<(), payday::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileInputReader {
    path: PathBuf,
}

impl FileInputReader {
    /// Creates a reader for the given file path. The file is not touched
    /// until [`InputProcessor::worked_weeks`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileInputReader { path: path.into() }
    }
}

impl InputProcessor for FileInputReader {
    fn worked_weeks(&self) -> EngineResult<Vec<WorkedWeek>> {
        let text = read_file(&self.path)?;
        parse_worked_weeks(&text)
    }
}

pub(crate) fn read_file(path: &Path) -> EngineResult<String> {
    fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Parses the full worked-hours text. Blank lines are ignored.
///
/// # Errors
///
/// - [`EngineError::MalformedLineFormat`] for a non-blank line missing
///   `=`, `:`, or `-`.
/// - [`EngineError::InvalidDayCode`] for an unknown day token.
/// - [`EngineError::MalformedPeriod`] for a period whose times do not
///   parse.
pub fn parse_worked_weeks(text: &str) -> EngineResult<Vec<WorkedWeek>> {
    let mut weeks = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        weeks.push(parse_line(line)?);
    }
    debug!(weeks = weeks.len(), "parsed worked-hours input");
    Ok(weeks)
}

fn parse_line(line: &str) -> EngineResult<WorkedWeek> {
    // The structural check looks at the whole line, so one missing
    // delimiter anywhere reports the line rather than a period token.
    let Some((name, periods)) = line.split_once('=') else {
        return Err(EngineError::MalformedLineFormat {
            line: line.to_string(),
        });
    };
    if !(line.contains(':') && line.contains('-')) {
        return Err(EngineError::MalformedLineFormat {
            line: line.to_string(),
        });
    }

    let mut week = WorkedWeek::new(Employee::new(name));
    for token in periods.split(',') {
        week.add_work(parse_period(token.trim())?);
    }
    Ok(week)
}

fn parse_period(token: &str) -> EngineResult<WorkedInterval> {
    if !token.is_char_boundary(2) {
        return Err(EngineError::MalformedPeriod {
            token: token.to_string(),
        });
    }
    let (code, range) = token.split_at(2);
    let day = parse_day_code(code)?;
    let hours = parse_clock_range(range).ok_or_else(|| EngineError::MalformedPeriod {
        token: token.to_string(),
    })?;
    Ok(WorkedInterval { day, hours })
}

/// Renders a worked interval back to its `DDHH:MM-HH:MM` period token,
/// writing an end-of-day end as `00:00`.
pub fn format_period(interval: &WorkedInterval) -> String {
    let start = interval.hours.start;
    let end = interval.hours.end.as_clock();
    format!(
        "{}{:02}:{:02}-{:02}:{:02}",
        day_code(interval.day),
        start.hour(),
        start.minute(),
        end.hour(),
        end.minute()
    )
}

/// Renders a worked week back to its input line. Parsing a line and
/// formatting the result reproduces the original text.
pub fn format_week_line(week: &WorkedWeek) -> String {
    let periods: Vec<String> = week.work.iter().map(format_period).collect();
    format!("{}={}", week.employee.name, periods.join(","))
}
