use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::ClikanError;
use crate::models::{Board, Entry, Status};
use crate::store::Limits;
use crate::timestamp;

use super::Report;

/// Add each label as a new `todo` entry. Labels are checked one at a time
/// against the name length and the todo ceiling; a rejected label does not
/// stop the ones after it.
pub fn add(
    board: &mut Board,
    limits: &Limits,
    tasks: &[String],
    date: Option<&str>,
    now: NaiveDateTime,
) -> Report {
    let mut report = Report::default();

    let target_date = match date.map(|token| timestamp::resolve_relative_date(token, now)) {
        Some(Ok(d)) => Some(d),
        Some(Err(e)) => {
            report.rejected(e);
            return report;
        }
        None => None,
    };

    let max_len = limits.taskname();
    for task in tasks {
        if task.trim().is_empty() {
            report.rejected(ClikanError::validation("Task must not be empty"));
            continue;
        }
        if task.chars().count() > max_len {
            report.rejected(ClikanError::task_too_long(max_len, task));
            continue;
        }
        if let Some(max_todo) = limits.todo {
            if board.count(Status::Todo) >= max_todo {
                report.rejected(ClikanError::limit_reached(
                    "No new todos, limit reached already.",
                ));
                continue;
            }
        }

        let Some(id) = board.next_id() else {
            report.rejected(ClikanError::limit_reached(
                "No task ids left; run `clikan refresh` to renumber.",
            ));
            continue;
        };
        board
            .data
            .insert(id, Entry::new(task.as_str(), target_date, now));
        debug!(id, "task added");
        report.applied(format!("Creating new task w/ id: {id} -> {task}"));
    }
    report
}
