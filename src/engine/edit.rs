use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::ClikanError;
use crate::models::Board;
use crate::store::Limits;
use crate::timestamp;

use super::{parse_id, Report};

/// Fields to change on one entry. `None` leaves a field alone; a `date` of
/// [`timestamp::CLEAR_DATE`] removes the due date.
#[derive(Debug, Clone, Default)]
pub struct Edit {
    pub task: Option<String>,
    pub date: Option<String>,
    pub desc: Option<String>,
}

impl Edit {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.date.is_none() && self.desc.is_none()
    }
}

pub fn edit(
    board: &mut Board,
    limits: &Limits,
    raw_id: &str,
    changes: &Edit,
    now: NaiveDateTime,
) -> Report {
    let mut report = Report::default();
    match apply(board, limits, raw_id, changes, now) {
        Ok(id) => {
            debug!(id, "task edited");
            report.applied(format!("Edited task {id}."));
        }
        Err(e) => report.rejected(e),
    }
    report
}

fn apply(
    board: &mut Board,
    limits: &Limits,
    raw_id: &str,
    changes: &Edit,
    now: NaiveDateTime,
) -> Result<u32, ClikanError> {
    let id = parse_id(raw_id)?;
    let current = board
        .data
        .get(&id)
        .ok_or_else(|| ClikanError::task_not_found(id))?;
    if changes.is_empty() {
        return Err(ClikanError::validation(format!(
            "Nothing to edit for task {id}."
        )));
    }

    let mut entry = current.clone();
    if let Some(task) = &changes.task {
        let max_len = limits.taskname();
        if task.chars().count() > max_len {
            return Err(ClikanError::task_too_long(max_len, task));
        }
        if task.trim().is_empty() {
            return Err(ClikanError::validation("Task must not be empty"));
        }
        entry.task = task.clone();
    }
    if let Some(token) = &changes.date {
        entry.target_date = if token.trim().eq_ignore_ascii_case(timestamp::CLEAR_DATE) {
            None
        } else {
            Some(timestamp::resolve_relative_date(token, now)?)
        };
    }
    if let Some(desc) = &changes.desc {
        entry.desc = desc.clone();
    }
    entry.touch(now);
    board.data.insert(id, entry);
    Ok(id)
}
