use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::ClikanError;
use crate::models::{Board, Status};
use crate::store::Limits;

use super::{parse_id, Report};

/// Move each entry one column to the right.
///
/// The WIP ceiling is checked against the in-progress count taken before the
/// batch starts, so promoting several todo entries in one call can overshoot
/// the limit.
pub fn promote(board: &mut Board, limits: &Limits, ids: &[String], now: NaiveDateTime) -> Report {
    let mut report = Report::default();
    let in_progress = board.count(Status::InProgress);

    for raw in ids {
        let id = match parse_id(raw) {
            Ok(id) => id,
            Err(e) => {
                report.rejected(e);
                continue;
            }
        };
        let Some(entry) = board.data.get_mut(&id) else {
            report.rejected(ClikanError::task_not_found(id));
            continue;
        };

        match entry.status {
            Status::Todo => {
                if let Some(wip) = limits.wip {
                    if in_progress >= wip {
                        report.rejected(ClikanError::limit_reached(format!(
                            "Can not promote, in-progress limit of {wip} reached."
                        )));
                        continue;
                    }
                }
                entry.status = Status::InProgress;
                entry.touch(now);
                report.applied(format!("Promoting task {id} to in-progress."));
            }
            Status::InProgress => {
                entry.status = Status::Done;
                entry.touch(now);
                report.applied(format!("Promoting task {id} to done."));
            }
            Status::Done | Status::Deleted => {
                report.rejected(ClikanError::invalid_transition(format!(
                    "Can not promote {id}, already done."
                )));
            }
        }
    }
    debug!(applied = report.changed(), "promote batch finished");
    report
}

/// Move each entry one column to the left.
pub fn regress(board: &mut Board, ids: &[String], now: NaiveDateTime) -> Report {
    let mut report = Report::default();

    for raw in ids {
        let id = match parse_id(raw) {
            Ok(id) => id,
            Err(e) => {
                report.rejected(e);
                continue;
            }
        };
        let Some(entry) = board.data.get_mut(&id) else {
            report.rejected(ClikanError::task_not_found(id));
            continue;
        };

        match entry.status.regressed() {
            Some(to) => {
                entry.status = to;
                entry.touch(now);
                let column = match to {
                    Status::InProgress => "in-progress",
                    _ => "todo",
                };
                report.applied(format!("Regressing task {id} to {column}."));
            }
            None => report.rejected(ClikanError::invalid_transition(format!(
                "Already in todo, can not regress {id}"
            ))),
        }
    }
    debug!(applied = report.changed(), "regress batch finished");
    report
}
