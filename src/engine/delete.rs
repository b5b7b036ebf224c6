use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::ClikanError;
use crate::models::{Board, Status};

use super::{parse_id, Report};

/// Soft-delete: the entry keeps its id and moves to the tombstone map until
/// the next refresh.
pub fn delete(board: &mut Board, ids: &[String], now: NaiveDateTime) -> Report {
    let mut report = Report::default();
    for raw in ids {
        let id = match parse_id(raw) {
            Ok(id) => id,
            Err(e) => {
                report.rejected(e);
                continue;
            }
        };
        match board.data.remove(&id) {
            Some(mut entry) => {
                entry.status = Status::Deleted;
                entry.touch(now);
                board.deleted.insert(id, entry);
                debug!(id, "task deleted");
                report.applied(format!("Removed task {id}."));
            }
            None => report.rejected(ClikanError::task_not_found(id)),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::add;
    use crate::engine::testing::{at, codes, ids};
    use crate::error::ErrorCode;
    use crate::store::Limits;

    #[test]
    fn test_delete_twice() {
        let mut board = Board::default();
        add(&mut board, &Limits::default(), &ids(&["a"]), None, at(1, 9));
        let r = delete(&mut board, &ids(&["1"]), at(1, 10));
        assert_eq!(r.outcomes[0].message(), "Removed task 1.");
        assert_eq!(board.deleted[&1].last_updated, at(1, 10));

        let r = delete(&mut board, &ids(&["1"]), at(1, 11));
        assert_eq!(codes(&r), vec![Some(ErrorCode::TaskNotFound)]);
        assert_eq!(board.deleted[&1].last_updated, at(1, 10));
    }

    #[test]
    fn test_delete_batch() {
        let mut board = Board::default();
        add(&mut board, &Limits::default(), &ids(&["a", "b", "c"]), None, at(1, 9));
        let r = delete(&mut board, &ids(&["3", "one", "1"]), at(1, 10));
        assert_eq!(codes(&r), vec![None, Some(ErrorCode::InvalidTaskId), None]);
        assert_eq!(board.data.keys().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(board.deleted.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert!(board.deleted.values().all(|e| e.status == Status::Deleted));
    }
}
