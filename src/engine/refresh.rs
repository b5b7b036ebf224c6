use tracing::info;

use crate::models::{Board, Status};

use super::Report;

/// Compact the board: drop done entries, renumber the rest 1..N in their
/// current order and forget every tombstone. Old ids are meaningless
/// afterwards.
pub fn refresh(board: &mut Board) -> Report {
    let before = board.data.len();
    let tombstones = board.deleted.len();

    board.data = std::mem::take(&mut board.data)
        .into_values()
        .filter(|entry| entry.status != Status::Done)
        .zip(1u32..)
        .map(|(entry, id)| (id, entry))
        .collect();
    board.deleted.clear();

    info!(
        kept = board.data.len(),
        dropped_done = before - board.data.len(),
        purged = tombstones,
        "board refreshed"
    );
    let mut report = Report::default();
    report.applied("Refreshing task numbers.");
    report
}
