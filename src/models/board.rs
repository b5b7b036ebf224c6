use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Entry, Status};

/// Full persisted state of one project.
///
/// Both maps are keyed by task id and iterate in id order. Ids only grow
/// between refreshes, so id order is insertion order for display and
/// renumbering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub data: BTreeMap<u32, Entry>,
    #[serde(default)]
    pub deleted: BTreeMap<u32, Entry>,
}

impl Board {
    /// One past the highest id in either map, or 1 for an empty board.
    /// Counting tombstones keeps deleted ids from being handed out again
    /// before a refresh. `None` once `u32::MAX` is taken.
    pub fn next_id(&self) -> Option<u32> {
        let live = self.data.keys().next_back().copied().unwrap_or(0);
        let dead = self.deleted.keys().next_back().copied().unwrap_or(0);
        live.max(dead).checked_add(1)
    }

    pub fn count(&self, status: Status) -> usize {
        self.data.values().filter(|e| e.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp;

    fn entry(task: &str, status: Status) -> Entry {
        let mut e = Entry::new(task, None, timestamp::now());
        e.status = status;
        e
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(Board::default().next_id(), Some(1));
    }

    #[test]
    fn test_next_id_counts_tombstones() {
        let mut board = Board::default();
        board.data.insert(1, entry("a", Status::Todo));
        board.deleted.insert(4, entry("b", Status::Deleted));
        assert_eq!(board.next_id(), Some(5));
    }

    #[test]
    fn test_next_id_exhausted() {
        let mut board = Board::default();
        board.deleted.insert(u32::MAX, entry("last", Status::Deleted));
        assert_eq!(board.next_id(), None);
    }

    #[test]
    fn test_count_by_status() {
        let mut board = Board::default();
        board.data.insert(1, entry("a", Status::Todo));
        board.data.insert(2, entry("b", Status::InProgress));
        board.data.insert(3, entry("c", Status::Todo));
        assert_eq!(board.count(Status::Todo), 2);
        assert_eq!(board.count(Status::InProgress), 1);
        assert_eq!(board.count(Status::Done), 0);
    }

    #[test]
    fn test_yaml_shape() {
        let mut board = Board::default();
        board.data.insert(1, entry("a", Status::Todo));
        let yaml = serde_yaml::to_string(&board).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert!(value["data"][1].is_sequence());
        assert!(value["deleted"].as_mapping().unwrap().is_empty());
    }
}
