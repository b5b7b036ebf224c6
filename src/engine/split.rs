use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Board, Entry, Status};

/// Display form of one entry: `[3] label`, or `[3*] label` when the entry has
/// a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub task: String,
    pub has_desc: bool,
    pub target_date: Option<NaiveDateTime>,
}

impl Card {
    fn new(id: u32, entry: &Entry) -> Self {
        Self {
            id,
            task: entry.task.clone(),
            has_desc: entry.has_desc(),
            target_date: entry.target_date,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.has_desc { "*" } else { "" };
        write!(f, "[{}{}] {}", self.id, marker, self.task)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    pub todo: Vec<Card>,
    pub in_progress: Vec<Card>,
    pub done: Vec<Card>,
}

/// Partition active entries by status, keeping board order inside each
/// column. With `due_on` set, only entries whose target date falls on or
/// before that day are included.
pub fn split_items(board: &Board, due_on: Option<NaiveDate>) -> Columns {
    let mut columns = Columns::default();
    for (id, entry) in &board.data {
        if let Some(day) = due_on {
            match entry.target_date {
                Some(target) if target.date() <= day => {}
                _ => continue,
            }
        }
        let card = Card::new(*id, entry);
        match entry.status {
            Status::Todo => columns.todo.push(card),
            Status::InProgress => columns.in_progress.push(card),
            Status::Done => columns.done.push(card),
            Status::Deleted => {}
        }
    }
    columns
}
