//! Board mutations and queries.
//!
//! Every operation works on an in-memory [`Board`](crate::models::Board) and
//! reports per item: one bad id or oversized label is recorded in the
//! [`Report`] and the rest of the batch carries on. Callers save the board
//! once afterwards if [`Report::changed`] is true.

pub mod add;
pub mod delete;
pub mod edit;
pub mod refresh;
pub mod split;
pub mod transition;

pub use add::add;
pub use delete::delete;
pub use edit::{edit, Edit};
pub use refresh::refresh;
pub use split::{split_items, Card, Columns};
pub use transition::{promote, regress};

use crate::error::ClikanError;

#[derive(Debug, Clone)]
pub enum Outcome {
    Applied(String),
    Rejected(ClikanError),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Applied(msg) => msg,
            Self::Rejected(err) => &err.message,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn applied(&mut self, message: impl Into<String>) {
        self.outcomes.push(Outcome::Applied(message.into()));
    }

    pub fn rejected(&mut self, err: ClikanError) {
        tracing::debug!(code = err.code.as_str(), "{}", err.message);
        self.outcomes.push(Outcome::Rejected(err));
    }

    /// True when at least one item mutated the board.
    pub fn changed(&self) -> bool {
        self.outcomes.iter().any(Outcome::is_applied)
    }
}

/// Task ids on the command line are positive integers.
pub(crate) fn parse_id(raw: &str) -> Result<u32, ClikanError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ClikanError::invalid_task_id(raw))
}
