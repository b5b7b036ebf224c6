use std::fmt;

use chrono::NaiveDateTime;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    InProgress,
    Done,
    Deleted,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
            Self::Deleted => "deleted",
        }
    }

    /// Next column to the right, or `None` at the end of the board.
    pub fn promoted(&self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done | Self::Deleted => None,
        }
    }

    /// Next column to the left, or `None` at the start of the board.
    pub fn regressed(&self) -> Option<Self> {
        match self {
            Self::Done => Some(Self::InProgress),
            Self::InProgress => Some(Self::Todo),
            Self::Todo | Self::Deleted => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One task on the board.
///
/// On disk an entry is the ordered list
/// `[status, task, last_updated, target_date_or_null, desc]`. Records written
/// before descriptions existed stop after the target date and load with an
/// empty `desc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub status: Status,
    pub task: String,
    pub last_updated: NaiveDateTime,
    pub target_date: Option<NaiveDateTime>,
    /// Empty means no description.
    pub desc: String,
}

impl Entry {
    pub fn new(task: impl Into<String>, target_date: Option<NaiveDateTime>, now: NaiveDateTime) -> Self {
        Self {
            status: Status::Todo,
            task: task.into(),
            last_updated: now,
            target_date,
            desc: String::new(),
        }
    }

    pub fn has_desc(&self) -> bool {
        !self.desc.is_empty()
    }

    pub fn touch(&mut self, now: NaiveDateTime) {
        self.last_updated = now;
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(5))?;
        seq.serialize_element(&self.status)?;
        seq.serialize_element(&self.task)?;
        seq.serialize_element(&timestamp::format(&self.last_updated))?;
        seq.serialize_element(&self.target_date.as_ref().map(timestamp::format))?;
        seq.serialize_element(&self.desc)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(EntryVisitor)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = Entry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list [status, task, last_updated, target_date, desc]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Entry, A::Error> {
        let status: Status = seq
            .next_element()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
        let task: String = seq
            .next_element()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(1, &self))?;
        let raw_updated: String = seq
            .next_element()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(2, &self))?;
        let last_updated = timestamp::parse(&raw_updated).map_err(<A::Error as de::Error>::custom)?;
        let target_date = match seq.next_element::<Option<String>>()?.flatten() {
            Some(raw) => Some(timestamp::parse(&raw).map_err(<A::Error as de::Error>::custom)?),
            None => None,
        };
        let desc = seq.next_element::<Option<String>>()?.flatten().unwrap_or_default();
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(Entry {
            status,
            task,
            last_updated,
            target_date,
            desc,
        })
    }
}
