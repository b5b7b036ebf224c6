use serde_json::{json, Value};

use crate::engine::{Card, Columns, Outcome, Report};
use crate::error::ClikanError;
use crate::models::Entry;
use crate::timestamp;

use super::text::recent_done;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &ClikanError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn outcome_json(o: &Outcome) -> Value {
    match o {
        Outcome::Applied(message) => json!({ "ok": true, "message": message }),
        Outcome::Rejected(err) => json!({
            "ok": false,
            "code": err.code.as_str(),
            "message": err.message
        }),
    }
}

pub fn report_json(r: &Report) -> Value {
    json!({
        "results": r.outcomes.iter().map(outcome_json).collect::<Vec<_>>()
    })
}

pub fn card_json(c: &Card) -> Value {
    json!({
        "id": c.id,
        "task": c.task,
        "has_desc": c.has_desc,
        "target_date": c.target_date.as_ref().map(timestamp::format),
        "label": c.to_string()
    })
}

pub fn columns_json(cols: &Columns, done_limit: usize) -> Value {
    json!({
        "todo": cols.todo.iter().map(card_json).collect::<Vec<_>>(),
        "inprogress": cols.in_progress.iter().map(card_json).collect::<Vec<_>>(),
        "done": recent_done(&cols.done, done_limit)
            .into_iter()
            .map(card_json)
            .collect::<Vec<_>>()
    })
}

pub fn entry_json(id: u32, e: &Entry) -> Value {
    json!({
        "id": id,
        "task": e.task,
        "status": e.status.as_str(),
        "last_updated": timestamp::format(&e.last_updated),
        "target_date": e.target_date.as_ref().map(timestamp::format),
        "desc": e.desc
    })
}
