use chrono::NaiveDateTime;
use serde_json::json;
use tracing::info;

use crate::cli::{emit, finish, show};
use crate::engine::{self, Edit, Report};
use crate::error::ClikanError;
use crate::models::Board;
use crate::output;
use crate::store::{self, registry, ProjectContext};
use crate::timestamp;

pub fn run_add(tasks: &[String], date: Option<&str>, json_output: bool) -> i32 {
    finish(
        mutate(json_output, |board, ctx, now| {
            engine::add(board, &ctx.config.limits, tasks, date, now)
        }),
        json_output,
    )
}

pub fn run_promote(ids: &[String], json_output: bool) -> i32 {
    finish(
        mutate(json_output, |board, ctx, now| {
            engine::promote(board, &ctx.config.limits, ids, now)
        }),
        json_output,
    )
}

pub fn run_regress(ids: &[String], json_output: bool) -> i32 {
    finish(
        mutate(json_output, |board, _, now| engine::regress(board, ids, now)),
        json_output,
    )
}

pub fn run_delete(ids: &[String], json_output: bool) -> i32 {
    finish(
        mutate(json_output, |board, _, now| engine::delete(board, ids, now)),
        json_output,
    )
}

pub fn run_edit(id: &str, changes: Edit, json_output: bool) -> i32 {
    finish(
        mutate(json_output, |board, ctx, now| {
            engine::edit(board, &ctx.config.limits, id, &changes, now)
        }),
        json_output,
    )
}

pub fn run_refresh(all: bool, json_output: bool) -> i32 {
    if all {
        finish(refresh_all(json_output), json_output)
    } else {
        finish(
            mutate(json_output, |board, _, _| engine::refresh(board)),
            json_output,
        )
    }
}

pub fn run_info(id: &str, json_output: bool) -> i32 {
    finish(info_inner(id, json_output), json_output)
}

/// Load the current project's board, apply `op`, write the board back if
/// anything changed and print the per-item report.
fn mutate<F>(json_output: bool, op: F) -> Result<i32, ClikanError>
where
    F: FnOnce(&mut Board, &ProjectContext, NaiveDateTime) -> Report,
{
    let home = registry::home_dir()?;
    let ctx = ProjectContext::current(&home)?;
    let path = ctx.data_path();

    let mut board = store::load(&path)?;
    let report = op(&mut board, &ctx, timestamp::now());
    if report.changed() {
        store::save(&path, &board)?;
    }

    if json_output {
        emit(&output::json::success(output::json::report_json(&report)));
    } else {
        output::text::print_report(&report);
        if ctx.config.repaint {
            show::display(&ctx, &board, false, false);
        }
    }
    Ok(0)
}

fn refresh_all(json_output: bool) -> Result<i32, ClikanError> {
    let home = registry::home_dir()?;
    let mut refreshed = Vec::new();
    for name in registry::list_projects(&home)? {
        let ctx = ProjectContext::resolve(&home, &name)?;
        let path = ctx.data_path();
        let mut board = store::load(&path)?;
        let report = engine::refresh(&mut board);
        store::save(&path, &board)?;
        info!(project = %name, "refreshed");
        if !json_output {
            for outcome in &report.outcomes {
                println!("{name}: {}", outcome.message());
            }
        }
        refreshed.push(name);
    }
    if json_output {
        emit(&output::json::success(json!({ "refreshed": refreshed })));
    }
    Ok(0)
}

fn info_inner(raw_id: &str, json_output: bool) -> Result<i32, ClikanError> {
    let home = registry::home_dir()?;
    let ctx = ProjectContext::current(&home)?;
    let board = store::load(&ctx.data_path())?;

    let id = engine::parse_id(raw_id)?;
    let entry = board
        .data
        .get(&id)
        .ok_or_else(|| ClikanError::task_not_found(id))?;

    if json_output {
        emit(&output::json::success(json!({
            "task": output::json::entry_json(id, entry)
        })));
    } else {
        output::text::print_entry(id, entry);
    }
    Ok(0)
}
