use serde_json::json;

use crate::cli::{emit, finish, VERSION};
use crate::engine::split_items;
use crate::error::ClikanError;
use crate::models::Board;
use crate::output;
use crate::store::{self, registry, ProjectContext};
use crate::timestamp;

pub fn run(due: bool, json_output: bool) -> i32 {
    finish(run_inner(due, json_output), json_output)
}

fn run_inner(due: bool, json_output: bool) -> Result<i32, ClikanError> {
    let home = registry::home_dir()?;
    let ctx = ProjectContext::current(&home)?;
    let board = store::load(&ctx.data_path())?;
    display(&ctx, &board, due, json_output);
    Ok(0)
}

/// Render `board` for the project in `ctx`. Also used for repaint after a
/// mutating command.
pub fn display(ctx: &ProjectContext, board: &Board, due: bool, json_output: bool) {
    let due_on = due.then(|| timestamp::now().date());
    let columns = split_items(board, due_on);
    let done_limit = ctx.config.limits.done();
    if json_output {
        emit(&output::json::success(json!({
            "project": ctx.name,
            "columns": output::json::columns_json(&columns, done_limit)
        })));
    } else {
        output::text::print_board(&ctx.name, VERSION, &columns, done_limit);
    }
}
