pub mod commands;
pub mod project;
pub mod show;
pub mod task;

pub use commands::*;

use serde_json::Value;

use crate::error::ClikanError;
use crate::output;

/// Print `value` as pretty JSON.
pub(crate) fn emit(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

/// Turn a command result into an exit code. Non-fatal errors are reported on
/// stdout like any other message and still exit 0.
pub(crate) fn finish(result: Result<i32, ClikanError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                emit(&output::json::error(&e));
            } else if e.code.is_fatal() {
                eprintln!("Error: {}", e.message);
            } else {
                println!("{}", e.message);
            }
            if e.code.is_fatal() {
                tracing::warn!(code = e.code.as_str(), "{}", e.message);
                1
            } else {
                0
            }
        }
    }
}
