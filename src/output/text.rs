use crate::engine::{Card, Columns, Report};
use crate::models::Entry;
use crate::timestamp;

pub fn print_report(report: &Report) {
    for outcome in &report.outcomes {
        println!("{}", outcome.message());
    }
}

/// Done cards shown on the board: the most recent `limit`, newest first.
pub fn recent_done(done: &[Card], limit: usize) -> Vec<&Card> {
    done.iter().rev().take(limit).collect()
}

pub fn print_board(project: &str, version: &str, columns: &Columns, done_limit: usize) {
    print!("{}", render_board(project, version, columns, done_limit));
}

pub fn render_board(project: &str, version: &str, columns: &Columns, done_limit: usize) -> String {
    let cells: [Vec<String>; 3] = [
        columns.todo.iter().map(ToString::to_string).collect(),
        columns.in_progress.iter().map(ToString::to_string).collect(),
        recent_done(&columns.done, done_limit)
            .into_iter()
            .map(ToString::to_string)
            .collect(),
    ];
    let headers = ["todo", "in-progress", "done"];

    let widths: Vec<usize> = headers
        .iter()
        .zip(&cells)
        .map(|(h, col)| {
            col.iter()
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let rule = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");

    let mut out = String::new();
    out.push_str(&row(&headers.map(String::from), &widths));
    out.push_str(&rule);
    out.push('\n');
    let height = cells.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..height {
        let line = [0, 1, 2].map(|c| cells[c].get(i).cloned().unwrap_or_default());
        out.push_str(&row(&line, &widths));
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("clikan ({project})  v.{version}\n"));
    out
}

fn row(cells: &[String; 3], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!(" {cell}{} ", " ".repeat(pad))
        })
        .collect();
    format!("{}\n", padded.join("|").trim_end())
}

pub fn print_entry(id: u32, e: &Entry) {
    println!("Task {id}: {}", e.task);
    println!("  Status: {}", e.status);
    println!("  Last updated: {}", timestamp::format(&e.last_updated));
    if let Some(ref due) = e.target_date {
        println!("  Due: {}", timestamp::format(due));
    }
    if e.has_desc() {
        println!("  Description: {}", e.desc);
    }
}

pub fn print_projects(current: &str, projects: &[String]) {
    println!("*{current}");
    for p in projects.iter().filter(|p| p.as_str() != current) {
        println!("{p}");
    }
}
