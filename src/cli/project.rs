use serde_json::json;

use crate::cli::{emit, finish, show};
use crate::error::ClikanError;
use crate::output;
use crate::store::registry::{self, Setup, DEFAULT_PROJECT};
use crate::store::{self, ProjectContext};

pub fn run_configure(force: bool, json_output: bool) -> i32 {
    finish(configure_inner(force, json_output), json_output)
}

pub fn run_switch(name: Option<&str>, json_output: bool) -> i32 {
    finish(switch_inner(name.unwrap_or(DEFAULT_PROJECT), json_output), json_output)
}

pub fn run_projects(json_output: bool) -> i32 {
    finish(projects_inner(json_output), json_output)
}

pub fn run_delproj(name: &str, yes: bool, json_output: bool) -> i32 {
    finish(delproj_inner(name, yes, json_output), json_output)
}

fn configure_inner(force: bool, json_output: bool) -> Result<i32, ClikanError> {
    let home = registry::home_dir()?;
    let (created, path) = match registry::setup_project(&home, DEFAULT_PROJECT, force)? {
        Setup::Created(path) => (true, path),
        Setup::AlreadyExists(path) => (false, path),
    };
    if json_output {
        emit(&output::json::success(json!({
            "path": path.to_string_lossy(),
            "created": created
        })));
    } else if created {
        println!("Creating {}", path.display());
    } else {
        println!("Config file exists. Use --force to overwrite.");
    }
    Ok(0)
}

fn switch_inner(name: &str, json_output: bool) -> Result<i32, ClikanError> {
    let home = registry::home_dir()?;
    let created = !registry::exists(&home, name);
    if created {
        registry::setup_project(&home, name, false)?;
    }
    registry::set_current(&home, name)?;

    let ctx = ProjectContext::resolve(&home, name)?;
    let board = store::load(&ctx.data_path())?;
    if json_output {
        emit(&output::json::success(json!({
            "project": name,
            "created": created
        })));
    } else {
        if created {
            println!("Project {name} does not exist.");
            println!("Creating project {name}.");
        }
        println!("Switching to project {name}.");
        show::display(&ctx, &board, false, false);
    }
    Ok(0)
}

fn projects_inner(json_output: bool) -> Result<i32, ClikanError> {
    let home = registry::home_dir()?;
    let current = registry::current_project(&home);
    let projects = registry::list_projects(&home)?;
    if json_output {
        emit(&output::json::success(json!({
            "current": current,
            "projects": projects
        })));
    } else {
        output::text::print_projects(&current, &projects);
    }
    Ok(0)
}

fn delproj_inner(name: &str, yes: bool, json_output: bool) -> Result<i32, ClikanError> {
    if !yes {
        return Err(ClikanError::validation(format!(
            "Not deleting project {name}; pass --yes to confirm."
        )));
    }
    let home = registry::home_dir()?;
    registry::delete_project(&home, name)?;
    if json_output {
        emit(&output::json::success(json!({ "deleted": name })));
    } else {
        println!("Deleted project {name}");
    }
    Ok(0)
}
