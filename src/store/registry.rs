//! Project layout inside the clikan home directory:
//!
//! ```text
//! <home>/.current          name of the active project
//! <home>/.<name>.yaml      project config
//! <home>/.<name>.dat       project data (default location)
//! ```

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ClikanError;

use super::config::{self, ProjectConfig};

pub const HOME_ENV: &str = "CLIKAN_HOME";
pub const DEFAULT_PROJECT: &str = "default";
const MARKER: &str = ".current";

/// `$CLIKAN_HOME`, or `~/.clikan`.
pub fn home_dir() -> Result<PathBuf, ClikanError> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir()
        .map(|h| h.join(".clikan"))
        .ok_or_else(|| ClikanError::io("Cannot find home directory; set CLIKAN_HOME"))
}

pub fn config_path(home: &Path, name: &str) -> PathBuf {
    home.join(format!(".{name}.yaml"))
}

pub fn default_data_path(home: &Path, name: &str) -> PathBuf {
    home.join(format!(".{name}.dat"))
}

/// Name stored in the marker file; missing or blank means `default`.
pub fn current_project(home: &Path) -> String {
    fs::read_to_string(home.join(MARKER))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_PROJECT.to_string())
}

pub fn set_current(home: &Path, name: &str) -> Result<(), ClikanError> {
    validate_name(name)?;
    fs::create_dir_all(home)?;
    fs::write(home.join(MARKER), name)?;
    debug!(project = name, "current project set");
    Ok(())
}

pub fn exists(home: &Path, name: &str) -> bool {
    config_path(home, name).is_file()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setup {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Write a fresh config for `name`. An existing config is left alone unless
/// `force` is set.
pub fn setup_project(home: &Path, name: &str, force: bool) -> Result<Setup, ClikanError> {
    validate_name(name)?;
    let path = config_path(home, name);
    if path.exists() && !force {
        return Ok(Setup::AlreadyExists(path));
    }
    let cfg = ProjectConfig::new(default_data_path(home, name));
    config::write(&path, &cfg)?;
    info!(project = name, path = %path.display(), "project config written");
    Ok(Setup::Created(path))
}

/// All configured project names, sorted.
pub fn list_projects(home: &Path) -> Result<Vec<String>, ClikanError> {
    let entries = match fs::read_dir(home) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut names = Vec::new();
    for entry in entries {
        let file_name = entry?.file_name();
        let file_name = file_name.to_string_lossy();
        if let Some(name) = file_name
            .strip_prefix('.')
            .and_then(|rest| rest.strip_suffix(".yaml"))
        {
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Remove a project's config and data file. The `default` project cannot be
/// removed. If the removed project was current, `default` becomes current.
pub fn delete_project(home: &Path, name: &str) -> Result<(), ClikanError> {
    if name == DEFAULT_PROJECT {
        return Err(ClikanError::validation("Can't delete default project."));
    }
    let cfg_path = config_path(home, name);
    if !cfg_path.is_file() {
        return Err(ClikanError::project_not_found(name));
    }
    let data_path = match config::read(&cfg_path) {
        Ok(Some(cfg)) => cfg.data_path(home),
        _ => default_data_path(home, name),
    };
    fs::remove_file(&cfg_path)?;
    match fs::remove_file(&data_path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    if current_project(home) == name {
        set_current(home, DEFAULT_PROJECT)?;
    }
    info!(project = name, "project deleted");
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ClikanError> {
    let ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(ClikanError::validation(format!(
            "Invalid project name '{name}': use letters, digits, '-' or '_'"
        )))
    }
}

/// Everything a command needs to know about the project it acts on,
/// resolved once per invocation.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub name: String,
    pub home: PathBuf,
    pub config: ProjectConfig,
}

impl ProjectContext {
    pub fn resolve(home: &Path, name: &str) -> Result<Self, ClikanError> {
        let path = config_path(home, name);
        let config = config::read(&path)?.ok_or_else(|| ClikanError::not_configured(name))?;
        debug!(project = name, config = %path.display(), "resolved project");
        Ok(Self {
            name: name.to_string(),
            home: home.to_path_buf(),
            config,
        })
    }

    pub fn current(home: &Path) -> Result<Self, ClikanError> {
        Self::resolve(home, &current_project(home))
    }

    pub fn data_path(&self) -> PathBuf {
        self.config.data_path(&self.home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_current_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(current_project(dir.path()), "default");
        fs::write(dir.path().join(".current"), "  \n").unwrap();
        assert_eq!(current_project(dir.path()), "default");
        set_current(dir.path(), "work").unwrap();
        assert_eq!(current_project(dir.path()), "work");
    }

    #[test]
    fn test_setup_and_resolve() {
        let dir = TempDir::new().unwrap();
        let home = dir.path();
        assert!(matches!(setup_project(home, "default", false).unwrap(), Setup::Created(_)));
        assert!(matches!(
            setup_project(home, "default", false).unwrap(),
            Setup::AlreadyExists(_)
        ));
        let ctx = ProjectContext::current(home).unwrap();
        assert_eq!(ctx.name, "default");
        assert_eq!(ctx.data_path(), home.join(".default.dat"));
    }

    #[test]
    fn test_unconfigured_project() {
        let dir = TempDir::new().unwrap();
        let err = ProjectContext::current(dir.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotConfigured);
    }

    #[test]
    fn test_list_projects() {
        let dir = TempDir::new().unwrap();
        let home = dir.path();
        setup_project(home, "work", false).unwrap();
        setup_project(home, "default", false).unwrap();
        fs::write(home.join(".default.dat"), "data: {}\ndeleted: {}\n").unwrap();
        set_current(home, "work").unwrap();
        assert_eq!(list_projects(home).unwrap(), vec!["default", "work"]);
    }

    #[test]
    fn test_delete_project() {
        let dir = TempDir::new().unwrap();
        let home = dir.path();
        setup_project(home, "work", false).unwrap();
        fs::write(home.join(".work.dat"), "data: {}\ndeleted: {}\n").unwrap();
        set_current(home, "work").unwrap();

        delete_project(home, "work").unwrap();
        assert!(!home.join(".work.yaml").exists());
        assert!(!home.join(".work.dat").exists());
        assert_eq!(current_project(home), "default");

        assert_eq!(
            delete_project(home, "work").unwrap_err().code,
            ErrorCode::ProjectNotFound
        );
        assert_eq!(
            delete_project(home, "default").unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_rejects_path_like_names() {
        let dir = TempDir::new().unwrap();
        assert!(setup_project(dir.path(), "../evil", false).is_err());
        assert!(set_current(dir.path(), "").is_err());
    }
}
