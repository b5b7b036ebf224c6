use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ClikanError;

/// Per-project settings from `.<project>.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Location of the project's data file. Relative paths are taken from
    /// the clikan home directory.
    pub clikan_data: PathBuf,

    #[serde(default, skip_serializing_if = "Limits::is_unset")]
    pub limits: Limits,

    /// Redraw the board after every mutating command.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub repaint: bool,
}

impl ProjectConfig {
    pub fn new(clikan_data: impl Into<PathBuf>) -> Self {
        Self {
            clikan_data: clikan_data.into(),
            limits: Limits::default(),
            repaint: false,
        }
    }

    pub fn data_path(&self, home: &Path) -> PathBuf {
        if self.clikan_data.is_absolute() {
            self.clikan_data.clone()
        } else {
            home.join(&self.clikan_data)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taskname: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wip: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<usize>,
}

impl Limits {
    pub const DEFAULT_TASKNAME: usize = 40;
    pub const DEFAULT_DONE: usize = 10;

    /// Longest accepted task label, in characters.
    pub fn taskname(&self) -> usize {
        self.taskname.unwrap_or(Self::DEFAULT_TASKNAME)
    }

    /// How many done entries the board view shows.
    pub fn done(&self) -> usize {
        self.done.unwrap_or(Self::DEFAULT_DONE)
    }

    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Read a project config. `Ok(None)` when the file does not exist.
pub fn read(path: &Path) -> Result<Option<ProjectConfig>, ClikanError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ClikanError::corrupt_config(path, e)),
    };
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|e| ClikanError::corrupt_config(path, e))
}

pub fn write(path: &Path, config: &ProjectConfig) -> Result<(), ClikanError> {
    let yaml = serde_yaml::to_string(config)
        .map_err(|e| ClikanError::io(format!("Failed to encode config: {e}")))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, yaml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_minimal_config_defaults() {
        let cfg: ProjectConfig = serde_yaml::from_str("clikan_data: /tmp/.default.dat\n").unwrap();
        assert_eq!(cfg.limits.taskname(), 40);
        assert_eq!(cfg.limits.done(), 10);
        assert_eq!(cfg.limits.todo, None);
        assert_eq!(cfg.limits.wip, None);
        assert!(!cfg.repaint);
    }

    #[test]
    fn test_full_config() {
        let yaml = "clikan_data: data.dat\nlimits:\n  taskname: 20\n  todo: 5\n  wip: 2\n  done: 3\nrepaint: true\n";
        let cfg: ProjectConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.limits.taskname(), 20);
        assert_eq!(cfg.limits.todo, Some(5));
        assert_eq!(cfg.limits.wip, Some(2));
        assert_eq!(cfg.limits.done(), 3);
        assert!(cfg.repaint);
        assert_eq!(
            cfg.data_path(Path::new("/home/me/.clikan")),
            PathBuf::from("/home/me/.clikan/data.dat")
        );
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".work.yaml");
        let cfg = ProjectConfig::new(dir.path().join(".work.dat"));
        write(&path, &cfg).unwrap();
        assert_eq!(read(&path).unwrap(), Some(cfg));
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("limits"));
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read(&dir.path().join(".nope.yaml")).unwrap(), None);
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".bad.yaml");
        fs::write(&path, "limits: [1, 2\n").unwrap();
        assert_eq!(read(&path).unwrap_err().code, ErrorCode::CorruptConfig);
        fs::write(&path, "repaint: true\n").unwrap();
        assert_eq!(read(&path).unwrap_err().code, ErrorCode::CorruptConfig);
    }
}
