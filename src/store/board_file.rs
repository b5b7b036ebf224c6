//! Whole-file YAML persistence for a [`Board`].
//!
//! Every command reads the entire file, mutates it in memory and writes the
//! entire file back. There is no locking: two processes writing the same
//! project concurrently will lose one of the writes.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::ClikanError;
use crate::models::Board;

/// Read the board at `path`. A missing file is not an error: an empty board
/// is written in its place and returned.
pub fn load(path: &Path) -> Result<Board, ClikanError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no data, initializing data file");
            let board = Board::default();
            save(path, &board)?;
            return Ok(board);
        }
        Err(e) => return Err(e.into()),
    };
    let board = decode(path, &content)?;
    debug!(
        path = %path.display(),
        active = board.data.len(),
        deleted = board.deleted.len(),
        "loaded board"
    );
    Ok(board)
}

/// Replace the file at `path` with the full board. The new content is written
/// to a sibling temp file and renamed into place.
pub fn save(path: &Path, board: &Board) -> Result<(), ClikanError> {
    let yaml = serde_yaml::to_string(board)
        .map_err(|e| ClikanError::io(format!("Failed to encode board: {e}")))?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(yaml.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ClikanError::from(e.error))?;

    debug!(
        path = %path.display(),
        active = board.data.len(),
        deleted = board.deleted.len(),
        "saved board"
    );
    Ok(())
}

fn decode(path: &Path, content: &str) -> Result<Board, ClikanError> {
    let board: Board =
        serde_yaml::from_str(content).map_err(|e| ClikanError::corrupt_store(path, e))?;
    if board.data.contains_key(&0) || board.deleted.contains_key(&0) {
        return Err(ClikanError::corrupt_store(path, "task ids must be positive"));
    }
    Ok(board)
}
