//! Slot storage for the task sequence.
//!
//! The store is mirrored to a single named slot, `tasks.json`, inside the
//! resolved data directory. Reads that fail for any reason (missing file,
//! unreadable file, malformed JSON, wrong shape) fall back to a one-task
//! seed; writes are atomic and best-effort from the caller's perspective.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::{Task, TaskStore};

/// File name of the persistence slot inside the data directory.
pub const SLOT_FILE: &str = "tasks.json";

/// Per-user default data directory, when the platform provides one.
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "taskdash").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Resolve the data directory: `--dir` flag (or `TASKDASH_DIR`), then the
/// `store.dir` config entry, then the platform data directory.
pub fn resolve_data_dir(flag: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.store.dir {
        return Ok(dir.clone());
    }
    default_data_dir().ok_or(Error::NoDataDir)
}

/// Path of the slot file inside a data directory.
pub fn slot_path(dir: &Path) -> PathBuf {
    dir.join(SLOT_FILE)
}

/// Load the store from the slot, or seed it with a single default task.
///
/// Every failure mode degrades identically: the reason is logged and the
/// seed store is returned. Nothing here propagates an error to the caller.
pub fn load_or_seed(dir: &Path, seed_text: &str) -> TaskStore {
    let path = slot_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("slot {} not found, seeding store", path.display());
            return TaskStore::seed(seed_text);
        }
        Err(err) => {
            warn!("failed to read slot {}: {err}", path.display());
            return TaskStore::seed(seed_text);
        }
    };

    match serde_json::from_str::<Vec<Task>>(&content) {
        Ok(tasks) => TaskStore::from_tasks(tasks),
        Err(err) => {
            warn!("slot {} is malformed, seeding store: {err}", path.display());
            TaskStore::seed(seed_text)
        }
    }
}

/// Serialize the snapshot and write it to the slot, overwriting the
/// previous value.
pub fn save(dir: &Path, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    write_atomic(&slot_path(dir), json.as_bytes())
}

/// Fire-and-forget save. A failure never blocks or reverts the in-memory
/// mutation; the returned message lets a surface show a warning.
pub fn save_best_effort(dir: &Path, tasks: &[Task]) -> Option<String> {
    match save(dir, tasks) {
        Ok(()) => None,
        Err(err) => {
            warn!("failed to save slot in {}: {err}", dir.display());
            Some(format!("failed to save tasks: {err}"))
        }
    }
}

/// Write data atomically (write to temp, then rename), so a reader never
/// sees a partial slot.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}
