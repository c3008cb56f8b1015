use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use topboard_core::ScoreEntry;
use tracing::{debug, warn};

use crate::error::{PersistError, PersistResult};
use crate::traits::SnapshotStore;

/// Snapshot stored as a pretty-printed JSON array in a single file.
///
/// Saves write a sibling temp file, fsync it and rename it over the target,
/// so a crash mid-write leaves the previous snapshot intact.
///
/// Loading requires the file to be a JSON array. Elements that are not valid
/// score entries are logged and skipped.
#[derive(Clone, Debug)]
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl SnapshotStore for JsonFileSnapshot {
    fn load(&self) -> PersistResult<Option<Vec<ScoreEntry>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot on disk");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let raw: Vec<serde_json::Value> =
            serde_json::from_slice(&bytes).map_err(|source| PersistError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        // A bad element is skipped on its own; the rest of the array survives.
        let total = raw.len();
        let entries: Vec<ScoreEntry> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        index,
                        error = %e,
                        "skipping malformed snapshot entry"
                    );
                    None
                }
            })
            .collect();
        debug!(
            path = %self.path.display(),
            count = entries.len(),
            skipped = total - entries.len(),
            "snapshot loaded"
        );
        Ok(Some(entries))
    }

    fn save(&self, entries: &[ScoreEntry]) -> PersistResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, entries)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!(path = %self.path.display(), count = entries.len(), "snapshot saved");
        Ok(())
    }
}
