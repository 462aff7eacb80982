//! JSON-file backed catalog
//!
//! Loads a [`CatalogSnapshot`] from disk and writes every successful edit
//! back. Writes go through a temp file in the same directory and are
//! renamed into place while holding an exclusive lock on `<path>.lock`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::catalog::{Artist, ChildKind, Entity, Track};
use crate::domain::ports::{CatalogSource, MutationSource};
use crate::error::{CatalogError, CatalogResult};

use super::memory::{CatalogSnapshot, Edit, MemoryCatalog};

pub struct FileCatalog {
    path: PathBuf,
    inner: MemoryCatalog,
}

impl FileCatalog {
    /// Load a catalog snapshot from `path`
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        let snapshot: CatalogSnapshot =
            serde_json::from_str(&content).map_err(|e| CatalogError::Corrupted {
                path: path.clone(),
                message: e.to_string(),
            })?;
        Ok(Self {
            path,
            inner: MemoryCatalog::new(snapshot),
        })
    }

    /// Write `snapshot` to `path` and return a catalog serving it
    pub fn create(path: impl Into<PathBuf>, snapshot: CatalogSnapshot) -> CatalogResult<Self> {
        let path = path.into();
        persist(&path, &snapshot)?;
        Ok(Self {
            path,
            inner: MemoryCatalog::new(snapshot),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved library tracks, used to seed the library snapshot
    pub fn saved_tracks(&self) -> Vec<Track> {
        self.inner.saved_tracks()
    }

    fn edit(&self, edit: Edit<'_>) -> CatalogResult<()> {
        self.inner.edit_with(edit, |next| persist(&self.path, next))
    }
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

fn persist(path: &Path, snapshot: &CatalogSnapshot) -> CatalogResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let lock_file = fs::File::create(lock_path(path))?;
    lock_file.lock_exclusive()?;

    let result = write_atomic(&dir, path, snapshot);
    let _ = lock_file.unlock();
    result
}

fn write_atomic(dir: &Path, path: &Path, snapshot: &CatalogSnapshot) -> CatalogResult<()> {
    let content =
        serde_json::to_string_pretty(snapshot).map_err(|e| CatalogError::Corrupted {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| CatalogError::Io(e.error))?;
    Ok(())
}

impl CatalogSource for FileCatalog {
    fn list_followed_entities(&self) -> CatalogResult<Vec<Artist>> {
        self.inner.list_followed_entities()
    }

    fn list_child_entities(&self, parent_id: &str, kind: ChildKind) -> CatalogResult<Vec<Entity>> {
        self.inner.list_child_entities(parent_id, kind)
    }
}

impl MutationSource for FileCatalog {
    fn add_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()> {
        self.edit(Edit::Add {
            destination: destination_id,
            track: track_id,
        })
    }

    fn remove_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()> {
        self.edit(Edit::Remove {
            destination: destination_id,
            track: track_id,
        })
    }
}
