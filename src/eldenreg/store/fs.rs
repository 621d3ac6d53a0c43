use super::KeyValueStore;
use crate::error::{RegistryError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed key-value store. Each key maps to `<root>/<key>.json`.
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`. Keys that would need escaping are
    /// rejected rather than rewritten, so two keys never map to one file.
    pub fn item_path(&self, key: &str) -> Result<PathBuf> {
        super::check_key(key).map_err(RegistryError::Store)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RegistryError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RegistryError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        self.ensure_dir()?;

        let tmp_file = self.root.join(format!(".item-{}.tmp", Uuid::new_v4()));
        let written = fs::write(&tmp_file, value).and_then(|_| fs::rename(&tmp_file, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(RegistryError::Io(e));
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(RegistryError::Io)?;
        }
        Ok(())
    }
}
