use super::backend::StorageBackend;
use crate::error::{NotezError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem key-value backend: every key is a `<key>.json` file under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn slot_filename(key: &str) -> String {
        format!("{}.json", key)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotezError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).map_err(NotezError::Io)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "read slot");
        Ok(Some(value))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.item_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        let written = fs::write(&tmp, value).and_then(|_| fs::rename(&tmp, &target));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(NotezError::Io(e));
        }

        tracing::debug!(path = %target.display(), bytes = value.len(), "wrote slot");
        Ok(())
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.root.join(Self::slot_filename(key))
    }
}
