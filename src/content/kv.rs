//! File-backed key-value store.
//!
//! One JSON document per key. Writes replace the whole document atomically
//! (unique temp file + rename), so a crash mid-write never leaves a
//! half-written collection behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open the store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the raw document for `key`, or `None` if it was never written.
    pub fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Overwrite the document for `key` in full.
    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let path = self.document_path(key);
        let temp_path = self.dir.join(format!("{}.tmp.{}", key, Uuid::new_v4()));
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}
