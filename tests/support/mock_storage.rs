use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use vi_cjk::{EditorError, Result, Storage};

/// In-memory files. `read_only` fails every save, `unreadable` every load.
#[derive(Default, Debug, Clone)]
pub struct MemStorage {
    pub files: HashMap<PathBuf, Vec<String>>,
    pub read_only: bool,
    pub unreadable: bool,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(path: &str, lines: &[&str]) -> Self {
        let mut storage = Self::new();
        storage.files.insert(
            PathBuf::from(path),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        storage
    }

    pub fn file(&self, path: &str) -> Option<&[String]> {
        self.files.get(Path::new(path)).map(Vec::as_slice)
    }
}

fn denied(path: &Path) -> EditorError {
    EditorError::FileAccess {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    }
}

impl Storage for MemStorage {
    fn load(&self, path: &Path) -> Result<Option<Vec<String>>> {
        if self.unreadable {
            return Err(denied(path));
        }
        Ok(self.files.get(path).cloned())
    }

    fn save(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        if self.read_only {
            return Err(denied(path));
        }
        self.files.insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }
}
