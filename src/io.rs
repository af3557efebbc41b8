use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{EditorError, Result};
use crate::traits::Storage;

/// [`Storage`] over the local filesystem, UTF-8 text only.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn load(&self, path: &Path) -> Result<Option<Vec<String>>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(EditorError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let lines: Vec<String> = content
            .lines()
            .map(|line| line.trim_end_matches(['\r', '\n']).to_owned())
            .collect();
        debug!(target: "io", path = %path.display(), lines = lines.len(), "loaded");
        Ok(Some(lines))
    }

    fn save(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(path, content).map_err(|source| EditorError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(target: "io", path = %path.display(), lines = lines.len(), "saved");
        Ok(())
    }
}
