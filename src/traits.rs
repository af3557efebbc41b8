use std::path::Path;

use crate::error::Result;

/// Where buffers are loaded from and saved to.
pub trait Storage {
    /// Lines of the file at `path` without their line terminators, or `None`
    /// if no such file exists yet.
    fn load(&self, path: &Path) -> Result<Option<Vec<String>>>;

    /// Writes `lines`, each followed by a newline.
    fn save(&mut self, path: &Path, lines: &[String]) -> Result<()>;
}

/// Reads one line of ex-command text from the user, e.g. the `wq` after ':'.
pub trait LineSource {
    /// The completed line, or `None` if the user cancelled the prompt.
    fn read_line(&mut self) -> Option<String>;
}
