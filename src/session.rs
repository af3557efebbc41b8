use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::buffer::LineBuffer;
use crate::engine::{Engine, EngineBuilder};
use crate::error::{EditorError, Result};
use crate::ex::ExCommand;
use crate::key::InputEvent;
use crate::traits::{LineSource, Storage};
use crate::types::Outcome;

/// An editing session on at most one file.
///
/// Wraps the [`Engine`] and answers its ex-command requests through a
/// [`LineSource`] and a [`Storage`]. File errors end up on the status line;
/// they never end the session.
pub struct Session<S: Storage> {
    engine: Engine,
    storage: S,
    path: Option<PathBuf>,
    message: Option<String>,
}

impl<S: Storage> Session<S> {
    /// Opens `path` if given. A missing file starts as one empty line; an
    /// unreadable one does too, with the error on the status line.
    pub fn open(storage: S, path: Option<PathBuf>) -> Self {
        let mut message = None;
        let buffer = match path.as_deref().map(|p| storage.load(p)) {
            Some(Ok(Some(lines))) => LineBuffer::from_lines(lines),
            Some(Ok(None)) | None => LineBuffer::new(),
            Some(Err(err)) => {
                warn!(target: "session", %err, "open failed");
                message = Some(err.to_string());
                LineBuffer::new()
            }
        };
        Self {
            engine: EngineBuilder::default().buffer(buffer).build(),
            storage,
            path,
            message,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Mode, file name and the last message, e.g. `-- INSERT -- notes.txt`.
    pub fn status_line(&self) -> String {
        let mut status = format!("-- {} --", self.engine.mode().label());
        if let Some(path) = &self.path {
            status.push(' ');
            status.push_str(&path.display().to_string());
        }
        if let Some(message) = &self.message {
            status.push_str("  ");
            status.push_str(message);
        }
        status
    }

    /// Handles one input event. Returns false once the session should end.
    pub fn feed<L: LineSource>(&mut self, input: InputEvent, prompt: &mut L) -> bool {
        match self.engine.handle_event(input) {
            Outcome::ExPrompt => match prompt.read_line() {
                Some(line) => self.execute(&line),
                None => true,
            },
            Outcome::Handled => {
                self.message = None;
                true
            }
            Outcome::Pending | Outcome::Ignored => true,
        }
    }

    /// Runs one ex-command line. Returns false if it ends the session.
    pub fn execute(&mut self, line: &str) -> bool {
        self.message = None;
        if line.trim().is_empty() {
            return true;
        }
        let cmd = match line.parse::<ExCommand>() {
            Ok(cmd) => cmd,
            Err(err) => {
                self.message = Some(err.to_string());
                return true;
            }
        };
        debug!(target: "session", ?cmd, "ex command");

        if cmd.writes() {
            match self.write() {
                Ok(written) => self.message = Some(written),
                Err(err) => {
                    warn!(target: "session", %err, "write failed");
                    self.message = Some(err.to_string());
                    return true;
                }
            }
        }
        if cmd.quits() {
            info!(target: "session", "quit");
            return false;
        }
        true
    }

    fn write(&mut self) -> Result<String> {
        let path = self.path.as_deref().ok_or(EditorError::NoFileName)?;
        let lines = self.engine.buffer().lines();
        self.storage.save(path, lines)?;
        Ok(format!("\"{}\" {}L written", path.display(), lines.len()))
    }
}
