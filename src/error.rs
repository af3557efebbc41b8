use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Position;

/// Errors raised by the editing core and its file collaborator.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A position outside the buffer. The engine never produces one; seeing
    /// this from a buffer call means an invariant was broken.
    #[error("position {0} is outside the buffer")]
    OutOfRange(Position),

    /// Pending bytes that can never form a character.
    #[error("malformed character sequence {0:02x?}")]
    MalformedSequence(Vec<u8>),

    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no file name")]
    NoFileName,

    #[error("not an editor command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;
