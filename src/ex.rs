use std::str::FromStr;

use crate::error::EditorError;

/// A colon command typed at the ex prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExCommand {
    /// `:w`
    Write,
    /// `:q`
    Quit,
    /// `:wq`
    WriteQuit,
}

impl FromStr for ExCommand {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "w" => Ok(ExCommand::Write),
            "q" => Ok(ExCommand::Quit),
            "wq" => Ok(ExCommand::WriteQuit),
            other => Err(EditorError::UnknownCommand(other.to_owned())),
        }
    }
}

impl ExCommand {
    pub fn writes(self) -> bool {
        matches!(self, ExCommand::Write | ExCommand::WriteQuit)
    }

    pub fn quits(self) -> bool {
        matches!(self, ExCommand::Quit | ExCommand::WriteQuit)
    }
}
