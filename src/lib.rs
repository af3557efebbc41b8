pub mod buffer;
pub mod cursor;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod escape;
pub mod ex;
pub mod io;
pub mod key;
pub mod selection;
pub mod session;
pub mod traits;
pub mod types;
pub mod width;

pub use crate::buffer::LineBuffer;
pub use crate::cursor::Cursor;
pub use crate::decoder::CodepointDecoder;
pub use crate::engine::{Engine, EngineBuilder, EngineSnapshot};
pub use crate::error::{EditorError, Result};
pub use crate::escape::EscapeFilter;
pub use crate::ex::ExCommand;
pub use crate::io::FsStorage;
pub use crate::key::{InputEvent, KeyCode, KeyEvent, Modifiers};
pub use crate::selection::Selection;
pub use crate::session::Session;
pub use crate::traits::{LineSource, Storage};
pub use crate::types::{Mode, Outcome, Position, Range};
