use tracing::debug;

use crate::error::{EditorError, Result};
use crate::key::is_control;

/// Longest UTF-8 encoding of a single codepoint.
const MAX_PENDING: usize = 4;

/// Bytes received so far for a character that is not complete yet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct PendingBytes {
    bytes: [u8; MAX_PENDING],
    len: usize,
}

impl PendingBytes {
    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    fn push(&mut self, unit: u8) {
        self.bytes[self.len] = unit;
        self.len += 1;
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

/// Turns raw input bytes into characters one byte at a time.
///
/// Multi-byte UTF-8 sequences are held back until their last continuation
/// byte arrives. Bytes must be fed in the order they were read.
#[derive(Debug, Default, Clone)]
pub struct CodepointDecoder {
    pending: PendingBytes,
}

impl CodepointDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw byte and returns the character it completes, if any.
    ///
    /// Control bytes never decode; they discard whatever is pending and
    /// are left for the caller to interpret. Malformed runs are dropped.
    pub fn feed(&mut self, unit: u8) -> Option<char> {
        if is_control(unit) {
            self.reset();
            return None;
        }
        self.pending.push(unit);
        match self.try_decode() {
            Ok(decoded) => decoded,
            Err(err) => {
                debug!(target: "decoder", %err, "dropping pending bytes");
                None
            }
        }
    }

    /// Discards any partially received character.
    pub fn reset(&mut self) {
        if self.has_pending() {
            debug!(target: "decoder", pending = ?self.pending.as_slice(), "abandoning sequence");
        }
        self.pending.clear();
    }

    pub fn has_pending(&self) -> bool {
        self.pending.len > 0
    }

    fn try_decode(&mut self) -> Result<Option<char>> {
        match std::str::from_utf8(self.pending.as_slice()) {
            Ok(s) => {
                let ch = s.chars().next();
                self.pending.clear();
                Ok(ch)
            }
            Err(e) if e.error_len().is_none() => Ok(None),
            Err(_) => {
                let bytes = self.pending.as_slice().to_vec();
                self.pending.clear();
                Err(EditorError::MalformedSequence(bytes))
            }
        }
    }
}
