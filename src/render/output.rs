//! `OutputBuffer`: append buffer for one frame of escape sequences and text.

use std::io::{self, Write};

/// Typical frame size for an 80x24 terminal with colors.
const DEFAULT_CAPACITY: usize = 4096;

/// Growable byte buffer the compositor queues terminal commands into.
///
/// Implements [`Write`] so crossterm's `queue!` can target it directly; nothing reaches the
/// terminal until the finished buffer is flushed in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append raw bytes, such as row text, without interpretation.
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
