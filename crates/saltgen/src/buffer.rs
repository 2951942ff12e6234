//! Growable byte buffer with explicit allocation failure reporting.

use alloc::vec::Vec;

use crate::error::RenderError;

/// First allocation size; growth doubles from there.
const INITIAL_CAPACITY: usize = 64;

/// Append-only byte sequence backing both the candidate range and the
/// rendered output.
///
/// `clear` keeps capacity, so one buffer can be reused across the bracketed
/// constructs of a single render.
#[derive(Debug, Default)]
pub(crate) struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    pub(crate) fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Appends one byte, reporting growth failure instead of aborting.
    pub(crate) fn push(&mut self, byte: u8) -> Result<(), RenderError> {
        if self.bytes.len() == self.bytes.capacity() {
            let grow = if self.bytes.capacity() == 0 {
                INITIAL_CAPACITY
            } else {
                self.bytes.capacity()
            };
            self.bytes
                .try_reserve_exact(grow)
                .map_err(|_| RenderError::OutOfMemory)?;
        }
        self.bytes.push(byte);
        Ok(())
    }

    /// Resets the logical length without releasing capacity.
    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Releases the accumulated bytes.
    pub(crate) fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}
