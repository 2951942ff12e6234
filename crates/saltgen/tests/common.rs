//! Helpers shared by the integration suites.
#![allow(missing_docs)]
#![allow(dead_code)]

use saltgen::Selector;

/// Cycles 0, 1, .., n-1, 0, .. so every draw is predictable.
pub struct Cycle {
    next: usize,
}

impl Cycle {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl Selector for Cycle {
    fn pick(&mut self, n: usize) -> usize {
        if self.next >= n {
            self.next = 0;
        }
        let index = self.next;
        self.next += 1;
        index
    }
}

/// True for bytes in the `[A-Za-z0-9./]` salt alphabet.
pub fn in_salt_alphabet(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'.' || byte == b'/'
}
