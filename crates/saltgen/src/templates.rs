//! Ready-made templates for common password hashing salt formats.
//!
//! Each constant renders to the salt string a scheme expects. Prefix
//! literals like `$1$` are part of the template and pass through verbatim;
//! only the bracketed sets are randomized.

/// Traditional DES: two characters of `[A-Za-z0-9./]`.
pub const DES: &[u8] = b"[A-Za-z0-9./]{2}";

/// BSDI extended DES: `_`, then eight characters covering the encoded
/// iteration count and the salt itself.
pub const BSDI: &[u8] = b"_[A-Za-z0-9./]{8}";

/// MD5 crypt: the `$1$` prefix and eight salt characters.
pub const MD5_CRYPT: &[u8] = b"$1$[A-Za-z0-9./]{8}";
