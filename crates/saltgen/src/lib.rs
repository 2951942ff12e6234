//! Salt template rendering for password hashing schemes.
//!
//! A small mini language describes how a salt string is built: literal bytes
//! pass through untouched, a `[a-z0-9]` style set collects candidate bytes
//! (one level of grouping, with inclusive `first-last` ranges), and a `{n}`
//! suffix draws that many set members. A missing count draws one member and
//! an explicit empty `{}` draws none. Backslash escapes strip a byte of its
//! structural meaning, and `\nnn` octal escapes reach bytes outside printable
//! ASCII.
//!
//! The crate only interprets templates. The randomness behind each draw comes
//! from a caller supplied [`Selector`] (any `FnMut(usize) -> usize` closure
//! works), or from the built-in `DefaultSelector` when the `rand` feature is
//! enabled.
//!
//! ```
//! use saltgen::render;
//!
//! // A counting selector makes the draw deterministic for the example.
//! let mut next = 0usize;
//! let salt = render(b"$1$[A-Za-z0-9./]{8}", &mut |n: usize| {
//!     let pick = next % n;
//!     next += 1;
//!     pick
//! })
//! .unwrap();
//! assert_eq!(salt, b"$1$ABCDEFGH");
//! ```
//!
//! Rendering is all or nothing: the first malformed construct aborts the
//! render with a [`RenderError`] and nothing is returned.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod escape_buffer;
mod generator;
mod lexer;
mod options;
mod selector;
pub mod templates;

#[cfg(test)]
mod tests;

pub use error::RenderError;
#[cfg(feature = "rand")]
pub use generator::SaltGenerator;
pub use generator::render;
pub use options::{DEFAULT_TEMPLATE, GeneratorOptions};
#[cfg(feature = "rand")]
pub use selector::DefaultSelector;
pub use selector::Selector;
