use thiserror::Error;

/// Reasons a template can fail to render.
///
/// The `Display` strings double as the diagnostic messages exposed through
/// `SaltGenerator::message`, so they are part of the crate's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A `[` was never closed; the input ended inside a character set.
    #[error("expected literal or ']'")]
    UnterminatedGenerator,
    /// A range `-` with no right endpoint before `]` or the end of input.
    #[error("expected end of range")]
    UnterminatedRange,
    /// Range endpoints out of order, as in `[z-a]`.
    #[error("backwards range")]
    BackwardsRange,
    /// Something other than an ASCII digit or `}` inside `{...}`.
    #[error("expected digit or '}}'")]
    BadCount,
    /// Buffer growth failed.
    #[error("out of memory")]
    OutOfMemory,
    /// The selector broke its contract and picked an index outside the set.
    #[error("selector returned {index} for a set of {len}")]
    SelectorOutOfRange {
        /// Index the selector produced.
        index: usize,
        /// Size of the candidate set it was asked to pick from.
        len: usize,
    },
    /// Internal invariant violation: a second token was pushed back before
    /// the first was consumed. Asserted in debug builds.
    #[error("too many tokens pushed back")]
    PushbackFull,
}
