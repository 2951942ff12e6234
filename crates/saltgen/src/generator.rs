//! Template interpreter for salt strings.
//!
//! Rendering is a single pass: the state machine below pulls tokens from the
//! lexer, collects candidate bytes for the open `[...]` construct into a
//! range buffer, and materializes the construct into the output only once
//! its closing `]` (and optional `{count}`) has been fully parsed. `]`, `-`,
//! `{` and `}` only mean anything in context, so stray ones at the top level
//! render as themselves.
//!
//! All mutable state lives in a [`RenderContext`] built fresh per call, so
//! independent renders never interfere and need no locking.

use alloc::vec::Vec;

use crate::buffer::ByteBuffer;
use crate::error::RenderError;
use crate::lexer::{Lexer, Token};
use crate::selector::Selector;

/// Where the state machine is between tokens.
///
/// Endpoints and counts ride along in the variants, which keeps every
/// (state, token) combination an explicit match arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Top level, copying literals through.
    Start,
    /// Between `[` and `]`, collecting set members.
    InGenerator,
    /// One endpoint read, deciding whether a `-` follows.
    SawFirst { first: u8 },
    /// Saw the `-` of a range, awaiting the right endpoint.
    SawThrough { first: u8 },
    /// Saw the `]`, deciding whether a `{count}` follows.
    SawGenerator,
    /// Inside `{...}`, accumulating decimal digits.
    InCount { count: usize },
    /// Count resolved, about to draw and return to the top level.
    SawCount { count: usize },
}

struct RenderContext<'a, S: ?Sized> {
    lexer: Lexer<'a>,
    range: ByteBuffer,
    salt: ByteBuffer,
    selector: &'a mut S,
}

impl<S: Selector + ?Sized> RenderContext<'_, S> {
    fn run(mut self) -> Result<Vec<u8>, RenderError> {
        let mut state = State::Start;
        loop {
            let tok = self.lexer.next_token();
            state = match state {
                State::Start => match tok.as_byte() {
                    None => return Ok(self.salt.into_vec()),
                    Some(_) if tok == Token::GenStart => {
                        self.range.clear();
                        State::InGenerator
                    }
                    Some(byte) => {
                        self.salt.push(byte)?;
                        State::Start
                    }
                },
                State::InGenerator => match tok.as_byte() {
                    None => return Err(RenderError::UnterminatedGenerator),
                    Some(_) if tok == Token::GenEnd => State::SawGenerator,
                    Some(first) => State::SawFirst { first },
                },
                State::SawFirst { first } => {
                    if tok == Token::Through {
                        State::SawThrough { first }
                    } else {
                        // Not a range after all; the endpoint stands alone.
                        self.lexer.push_back(tok)?;
                        self.range.push(first)?;
                        State::InGenerator
                    }
                }
                State::SawThrough { first } => match tok.as_byte() {
                    None => return Err(RenderError::UnterminatedRange),
                    Some(_) if tok == Token::GenEnd => {
                        return Err(RenderError::UnterminatedRange);
                    }
                    Some(last) if last < first => return Err(RenderError::BackwardsRange),
                    Some(last) => {
                        for byte in first..=last {
                            self.range.push(byte)?;
                        }
                        State::InGenerator
                    }
                },
                State::SawGenerator => {
                    if tok == Token::CountStart {
                        State::InCount { count: 0 }
                    } else {
                        self.lexer.push_back(tok)?;
                        State::SawCount { count: 1 }
                    }
                }
                State::InCount { count } => match tok {
                    Token::CountEnd => State::SawCount { count },
                    // The digit test is on the byte value, so octal-escaped
                    // digit bytes like `\061` accumulate too.
                    Token::Literal(digit) if digit.is_ascii_digit() => State::InCount {
                        count: count
                            .saturating_mul(10)
                            .saturating_add(usize::from(digit - b'0')),
                    },
                    _ => return Err(RenderError::BadCount),
                },
                State::SawCount { count } => {
                    self.lexer.push_back(tok)?;
                    self.draw(count)?;
                    State::Start
                }
            };
        }
    }

    /// Draws `count` members of the pending set into the salt. An empty set
    /// draws nothing no matter the count.
    fn draw(&mut self, count: usize) -> Result<(), RenderError> {
        if self.range.is_empty() {
            return Ok(());
        }
        let len = self.range.len();
        for _ in 0..count {
            let index = self.selector.pick(len);
            let byte = self
                .range
                .get(index)
                .ok_or(RenderError::SelectorOutOfRange { index, len })?;
            self.salt.push(byte)?;
        }
        Ok(())
    }
}

/// Renders `template` into a salt, drawing set members through `selector`.
///
/// The template is borrowed for the duration of the call and never mutated;
/// a NUL byte ends it early. The selector is invoked exactly once per
/// emitted set member, with the set size as its bound.
///
/// # Errors
///
/// Returns the first syntax or resource failure. Rendering is all or
/// nothing; no partial output survives an error.
pub fn render<S>(template: &[u8], selector: &mut S) -> Result<Vec<u8>, RenderError>
where
    S: Selector + ?Sized,
{
    RenderContext {
        lexer: Lexer::new(template),
        range: ByteBuffer::new(),
        salt: ByteBuffer::new(),
        selector,
    }
    .run()
}

#[cfg(feature = "rand")]
pub use facade::SaltGenerator;

#[cfg(feature = "rand")]
mod facade {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::render;
    use crate::options::GeneratorOptions;
    use crate::selector::{DefaultSelector, Selector};

    /// Stateful front end over [`render`].
    ///
    /// Carries a fallback template, a fallback randomness source, and the
    /// diagnostic from the most recent render, for embedders that want the
    /// optional-argument contract of classic salt generators: pass `None`
    /// where a default should apply, get `None` back on failure, and ask
    /// [`message`](SaltGenerator::message) what went wrong.
    #[derive(Debug)]
    pub struct SaltGenerator {
        options: GeneratorOptions,
        selector: DefaultSelector,
        message: String,
    }

    impl SaltGenerator {
        /// Creates a generator with default options and an entropy-seeded
        /// selector.
        #[must_use]
        pub fn new() -> Self {
            Self::with_options(GeneratorOptions::default())
        }

        /// Creates a generator with the given options.
        #[must_use]
        pub fn with_options(options: GeneratorOptions) -> Self {
            Self {
                options,
                selector: DefaultSelector::new(),
                message: String::new(),
            }
        }

        /// Renders `template`, or the configured default when `None`, using
        /// the built-in selector.
        pub fn generate(&mut self, template: Option<&[u8]>) -> Option<Vec<u8>> {
            let template = template.unwrap_or(&self.options.default_template);
            match render(template, &mut self.selector) {
                Ok(salt) => {
                    self.message.clear();
                    Some(salt)
                }
                Err(err) => {
                    self.message = err.to_string();
                    None
                }
            }
        }

        /// Renders with a caller supplied selector, still tracking the
        /// diagnostic message.
        pub fn generate_with<S>(
            &mut self,
            template: Option<&[u8]>,
            selector: &mut S,
        ) -> Option<Vec<u8>>
        where
            S: Selector + ?Sized,
        {
            let template = template.unwrap_or(&self.options.default_template);
            match render(template, selector) {
                Ok(salt) => {
                    self.message.clear();
                    Some(salt)
                }
                Err(err) => {
                    self.message = err.to_string();
                    None
                }
            }
        }

        /// Diagnostic from the most recent render; empty after a success.
        ///
        /// Overwritten by every render attempt, so read it before the next
        /// call.
        #[must_use]
        pub fn message(&self) -> &str {
            &self.message
        }
    }

    impl Default for SaltGenerator {
        fn default() -> Self {
            Self::new()
        }
    }
}
