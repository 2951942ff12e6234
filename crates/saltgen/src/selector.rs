//! Randomness injection for template rendering.

/// Picks one member of a candidate set.
///
/// `pick(n)` is called exactly once per emitted byte, with `n` the size of
/// the pending set (always at least 1), and must return an index in `0..n`.
/// An out-of-range index never draws anything; the render fails with
/// [`RenderError::SelectorOutOfRange`](crate::RenderError::SelectorOutOfRange)
/// instead.
///
/// Any `FnMut(usize) -> usize` closure is a selector, which keeps tests and
/// one-off callers free of wrapper types.
pub trait Selector {
    /// Returns an index in `0..n`.
    fn pick(&mut self, n: usize) -> usize;
}

impl<F> Selector for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, n: usize) -> usize {
        self(n)
    }
}

#[cfg(feature = "rand")]
pub use default::DefaultSelector;

#[cfg(feature = "rand")]
mod default {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::Selector;

    /// Fallback selector backed by a small, seedable PRNG.
    ///
    /// This is not a cryptographic source; it exists so a caller with no
    /// opinions still gets usable salts. Callers that care about salt
    /// quality should inject their own [`Selector`] drawing from a CSPRNG.
    #[derive(Debug, Clone)]
    pub struct DefaultSelector {
        rng: SmallRng,
    }

    impl DefaultSelector {
        /// Seeds from system entropy.
        #[must_use]
        pub fn new() -> Self {
            Self {
                rng: SmallRng::from_entropy(),
            }
        }

        /// Seeds deterministically, for reproducible renders.
        #[must_use]
        pub fn from_seed(seed: u64) -> Self {
            Self {
                rng: SmallRng::seed_from_u64(seed),
            }
        }
    }

    impl Default for DefaultSelector {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Selector for DefaultSelector {
        fn pick(&mut self, n: usize) -> usize {
            self.rng.gen_range(0..n)
        }
    }
}
