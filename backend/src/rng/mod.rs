//! Deterministic random number generation
//!
//! Random tier selection (`random` car class, `random` attraction price)
//! draws from a [`RandomSource`]. The default source is a seeded xorshift64*
//! generator so that repeated calculations with the same seed agree.

mod xorshift;

pub use xorshift::RngManager;

/// Source of uniform choices for `random` tiers
///
/// Implement this to script the picks in tests.
pub trait RandomSource {
    /// Return an index in `[0, len)`. `len` is always positive.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl RandomSource for RngManager {
    fn pick_index(&mut self, len: usize) -> usize {
        self.range(0, len as i64) as usize
    }
}

/// Pick one element of a non-empty slice uniformly
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    debug_assert!(!items.is_empty(), "cannot choose from an empty slice");
    let index = rng.pick_index(items.len());
    &items[index.min(items.len() - 1)]
}
