//! Uniform random choice over pick candidates.

use rand::seq::IndexedRandom;

/// Choose one element uniformly at random, or `None` for an empty slice.
///
/// The thread-local RNG is created and dropped inside this call so the
/// caller's future stays `Send` across later `.await` points.
pub(crate) fn draw_one<T>(candidates: &[T]) -> Option<&T> {
    let mut rng = rand::rng();
    candidates.choose(&mut rng)
}
