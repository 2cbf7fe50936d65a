//! Random permutation of sequences.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Result, UnderbarError};

/// A source of uniformly distributed indices.
///
/// Every [`rand::Rng`] is a `RandomSource`. Implement it directly to drive
/// [`shuffle_with`] deterministically.
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Returns a shuffled copy of `array`, leaving `array` untouched.
///
/// Uses the thread-local generator.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::shuffle;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&original);
/// assert_eq!(original, vec![1, 2, 3, 4, 5]);
/// shuffled.sort();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(array: &[T]) -> Vec<T> {
    let mut copy = array.to_vec();
    copy.shuffle(&mut rand::rng());
    copy
}

/// Returns a copy of `array` shuffled with indices drawn from `source`.
///
/// Runs a Fisher–Yates pass from the back: position `i` is swapped with the
/// index `source` returns for bound `i + 1`.
///
/// # Errors
///
/// Returns [`UnderbarError::InvalidArgument`] if `source` returns an index
/// outside the requested bound.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::collection::shuffle_with;
///
/// let mut first = StdRng::seed_from_u64(7);
/// let mut second = StdRng::seed_from_u64(7);
/// let input = [1, 2, 3, 4, 5, 6];
/// assert_eq!(
///     shuffle_with(&input, &mut first).unwrap(),
///     shuffle_with(&input, &mut second).unwrap()
/// );
/// ```
pub fn shuffle_with<T, R>(array: &[T], source: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut copy = array.to_vec();
    for position in (1..copy.len()).rev() {
        let bound = position + 1;
        let chosen = source.index(bound);
        if chosen >= bound {
            return Err(UnderbarError::invalid_argument(
                "shuffle_with",
                format!("random source returned index {chosen} outside 0..{bound}"),
            ));
        }
        copy.swap(position, chosen);
    }
    Ok(copy)
}
