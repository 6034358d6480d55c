//! Sortedness checks and random permutation.

use core::cmp::Ordering;

use rand::Rng;

use crate::error::{ArrayError, Result};

/// A source of uniformly distributed indices.
///
/// Every [`rand::Rng`] is a `RandomSource`; implement it directly to replay a
/// fixed sequence of draws.
pub trait RandomSource {
    /// Returns a value in `0..bound`. `bound` is always at least `1`.
    fn next_int(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_int(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Returns `true` if the elements are in non-decreasing natural order.
///
/// # Errors
///
/// Returns [`ArrayError::AbsentArray`] if the array is absent.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::ordering::is_sorted;
///
/// assert_eq!(is_sorted(Some(&[1, 1, 2, 5][..])), Ok(true));
/// assert_eq!(is_sorted(Some(&["b", "a"][..])), Ok(false));
/// assert!(is_sorted::<i32>(None).is_err());
/// ```
pub fn is_sorted<T: Ord>(array: Option<&[T]>) -> Result<bool> {
    let array = array.ok_or(ArrayError::AbsentArray { type_error: false })?;
    is_sorted_by(Some(array), Some(T::cmp))
}

/// Returns `true` if no adjacent pair is reported as `Greater` by `comparator`.
///
/// Arrays with fewer than two elements, including absent ones, are sorted.
///
/// # Errors
///
/// Returns [`ArrayError::MissingComparator`] if `comparator` is `None`.
pub fn is_sorted_by<T, F>(array: Option<&[T]>, comparator: Option<F>) -> Result<bool>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparator = comparator.ok_or(ArrayError::MissingComparator)?;
    Ok(array
        .unwrap_or_default()
        .windows(2)
        .all(|pair| comparator(&pair[0], &pair[1]) != Ordering::Greater))
}

/// Shuffles the array in place with the Fisher–Yates algorithm.
///
/// Draws exactly `len - 1` values from `random` (none for arrays shorter than
/// two elements), so a replayed source reproduces the same permutation.
///
/// # Examples
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use saturn_arrays::generic::ordering::shuffle;
///
/// let mut data = [1, 2, 3, 4, 5];
/// shuffle(Some(&mut data[..]), &mut StdRng::seed_from_u64(7));
///
/// let mut sorted = data;
/// sorted.sort();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: RandomSource + ?Sized>(array: Option<&mut [T]>, random: &mut R) {
    let Some(array) = array else {
        return;
    };
    for i in (2..=array.len()).rev() {
        let j = random.next_int(i);
        tracing::trace!(slot = i - 1, with = j, "shuffle draw");
        array.swap(i - 1, j);
    }
}

/// Shuffles with the thread-local generator.
pub fn shuffle_with_thread_rng<T>(array: Option<&mut [T]>) {
    shuffle(array, &mut rand::thread_rng());
}
