//! Growth and removal.
//!
//! Nothing in this module touches its input: each call builds and returns a
//! fresh vector. Insertion and removal indices are strict and are validated
//! before anything is allocated.
//!
//! Batch removal comes in two calling conventions that produce the same
//! result. [`remove_indices`] takes a list of positions (duplicates allowed,
//! any order) and [`remove_bits`] takes an [`IndexBitSet`]. Both copy the
//! surviving elements one run at a time, so the cost is linear in the array
//! length rather than in `length * removals`.

use super::index_bitset::IndexBitSet;
use super::search::{index_of, indexes_of, INDEX_NOT_FOUND};
use crate::error::{ArrayError, Result};

/// Returns a copy of `array` with `element` appended.
///
/// An absent array is treated as empty, so the result always has at least one
/// element. That holds even for `append(None, None)` over `Option<U>`: a slice
/// type already fixes the element type, so there is nothing to reject.
/// [`dynamic::append`](crate::dynamic::append) is where a missing array and a
/// null element together fail with [`ArrayError::BothAbsent`].
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::mutate::append;
///
/// assert_eq!(append(Some(&[1, 2][..]), 3), vec![1, 2, 3]);
/// assert_eq!(append(None, "only"), vec!["only"]);
/// ```
pub fn append<T: Clone>(array: Option<&[T]>, element: T) -> Vec<T> {
    let array = array.unwrap_or_default();
    let mut grown = Vec::with_capacity(array.len() + 1);
    grown.extend_from_slice(array);
    grown.push(element);
    grown
}

/// Returns a copy of `array` with `element` placed in front.
pub fn prepend<T: Clone>(array: Option<&[T]>, element: T) -> Vec<T> {
    let array = array.unwrap_or_default();
    let mut grown = Vec::with_capacity(array.len() + 1);
    grown.push(element);
    grown.extend_from_slice(array);
    grown
}

/// Returns a copy of `array` with `elements` spliced in at `index`.
///
/// An absent array yields an absent result even when there is something to
/// insert. With nothing to insert the result is a plain copy of `array`.
///
/// # Errors
///
/// Returns [`ArrayError::IndexOutOfRange`] unless `0 <= index <= array.len()`.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::mutate::insert_at;
///
/// let grown = insert_at(Some(&[1, 2, 3][..]), 1, &[9, 9]).unwrap();
/// assert_eq!(grown, Some(vec![1, 9, 9, 2, 3]));
/// ```
pub fn insert_at<T: Clone>(array: Option<&[T]>, index: isize, elements: &[T]) -> Result<Option<Vec<T>>> {
    let Some(array) = array else {
        return Ok(None);
    };
    if elements.is_empty() {
        return Ok(Some(array.to_vec()));
    }
    let index = usize::try_from(index)
        .ok()
        .filter(|&index| index <= array.len())
        .ok_or_else(|| ArrayError::index_out_of_range(index, array.len()))?;

    let mut grown = Vec::with_capacity(array.len() + elements.len());
    grown.extend_from_slice(&array[..index]);
    grown.extend_from_slice(elements);
    grown.extend_from_slice(&array[index..]);
    Ok(Some(grown))
}

/// Returns a copy of `array` without the element at `index`.
///
/// # Errors
///
/// Returns [`ArrayError::IndexOutOfRange`] unless `0 <= index < array.len()`.
/// An absent array has length `0`, so every index fails.
pub fn remove_at<T: Clone>(array: Option<&[T]>, index: isize) -> Result<Vec<T>> {
    let array = array.unwrap_or_default();
    let index = checked_index(index, array.len())?;
    Ok(without(array, index))
}

/// Returns a copy of `array` without the elements at `indices`.
///
/// Repeated indices remove a single element. An absent array yields an absent
/// result.
///
/// # Errors
///
/// Returns [`ArrayError::IndexOutOfRange`] if any index is outside
/// `0..array.len()`.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::mutate::remove_indices;
///
/// let data = [10, 20, 30, 40, 50];
/// let kept = remove_indices(Some(&data[..]), &[3, 1, 3]).unwrap();
/// assert_eq!(kept, Some(vec![10, 30, 50]));
/// ```
pub fn remove_indices<T: Clone>(array: Option<&[T]>, indices: &[isize]) -> Result<Option<Vec<T>>> {
    let Some(array) = array else {
        return Ok(None);
    };
    let mut sorted = indices
        .iter()
        .map(|&index| checked_index(index, array.len()))
        .collect::<Result<Vec<_>>>()?;
    sorted.sort_unstable();
    sorted.dedup();

    let mut kept = Vec::with_capacity(array.len() - sorted.len());
    let mut run_start = 0;
    for index in sorted {
        if index > run_start {
            tracing::trace!(run_start, run_end = index, "copy retained run");
            kept.extend_from_slice(&array[run_start..index]);
        }
        run_start = index + 1;
    }
    kept.extend_from_slice(&array[run_start..]);
    Ok(Some(kept))
}

/// Returns a copy of `array` without the positions set in `removed`.
///
/// An absent array yields an absent result.
///
/// # Errors
///
/// Returns [`ArrayError::IndexOutOfRange`] if a bit at or past `array.len()`
/// is set.
pub fn remove_bits<T: Clone>(array: Option<&[T]>, removed: &IndexBitSet) -> Result<Option<Vec<T>>> {
    let Some(array) = array else {
        return Ok(None);
    };
    let span = removed.span();
    if span > array.len() {
        return Err(ArrayError::index_out_of_range(span as isize - 1, array.len()));
    }
    Ok(Some(remove_runs(array, removed)))
}

/// Removes the first element equal to `value`, or copies `array` unchanged
/// when there is none.
pub fn remove_value<T: Clone + PartialEq>(array: Option<&[T]>, value: &T) -> Option<Vec<T>> {
    let array = array?;
    match index_of(Some(array), value, 0) {
        INDEX_NOT_FOUND => Some(array.to_vec()),
        index => Some(without(array, index as usize)),
    }
}

/// Removes every element equal to `value`.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::mutate::remove_all_occurrences;
///
/// let data = ["a", "b", "a", "c", "a"];
/// assert_eq!(remove_all_occurrences(Some(&data[..]), &"a"), Some(vec!["b", "c"]));
/// ```
pub fn remove_all_occurrences<T: Clone + PartialEq>(array: Option<&[T]>, value: &T) -> Option<Vec<T>> {
    let array = array?;
    let matches = indexes_of(Some(array), value, 0);
    Some(remove_runs(array, &matches))
}

fn checked_index(index: isize, length: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&index| index < length)
        .ok_or_else(|| ArrayError::index_out_of_range(index, length))
}

/// `index` must be below `array.len()`.
pub(crate) fn without<T: Clone>(array: &[T], index: usize) -> Vec<T> {
    let mut kept = Vec::with_capacity(array.len() - 1);
    kept.extend_from_slice(&array[..index]);
    kept.extend_from_slice(&array[index + 1..]);
    kept
}

/// Copies the clear runs of `removed`; every set bit must be below `array.len()`.
pub(crate) fn remove_runs<T: Clone>(array: &[T], removed: &IndexBitSet) -> Vec<T> {
    let mut kept = Vec::with_capacity(array.len().saturating_sub(removed.count()));
    let mut source = 0;
    while let Some(set) = removed.next_set_bit(source) {
        if set > source {
            tracing::trace!(run_start = source, run_end = set, "copy retained run");
            kept.extend_from_slice(&array[source..set]);
        }
        source = removed.next_clear_bit(set);
    }
    kept.extend_from_slice(&array[source..]);
    kept
}
