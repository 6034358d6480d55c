//! Forward and backward linear search.
//!
//! Element equality is plain [`PartialEq`]. For arrays of `Option<U>` this is
//! exactly the null-aware rule: an absent target only matches absent slots.
//!
//! The two directions clamp differently on purpose. [`index_of`] moves a
//! negative start up to `0`, while [`last_index_of`] treats a negative start
//! as "nothing to search" and returns [`INDEX_NOT_FOUND`].

use super::index_bitset::IndexBitSet;

/// Returned by the search functions when no element matches.
pub const INDEX_NOT_FOUND: isize = -1;

/// Returns the index of the first element equal to `target` at or after `from`.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::search::{index_of, INDEX_NOT_FOUND};
///
/// let data = ["a", "b", "c", "b"];
/// assert_eq!(index_of(Some(&data[..]), &"b", 0), 1);
/// assert_eq!(index_of(Some(&data[..]), &"b", 2), 3);
/// assert_eq!(index_of(Some(&data[..]), &"z", -4), INDEX_NOT_FOUND);
/// ```
pub fn index_of<T: PartialEq>(array: Option<&[T]>, target: &T, from: isize) -> isize {
    index_where(array, from, |element| element == target)
}

/// Returns the index of the last element equal to `target` at or before `from`.
///
/// A `from` past the end is clamped to the last index.
pub fn last_index_of<T: PartialEq>(array: Option<&[T]>, target: &T, from: isize) -> isize {
    last_index_where(array, from, |element| element == target)
}

pub fn contains<T: PartialEq>(array: Option<&[T]>, target: &T) -> bool {
    index_of(array, target, 0) != INDEX_NOT_FOUND
}

/// Collects the index of every element equal to `target` at or after `from`.
pub fn indexes_of<T: PartialEq>(array: Option<&[T]>, target: &T, from: isize) -> IndexBitSet {
    indexes_where(array, from, |element| element == target)
}

pub(crate) fn index_where<T>(
    array: Option<&[T]>,
    from: isize,
    mut matches: impl FnMut(&T) -> bool,
) -> isize {
    let Some(array) = array else {
        return INDEX_NOT_FOUND;
    };
    let from = from.max(0) as usize;
    array
        .get(from..)
        .and_then(|tail| tail.iter().position(|element| matches(element)))
        .map_or(INDEX_NOT_FOUND, |offset| (from + offset) as isize)
}

pub(crate) fn last_index_where<T>(
    array: Option<&[T]>,
    from: isize,
    mut matches: impl FnMut(&T) -> bool,
) -> isize {
    let Some(array) = array.filter(|array| !array.is_empty()) else {
        return INDEX_NOT_FOUND;
    };
    if from < 0 {
        return INDEX_NOT_FOUND;
    }
    let from = (from as usize).min(array.len() - 1);
    array[..=from]
        .iter()
        .rposition(|element| matches(element))
        .map_or(INDEX_NOT_FOUND, |index| index as isize)
}

pub(crate) fn indexes_where<T>(
    array: Option<&[T]>,
    from: isize,
    mut matches: impl FnMut(&T) -> bool,
) -> IndexBitSet {
    let array = array.unwrap_or_default();
    let mut found = IndexBitSet::with_capacity(array.len());
    let mut cursor = from;
    loop {
        let index = index_where(Some(array), cursor, &mut matches);
        if index == INDEX_NOT_FOUND {
            break;
        }
        found.insert(index as usize);
        cursor = index + 1;
    }
    found
}
