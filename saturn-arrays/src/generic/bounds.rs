//! Length, emptiness and compatibility queries, plus clamped slicing.
//!
//! An absent array (`None`) is treated as having length `0` everywhere in this
//! module, except by [`same_type`], which needs two real arrays to compare.

use core::any::TypeId;

use crate::error::{ArrayError, Result};

/// Returns the number of elements, or `0` for an absent array.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::bounds::length;
///
/// assert_eq!(length(Some(&[1, 2, 3][..])), 3);
/// assert_eq!(length::<u8>(None), 0);
/// ```
pub fn length<T>(array: Option<&[T]>) -> usize {
    array.map_or(0, <[T]>::len)
}

pub fn is_empty<T>(array: Option<&[T]>) -> bool {
    length(array) == 0
}

/// Returns `true` when both arrays hold the same number of elements.
///
/// The element types may differ; absent arrays count as empty.
pub fn same_length<A, B>(a: Option<&[A]>, b: Option<&[B]>) -> bool {
    length(a) == length(b)
}

/// Returns `true` when both arrays have exactly the same element type.
///
/// # Errors
///
/// Returns [`ArrayError::AbsentArray`] (a type error) if either array is absent.
pub fn same_type<A: 'static, B: 'static>(a: Option<&[A]>, b: Option<&[B]>) -> Result<bool> {
    if a.is_none() || b.is_none() {
        return Err(ArrayError::AbsentArray { type_error: true });
    }
    Ok(TypeId::of::<A>() == TypeId::of::<B>())
}

pub fn is_array_index_valid<T>(array: Option<&[T]>, index: isize) -> bool {
    usize::try_from(index).is_ok_and(|index| index < length(array))
}

/// Returns a clone of the element at `index`, or `default` when the array is
/// absent or the index is out of bounds.
pub fn get_or_default<T: Clone>(array: Option<&[T]>, index: isize, default: T) -> T {
    usize::try_from(index)
        .ok()
        .and_then(|index| array?.get(index))
        .cloned()
        .unwrap_or(default)
}

/// Copies the elements in `start..end` into a new vector.
///
/// `start` is clamped up to `0` and `end` down to the array length. The input
/// is never modified, and an absent input yields an absent output.
///
/// # Errors
///
/// Returns [`ArrayError::InvertedRange`] if the clamped `end` is before the
/// clamped `start`.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::bounds::subarray;
///
/// let data = [10, 20, 30, 40];
/// assert_eq!(subarray(Some(&data[..]), -5, 2).unwrap(), Some(vec![10, 20]));
/// assert_eq!(subarray(Some(&data[..]), 1, 99).unwrap(), Some(vec![20, 30, 40]));
/// assert!(subarray(Some(&data[..]), 3, 1).is_err());
/// ```
pub fn subarray<T: Clone>(array: Option<&[T]>, start: isize, end: isize) -> Result<Option<Vec<T>>> {
    let Some(array) = array else {
        return Ok(None);
    };
    let (start, end) = clamp_range(array.len(), start, end)?;
    Ok(Some(array[start..end].to_vec()))
}

/// Clamps `start` up to `0` and `end` down to `length`, rejecting a range
/// that is still inverted afterwards.
pub(crate) fn clamp_range(length: usize, start: isize, end: isize) -> Result<(usize, usize)> {
    let start = start.max(0);
    let end = end.min(length as isize);
    if end < start {
        tracing::debug!(start, end, length, "inverted range after clamping");
        return Err(ArrayError::InvertedRange { start, end });
    }
    Ok((start as usize, end as usize))
}
