//! Concatenation and string conversion.

use core::fmt::Display;

/// Returned by [`to_string_array`] for empty input. `Vec::new` does not
/// allocate, so handing this out is free.
pub const EMPTY_STRING_ARRAY: Vec<String> = Vec::new();

/// Joins two arrays into a new one, `a` first.
///
/// Two absent arrays give an absent result. If only one is present, the
/// result is a copy of it. Cloning a nested `Vec` copies its structure, while
/// shared leaves such as `Arc`s are only reference-counted.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::join::concat;
///
/// assert_eq!(concat(Some(&[1, 2][..]), Some(&[3][..])), Some(vec![1, 2, 3]));
/// assert_eq!(concat(None, Some(&[3][..])), Some(vec![3]));
/// assert_eq!(concat::<i32>(None, None), None);
/// ```
pub fn concat<T: Clone>(a: Option<&[T]>, b: Option<&[T]>) -> Option<Vec<T>> {
    match (a, b) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only.to_vec()),
        (Some(a), Some(b)) => {
            let mut joined = Vec::with_capacity(a.len() + b.len());
            joined.extend_from_slice(a);
            joined.extend_from_slice(b);
            Some(joined)
        }
    }
}

/// Formats every element, writing `null_placeholder` for absent ones.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::join::to_string_array;
///
/// let data = [Some(1), None, Some(3)];
/// assert_eq!(
///     to_string_array(Some(&data[..]), "-"),
///     Some(vec!["1".to_string(), "-".to_string(), "3".to_string()])
/// );
/// ```
pub fn to_string_array<T: Display>(array: Option<&[Option<T>]>, null_placeholder: &str) -> Option<Vec<String>> {
    let array = array?;
    if array.is_empty() {
        return Some(EMPTY_STRING_ARRAY);
    }
    Some(
        array
            .iter()
            .map(|element| {
                element
                    .as_ref()
                    .map_or_else(|| null_placeholder.to_owned(), ToString::to_string)
            })
            .collect(),
    )
}
