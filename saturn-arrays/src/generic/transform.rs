//! In-place reversal, ranged swapping and rotation.
//!
//! Every function here mutates the caller's slice and returns nothing. Out of
//! range arguments are clamped, never rejected, so these calls cannot fail.

/// Reverses the elements in `start..end`.
///
/// `start` is clamped up to `0` and `end` down to the array length.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::transform::reverse;
///
/// let mut data = [1, 2, 3, 4, 5];
/// reverse(Some(&mut data[..]), 1, 4);
/// assert_eq!(data, [1, 4, 3, 2, 5]);
/// ```
pub fn reverse<T>(array: Option<&mut [T]>, start: isize, end: isize) {
    let Some(array) = array else {
        return;
    };
    let start = start.max(0);
    let end = end.min(array.len() as isize);
    // `end` may still be far below zero here.
    if end > start.saturating_add(1) {
        array[start as usize..end as usize].reverse();
    }
}

pub fn reverse_all<T>(array: Option<&mut [T]>) {
    reverse(array, 0, isize::MAX);
}

/// Swaps `count` element pairs starting at `offset1` and `offset2`.
///
/// Nothing happens if either offset is past the end. Negative offsets are
/// clamped to `0`, and `count` is cut down so neither run leaves the array.
///
/// Pairs are exchanged one at a time from left to right. When the two runs
/// overlap, later exchanges see the results of earlier ones:
///
/// ```rust
/// use saturn_arrays::generic::transform::swap_range;
///
/// let mut data = [1, 2, 3, 4];
/// swap_range(Some(&mut data[..]), 0, 2, 2);
/// assert_eq!(data, [3, 4, 1, 2]);
///
/// let mut overlapping = [1, 2, 3, 4, 5];
/// swap_range(Some(&mut overlapping[..]), 0, 1, 3);
/// assert_eq!(overlapping, [2, 3, 4, 1, 5]);
/// ```
pub fn swap_range<T>(array: Option<&mut [T]>, offset1: isize, offset2: isize, count: isize) {
    let Some(array) = array else {
        return;
    };
    let length = array.len() as isize;
    if offset1 >= length || offset2 >= length {
        return;
    }
    let offset1 = offset1.max(0);
    let offset2 = offset2.max(0);
    let count = count.min(length - offset1).min(length - offset2);
    if count > 0 {
        swap_blocks(array, offset1 as usize, offset2 as usize, count as usize);
    }
}

/// Swaps the two elements at `index1` and `index2`.
pub fn swap<T>(array: Option<&mut [T]>, index1: isize, index2: isize) {
    swap_range(array, index1, index2, 1);
}

/// Rotates the elements in `start..end` by `offset` positions towards the end.
///
/// A negative `offset` rotates towards the start. The rotation swaps blocks in
/// place, so it runs in linear time without a scratch copy of the range.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::generic::transform::rotate;
///
/// let mut data = [1, 2, 3, 4, 5];
/// rotate(Some(&mut data[..]), 0, 5, 2);
/// assert_eq!(data, [4, 5, 1, 2, 3]);
///
/// rotate(Some(&mut data[..]), 0, 5, -2);
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// ```
pub fn rotate<T>(array: Option<&mut [T]>, start: isize, end: isize, offset: isize) {
    let Some(array) = array.filter(|array| !array.is_empty()) else {
        return;
    };
    let length = array.len() as isize;
    if start >= length - 1 || end <= 0 {
        return;
    }
    let mut start = start.max(0);
    let end = end.min(length);
    let mut n = end - start;
    if n <= 1 {
        return;
    }
    let mut offset = offset % n;
    if offset < 0 {
        offset += n;
    }

    // The range is `head | tail` with `tail` holding the last `offset`
    // elements. Swap the shorter block into its final place and keep going
    // on whatever remains unsorted.
    while n > 1 && offset > 0 {
        let head = n - offset;
        tracing::trace!(start, n, offset, "rotate block swap");
        if offset > head {
            swap_blocks(array, start as usize, (start + n - head) as usize, head as usize);
            n = offset;
            offset -= head;
        } else if offset < head {
            swap_blocks(array, start as usize, (start + head) as usize, offset as usize);
            start += offset;
            n = head;
        } else {
            swap_blocks(array, start as usize, (start + head) as usize, offset as usize);
            break;
        }
    }
}

pub fn rotate_all<T>(array: Option<&mut [T]>, offset: isize) {
    rotate(array, 0, isize::MAX, offset);
}

/// Pairwise exchange; callers have already bounded both runs.
fn swap_blocks<T>(array: &mut [T], offset1: usize, offset2: usize, count: usize) {
    for i in 0..count {
        array.swap(offset1 + i, offset2 + i);
    }
}
