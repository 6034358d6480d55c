//! Array algorithms over slices of any element type.
//!
//! Absent arrays are `None`; caller-supplied positions are `isize` so that
//! negative values reach the clamping rules instead of wrapping.

pub mod bounds;
pub mod index_bitset;
pub mod join;
pub mod mutate;
pub mod ordering;
pub mod search;
pub mod transform;

pub use bounds::{
    get_or_default, is_array_index_valid, is_empty, length, same_length, same_type, subarray,
};
pub use index_bitset::IndexBitSet;
pub use join::{concat, to_string_array, EMPTY_STRING_ARRAY};
pub use mutate::{
    append, insert_at, prepend, remove_all_occurrences, remove_at, remove_bits, remove_indices,
    remove_value,
};
pub use ordering::{is_sorted, is_sorted_by, shuffle, shuffle_with_thread_rng, RandomSource};
pub use search::{contains, index_of, indexes_of, last_index_of, INDEX_NOT_FOUND};
pub use transform::{reverse, reverse_all, rotate, rotate_all, swap, swap_range};
