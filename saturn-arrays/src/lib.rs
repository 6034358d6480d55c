//! # Saturn Arrays
//!
//! Array manipulation algorithms that work over any element type and always
//! hand back results of the same element type they were given.
//!
//! ## Layers
//!
//! ### Generic
//!
//! Functions over `Option<&[T]>` / `Option<&mut [T]>`, where `None` is an absent
//! array. Positions are `isize` so that negative values reach the clamping
//! rules instead of wrapping.
//!
//! - **Bounds** – [`generic::length`], [`generic::subarray`], [`generic::same_type`], …
//! - **Search** – [`generic::index_of`], [`generic::last_index_of`], [`generic::indexes_of`]
//! - **In-place transforms** – [`generic::reverse`], [`generic::swap_range`], [`generic::rotate`]
//! - **Batch mutation** – [`generic::insert_at`], [`generic::remove_indices`], [`generic::remove_bits`], …
//! - **Ordering** – [`generic::is_sorted_by`], [`generic::shuffle`] with any [`RandomSource`]
//! - **Join** – [`generic::concat`], [`generic::to_string_array`]
//!
//! ### Dynamic
//!
//! [`Array`] is a closed set of "array of `T`" variants for code that only
//! learns the element type at runtime, with [`Value`] as the boxed element.
//! It adds the operations that need a runtime type: [`dynamic::append`] to an
//! absent array, [`dynamic::concat`] with storage checks and [`dynamic::to_map`].
//!
//! ## Errors & Logging
//!
//! Fallible operations return [`Result`], whose [`ArrayError`] maps onto a
//! coarse [`ErrorKind`]. Rejected input is reported through `tracing` at debug
//! level; the crate never installs a subscriber.
//!
//! ## Cargo Features
//!
//! - `serde` – `Serialize`/`Deserialize` for [`Array`], [`Value`],
//!   [`ElementType`] and [`IndexBitSet`].
//!
//! ## Quick Examples
//!
//! ### Rotating in place
//!
//! ```rust
//! use saturn_arrays::generic::rotate;
//!
//! let mut data = [1, 2, 3, 4, 5];
//! rotate(Some(&mut data[..]), 0, 5, 2);
//! assert_eq!(data, [4, 5, 1, 2, 3]);
//! ```
//!
//! ### Removing several positions at once
//!
//! ```rust
//! use saturn_arrays::generic::remove_indices;
//!
//! let data = [10, 20, 30, 40, 50];
//! let kept = remove_indices(Some(&data[..]), &[1, 3]).unwrap();
//! assert_eq!(kept, Some(vec![10, 30, 50]));
//! ```
//!
//! ### Working with a runtime element type
//!
//! ```rust
//! use saturn_arrays::{dynamic, Array, ErrorKind, Value};
//!
//! let names = Array::strings(["a", "b", "c", "b"]);
//! assert_eq!(names.index_of(&Value::from("b"), 0), 1);
//! assert_eq!(names.last_index_of(&Value::from("b"), 3), 3);
//!
//! let err = dynamic::concat(Some(&Array::Int(vec![1])), Some(&names)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! ```

pub mod error;
pub mod generic;
pub(crate) mod macros;

pub mod dynamic;

pub use dynamic::{Array, ElementType, Value};
pub use error::{ArrayError, ErrorKind, Result};
pub use generic::{IndexBitSet, RandomSource, EMPTY_STRING_ARRAY, INDEX_NOT_FOUND};
