//! Arrays whose element type is only known at runtime.
//!
//! [`Array`] is a closed set of "array of `T`" variants. Each method dispatches
//! to the matching [`generic`](crate::generic) function and wraps the result
//! back into the same variant, so element types are preserved without any
//! reflection. [`Value`] is the boxed element used wherever a caller cannot
//! name the type statically.

mod array;
mod element_type;
mod join;
mod shape;
mod value;

pub use array::{Array, Element};
pub use element_type::ElementType;
pub use join::{append, concat, to_map, to_string_array};
pub use shape::{is_sorted, is_sorted_by, length, same_length, same_type};
pub use value::Value;
