//! Fan-out over the variants of [`Array`](crate::dynamic::Array).
//!
//! Inside the body `$items` is bound to the variant's `Vec<T>` (by value,
//! reference or mutable reference, following the scrutinee), so the body is
//! type-checked once per element type and can call straight into the generic
//! layer.

/// Evaluates `$body` for whichever variant `$array` holds.
macro_rules! with_array {
    ($array:expr, $items:ident => $body:expr) => {
        match $array {
            $crate::dynamic::Array::Bool($items) => $body,
            $crate::dynamic::Array::Byte($items) => $body,
            $crate::dynamic::Array::Short($items) => $body,
            $crate::dynamic::Array::Char($items) => $body,
            $crate::dynamic::Array::Int($items) => $body,
            $crate::dynamic::Array::Long($items) => $body,
            $crate::dynamic::Array::Float($items) => $body,
            $crate::dynamic::Array::Double($items) => $body,
            $crate::dynamic::Array::Str($items) => $body,
            $crate::dynamic::Array::Value($items) => $body,
        }
    };
}

/// Like [`with_array!`], but wraps the `Vec` produced by `$body` back into the
/// variant it came from, so the result keeps the input's element type.
macro_rules! map_array {
    ($array:expr, $items:ident => $body:expr) => {
        match $array {
            $crate::dynamic::Array::Bool($items) => $crate::dynamic::Array::Bool($body),
            $crate::dynamic::Array::Byte($items) => $crate::dynamic::Array::Byte($body),
            $crate::dynamic::Array::Short($items) => $crate::dynamic::Array::Short($body),
            $crate::dynamic::Array::Char($items) => $crate::dynamic::Array::Char($body),
            $crate::dynamic::Array::Int($items) => $crate::dynamic::Array::Int($body),
            $crate::dynamic::Array::Long($items) => $crate::dynamic::Array::Long($body),
            $crate::dynamic::Array::Float($items) => $crate::dynamic::Array::Float($body),
            $crate::dynamic::Array::Double($items) => $crate::dynamic::Array::Double($body),
            $crate::dynamic::Array::Str($items) => $crate::dynamic::Array::Str($body),
            $crate::dynamic::Array::Value($items) => $crate::dynamic::Array::Value($body),
        }
    };
}

/// Evaluates `$body` when `$a` and `$b` hold the same variant, `$mismatch`
/// otherwise.
macro_rules! zip_array {
    ($a:expr, $b:expr, ($left:ident, $right:ident) => $body:expr, _ => $mismatch:expr) => {
        match ($a, $b) {
            ($crate::dynamic::Array::Bool($left), $crate::dynamic::Array::Bool($right)) => $body,
            ($crate::dynamic::Array::Byte($left), $crate::dynamic::Array::Byte($right)) => $body,
            ($crate::dynamic::Array::Short($left), $crate::dynamic::Array::Short($right)) => $body,
            ($crate::dynamic::Array::Char($left), $crate::dynamic::Array::Char($right)) => $body,
            ($crate::dynamic::Array::Int($left), $crate::dynamic::Array::Int($right)) => $body,
            ($crate::dynamic::Array::Long($left), $crate::dynamic::Array::Long($right)) => $body,
            ($crate::dynamic::Array::Float($left), $crate::dynamic::Array::Float($right)) => $body,
            ($crate::dynamic::Array::Double($left), $crate::dynamic::Array::Double($right)) => $body,
            ($crate::dynamic::Array::Str($left), $crate::dynamic::Array::Str($right)) => $body,
            ($crate::dynamic::Array::Value($left), $crate::dynamic::Array::Value($right)) => $body,
            _ => $mismatch,
        }
    };
}

pub(crate) use map_array;
pub(crate) use with_array;
pub(crate) use zip_array;
