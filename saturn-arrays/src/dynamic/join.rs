use std::collections::HashMap;

use super::array::{stored_element, stored_items, Element};
use super::{Array, Value};
use crate::error::{ArrayError, Result};
use crate::generic;
use crate::macros::dispatch::map_array;

/// Returns a copy of `array` one element longer, with `element` last.
///
/// Without an array, the element alone decides the result's type: integers
/// start an `i64` array, floats an `f64` array, and so on (see
/// [`Value::element_type`]).
///
/// # Errors
///
/// [`ArrayError::BothAbsent`] when `array` is `None` and `element` is null,
/// [`ArrayError::IncompatibleTypes`] when `element` cannot be stored.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::dynamic::{append, Array, Value};
///
/// let grown = append(Some(&Array::Short(vec![1])), &Value::Int(2)).unwrap();
/// assert_eq!(grown, Array::Short(vec![1, 2]));
///
/// let fresh = append(None, &Value::from("a")).unwrap();
/// assert_eq!(fresh, Array::strings(["a"]));
/// ```
pub fn append(array: Option<&Array>, element: &Value) -> Result<Array> {
    let started;
    let array = match array {
        Some(array) => array,
        None if element.is_null() => {
            tracing::debug!("append with neither array nor element");
            return Err(ArrayError::BothAbsent);
        }
        None => {
            started = Array::empty(element.element_type());
            &started
        }
    };
    Ok(map_array!(array, items => generic::append(Some(&items[..]), stored_element(element)?)))
}

/// Joins two arrays into one of `a`'s type.
///
/// If either side is absent or empty the result is a deep clone of the other.
///
/// # Errors
///
/// [`ArrayError::IncompatibleTypes`] when the elements of `b` cannot be stored
/// in an array of `a`'s type.
pub fn concat(a: Option<&Array>, b: Option<&Array>) -> Result<Option<Array>> {
    match (a, b) {
        (None, None) => Ok(None),
        (Some(only), None) | (None, Some(only)) => Ok(Some(only.deep_clone())),
        (Some(a), Some(b)) if b.is_empty() => Ok(Some(a.deep_clone())),
        (Some(a), Some(b)) if a.is_empty() => Ok(Some(b.deep_clone())),
        (Some(a), Some(b)) => Ok(Some(map_array!(a, items => concat_converted(items, b)?))),
    }
}

fn concat_converted<T: Element>(items: &[T], tail: &Array) -> Result<Vec<T>> {
    let tail: Vec<T> = stored_items(tail)?;
    Ok(generic::concat(Some(items), Some(&tail[..])).unwrap_or_default())
}

/// Builds a map from key/value entries.
///
/// Each entry is either a [`Value::Pair`] or a string/value array whose first
/// two slots are the key and the value. Later entries overwrite earlier ones
/// with the same key.
///
/// # Errors
///
/// [`ArrayError::EntryTooShort`] for an array entry with fewer than two slots,
/// [`ArrayError::NotAnEntry`] for anything else.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::dynamic::{to_map, Array, Value};
///
/// let entries = [
///     Value::pair("red", 0xff0000),
///     Value::from(Array::strings(["green", "00ff00"])),
/// ];
/// let colors = to_map(Some(&entries[..])).unwrap().unwrap();
/// assert_eq!(colors[&Value::from("red")], Value::Int(0xff0000));
/// assert_eq!(colors[&Value::from("green")], Value::from("00ff00"));
/// ```
pub fn to_map(entries: Option<&[Value]>) -> Result<Option<HashMap<Value, Value>>> {
    let Some(entries) = entries else {
        return Ok(None);
    };
    let mut map = HashMap::with_capacity(entries.len() * 3 / 2);
    for (index, entry) in entries.iter().enumerate() {
        let (key, value) = match entry {
            Value::Pair(pair) => (pair.0.clone(), pair.1.clone()),
            Value::Array(array) if !array.element_type().is_primitive() => {
                match (array.get(0), array.get(1)) {
                    (Some(key), Some(value)) => (key, value),
                    _ => {
                        tracing::debug!(index, "map entry too short");
                        return Err(ArrayError::EntryTooShort {
                            index,
                            value: entry.to_string(),
                        });
                    }
                }
            }
            other => {
                tracing::debug!(index, found = %other.type_name(), "not a map entry");
                return Err(ArrayError::NotAnEntry {
                    index,
                    value: other.to_string(),
                });
            }
        };
        map.insert(key, value);
    }
    Ok(Some(map))
}

pub fn to_string_array(array: Option<&Array>, null_placeholder: &str) -> Option<Vec<String>> {
    array.map(|array| array.to_string_array(null_placeholder))
}
