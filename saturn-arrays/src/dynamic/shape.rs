use core::cmp::Ordering;

use super::{Array, Value};
use crate::error::{ArrayError, Result};
use crate::generic;

pub fn length(array: Option<&Array>) -> usize {
    array.map_or(0, Array::len)
}

/// Compares the lengths of two values that must be arrays or null.
///
/// # Errors
///
/// A non-array, non-null argument is a type error. Null counts as length 0.
pub fn same_length(a: &Value, b: &Value) -> Result<bool> {
    Ok(array_length(a)? == array_length(b)?)
}

/// Checks that two arrays have the identical element type.
///
/// # Errors
///
/// Both arguments must be present arrays; anything else is a type error.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::dynamic::{same_type, Array, Value};
///
/// let ints = Value::from(Array::Int(vec![1]));
/// let strings = Value::from(Array::strings(["a"]));
/// assert_eq!(same_type(&ints, &ints), Ok(true));
/// assert_eq!(same_type(&ints, &strings), Ok(false));
/// assert!(same_type(&ints, &Value::Null).is_err());
/// ```
pub fn same_type(a: &Value, b: &Value) -> Result<bool> {
    Ok(required_array(a, true)?.element_type() == required_array(b, true)?.element_type())
}

/// Natural-order sortedness of an array held in a [`Value`].
pub fn is_sorted(array: &Value) -> Result<bool> {
    required_array(array, false)?.is_sorted()
}

/// Sortedness under `comparator`. An absent array is trivially sorted.
pub fn is_sorted_by<F>(array: &Value, comparator: Option<F>) -> Result<bool>
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    let Some(comparator) = comparator else {
        tracing::debug!("comparator missing");
        return Err(ArrayError::MissingComparator);
    };
    let array = match array {
        Value::Null => return Ok(true),
        other => required_array(other, false)?,
    };
    let values: Vec<Value> = array.values().collect();
    generic::is_sorted_by(Some(&values[..]), Some(comparator))
}

fn array_length(value: &Value) -> Result<usize> {
    match value {
        Value::Null => Ok(0),
        other => Ok(required_array(other, true)?.len()),
    }
}

pub(crate) fn required_array(value: &Value, type_error: bool) -> Result<&Array> {
    match value {
        Value::Array(array) => Ok(array),
        Value::Null => {
            tracing::debug!(type_error, "array is absent");
            Err(ArrayError::AbsentArray { type_error })
        }
        other => {
            tracing::debug!(found = %other.type_name(), type_error, "not an array");
            Err(ArrayError::NotAnArray {
                found: other.type_name(),
                type_error,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::ElementType;
    use crate::error::ErrorKind;

    #[test]
    fn test_length() {
        assert_eq!(length(None), 0);
        assert_eq!(length(Some(&Array::Char(vec!['x', 'y']))), 2);
    }

    #[test]
    fn test_same_length() {
        let two = Value::from(Array::Int(vec![1, 2]));
        let other_two = Value::from(Array::strings(["a", "b"]));
        assert_eq!(same_length(&two, &other_two), Ok(true));
        assert_eq!(same_length(&Value::Null, &Value::from(Array::Bool(vec![]))), Ok(true));
        assert_eq!(same_length(&two, &Value::Null), Ok(false));

        let err = same_length(&two, &Value::Int(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeError);
    }

    #[test]
    fn test_same_type_is_identity() {
        let strings = Value::from(Array::strings(["a"]));
        let boxed = Value::from(Array::Value(vec![Value::from("a")]));
        assert_eq!(same_type(&strings, &boxed), Ok(false));

        let err = same_type(&Value::Null, &strings).unwrap_err();
        assert_eq!(err, ArrayError::AbsentArray { type_error: true });
        assert_eq!(err.kind(), ErrorKind::TypeError);
        assert_eq!(same_type(&strings, &Value::Bool(true)).unwrap_err().kind(), ErrorKind::TypeError);
    }

    #[test]
    fn test_is_sorted_requires_array() {
        assert_eq!(
            is_sorted(&Value::Null),
            Err(ArrayError::AbsentArray { type_error: false })
        );
        assert_eq!(is_sorted(&Value::Int(1)).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(is_sorted(&Value::from(Array::Long(vec![1, 5]))), Ok(true));
        assert_eq!(
            is_sorted(&Value::from(Array::Value(vec![Value::Null, Value::Null]))),
            Err(ArrayError::NoDefaultComparator(ElementType::Value))
        );
    }

    #[test]
    fn test_is_sorted_by() {
        let by_text = |a: &Value, b: &Value| a.to_string().cmp(&b.to_string());
        let mixed = Value::from(Array::Value(vec![Value::Int(10), Value::from("9")]));
        assert_eq!(is_sorted_by(&mixed, Some(by_text)), Ok(true));
        assert_eq!(is_sorted_by(&Value::Null, Some(by_text)), Ok(true));

        let reversed = Value::from(Array::Value(vec![Value::from("b"), Value::from("a")]));
        assert_eq!(is_sorted_by(&reversed, Some(by_text)), Ok(false));
        assert_eq!(
            is_sorted_by(&reversed, None::<fn(&Value, &Value) -> Ordering>),
            Err(ArrayError::MissingComparator)
        );
    }
}
