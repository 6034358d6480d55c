use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{Array, ElementType};

/// A single element whose type is only known at runtime.
///
/// Strings, nested arrays and pairs sit behind [`Arc`], so cloning a `Value`
/// shares them. Use [`Value::deep_clone`] to copy nested array structure.
///
/// Equality and hashing compare floats by bit pattern, which makes `Value`
/// usable as a map key (`NaN` equals itself, `0.0` and `-0.0` differ).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Str(Arc<str>),
    Array(Arc<Array>),
    /// A key/value pair, the entry form accepted by [`to_map`](super::to_map).
    Pair(Arc<(Value, Value)>),
}

impl Value {
    pub fn pair(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Value::Pair(Arc::new((key.into(), value.into())))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// The element type of a fresh array started from this value.
    pub fn element_type(&self) -> ElementType {
        match self {
            Value::Bool(_) => ElementType::Bool,
            Value::Int(_) => ElementType::Long,
            Value::Float(_) => ElementType::Double,
            Value::Char(_) => ElementType::Char,
            Value::Str(_) => ElementType::Str,
            Value::Null | Value::Array(_) | Value::Pair(_) => ElementType::Value,
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::Char(_) => "char".to_string(),
            Value::Str(_) => "str".to_string(),
            Value::Array(array) => format!("array of {}", array.element_type()),
            Value::Pair(_) => "pair".to_string(),
        }
    }

    /// Copies nested arrays and pairs recursively; strings stay shared.
    pub fn deep_clone(&self) -> Self {
        match self {
            Value::Array(array) => Value::Array(Arc::new(array.deep_clone())),
            Value::Pair(pair) => Value::Pair(Arc::new((pair.0.deep_clone(), pair.1.deep_clone()))),
            other => other.clone(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Pair(a), Value::Pair(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Char(c) => c.hash(state),
            Value::Str(s) => s.hash(state),
            Value::Array(array) => array.hash(state),
            Value::Pair(pair) => pair.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
            Value::Array(array) => write!(f, "{array}"),
            Value::Pair(pair) => write!(f, "{}={}", pair.0, pair.1),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(Arc::new(array))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_float_equality_is_bitwise() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Float(0.0), Value::Float(-0.0));
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(Value::from("a"));
        set.insert(Value::from("a"));
        set.insert(Value::Float(f64::NAN));
        set.insert(Value::Float(f64::NAN));
        set.insert(Value::from(Array::Int(vec![1, 2])));
        set.insert(Value::from(Array::Int(vec![1, 2])));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::pair("k", 3).to_string(), "k=3");
        assert_eq!(Value::from(Array::Int(vec![1, 2])).to_string(), "[1, 2]");
    }

    #[test]
    fn test_element_type_of_values() {
        assert_eq!(Value::Int(1).element_type(), ElementType::Long);
        assert_eq!(Value::from("s").element_type(), ElementType::Str);
        assert_eq!(Value::pair(1, 2).element_type(), ElementType::Value);
        assert_eq!(Value::from(Array::Char(vec![])).type_name(), "array of char");
    }

    #[test]
    fn test_deep_clone_copies_arrays_and_shares_strings() {
        let inner = Value::from(Array::Int(vec![1]));
        let text = Value::from("shared");
        let outer = Value::from(Array::Value(vec![inner, text]));

        let shallow = outer.clone();
        let deep = outer.deep_clone();
        assert_eq!(deep, outer);

        let (Value::Array(outer_array), Value::Array(shallow_array), Value::Array(deep_array)) =
            (&outer, &shallow, &deep)
        else {
            panic!("expected arrays");
        };
        assert!(Arc::ptr_eq(outer_array, shallow_array));
        assert!(!Arc::ptr_eq(outer_array, deep_array));

        let (Array::Value(original), Array::Value(copied)) = (&**outer_array, &**deep_array) else {
            panic!("expected value arrays");
        };
        match (&original[0], &copied[0]) {
            (Value::Array(a), Value::Array(b)) => assert!(!Arc::ptr_eq(a, b)),
            _ => panic!("expected nested arrays"),
        }
        match (&original[1], &copied[1]) {
            (Value::Str(a), Value::Str(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected strings"),
        }
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
