use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{ElementType, Value};
use crate::error::{ArrayError, Result};
use crate::generic::{self, mutate, search, IndexBitSet, RandomSource, EMPTY_STRING_ARRAY, INDEX_NOT_FOUND};
use crate::macros::dispatch::{map_array, with_array, zip_array};

/// An element type that an [`Array`] variant can hold.
///
/// Implemented for `bool`, `i8`, `i16`, `char`, `i32`, `i64`, `f32`, `f64`,
/// `Option<Arc<str>>` and [`Value`].
pub trait Element: Clone + 'static {
    const TYPE: ElementType;

    /// Converts a boxed value into this element type, if it fits exactly.
    fn from_value(value: &Value) -> Option<Self>;

    fn to_value(&self) -> Value;

    /// Equality consistent with [`Element::hash_element`]; floats compare by bits.
    fn same(&self, other: &Self) -> bool;

    fn hash_element<H: Hasher>(&self, state: &mut H);

    /// Natural ordering. Only meaningful when `TYPE.has_natural_order()`.
    fn natural_cmp(&self, other: &Self) -> Ordering;

    fn wrap(items: Vec<Self>) -> Array;
}

macro_rules! ordered_element {
    ($t:ty, $variant:ident, |$value:ident| $from:expr, |$this:ident| $to:expr) => {
        impl Element for $t {
            const TYPE: ElementType = ElementType::$variant;

            fn from_value($value: &Value) -> Option<Self> {
                $from
            }

            fn to_value(&self) -> Value {
                let $this = self;
                $to
            }

            fn same(&self, other: &Self) -> bool {
                self == other
            }

            fn hash_element<H: Hasher>(&self, state: &mut H) {
                self.hash(state);
            }

            fn natural_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn wrap(items: Vec<Self>) -> Array {
                Array::$variant(items)
            }
        }
    };
}

macro_rules! integer_element {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            ordered_element!(
                $t,
                $variant,
                |value| match value {
                    Value::Int(i) => <$t>::try_from(*i).ok(),
                    _ => None,
                },
                |this| Value::Int(i64::from(*this))
            );
        )*
    };
}

integer_element!(i8 => Byte, i16 => Short, i32 => Int, i64 => Long);

ordered_element!(
    bool,
    Bool,
    |value| match value {
        Value::Bool(b) => Some(*b),
        _ => None,
    },
    |this| Value::Bool(*this)
);

ordered_element!(
    char,
    Char,
    |value| match value {
        Value::Char(c) => Some(*c),
        _ => None,
    },
    |this| Value::Char(*this)
);

ordered_element!(
    Option<Arc<str>>,
    Str,
    |value| match value {
        Value::Str(s) => Some(Some(Arc::clone(s))),
        Value::Null => Some(None),
        _ => None,
    },
    |this| this.as_ref().map_or(Value::Null, |s| Value::Str(Arc::clone(s)))
);

impl Element for f64 {
    const TYPE: ElementType = ElementType::Double;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn same(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn wrap(items: Vec<Self>) -> Array {
        Array::Double(items)
    }
}

impl Element for f32 {
    const TYPE: ElementType = ElementType::Float;

    fn from_value(value: &Value) -> Option<Self> {
        let Value::Float(x) = value else {
            return None;
        };
        #[allow(clippy::cast_possible_truncation)]
        let narrowed = *x as f32;
        (x.is_nan() || f64::from(narrowed).to_bits() == x.to_bits()).then_some(narrowed)
    }

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    fn same(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn wrap(items: Vec<Self>) -> Array {
        Array::Float(items)
    }
}

impl Element for Value {
    const TYPE: ElementType = ElementType::Value;

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }

    fn natural_cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }

    fn wrap(items: Vec<Self>) -> Array {
        Array::Value(items)
    }
}

/// An array whose element type is only known at runtime.
///
/// Every operation that builds a new array returns the same variant it was
/// called on, so the element type survives any chain of calls.
///
/// # Examples
///
/// ```rust
/// use saturn_arrays::dynamic::{Array, ElementType};
///
/// let data = Array::Short(vec![1, 2, 3, 4]);
/// let trimmed = data.remove_indices(&[0, 3]).unwrap();
/// assert_eq!(trimmed, Array::Short(vec![2, 3]));
/// assert_eq!(trimmed.element_type(), ElementType::Short);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Array {
    Bool(Vec<bool>),
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Char(Vec<char>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Str(Vec<Option<Arc<str>>>),
    Value(Vec<Value>),
}

impl Array {
    pub fn empty(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Bool => Array::Bool(Vec::new()),
            ElementType::Byte => Array::Byte(Vec::new()),
            ElementType::Short => Array::Short(Vec::new()),
            ElementType::Char => Array::Char(Vec::new()),
            ElementType::Int => Array::Int(Vec::new()),
            ElementType::Long => Array::Long(Vec::new()),
            ElementType::Float => Array::Float(Vec::new()),
            ElementType::Double => Array::Double(Vec::new()),
            ElementType::Str => Array::Str(Vec::new()),
            ElementType::Value => Array::Value(Vec::new()),
        }
    }

    /// Builds a string array with no absent elements.
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Array::Str(
            items
                .into_iter()
                .map(|s| Some(Arc::from(s.as_ref())))
                .collect(),
        )
    }

    pub fn element_type(&self) -> ElementType {
        with_array!(self, items => type_of(items))
    }

    pub fn len(&self) -> usize {
        with_array!(self, items => items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Boxes the element at `index`; absent string slots come back as [`Value::Null`].
    pub fn get(&self, index: usize) -> Option<Value> {
        with_array!(self, items => items.get(index).map(Element::to_value))
    }

    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }

    /// Copies nested arrays inside `Value` elements recursively.
    pub fn deep_clone(&self) -> Self {
        match self {
            Array::Value(items) => Array::Value(items.iter().map(Value::deep_clone).collect()),
            other => other.clone(),
        }
    }

    /// See [`generic::subarray`].
    pub fn subarray(&self, start: isize, end: isize) -> Result<Self> {
        Ok(map_array!(self, items => generic::subarray(Some(&items[..]), start, end)?.unwrap_or_default()))
    }

    pub fn reverse(&mut self, start: isize, end: isize) {
        with_array!(self, items => generic::reverse(Some(&mut items[..]), start, end));
    }

    pub fn swap_range(&mut self, offset1: isize, offset2: isize, count: isize) {
        with_array!(self, items => generic::swap_range(Some(&mut items[..]), offset1, offset2, count));
    }

    pub fn rotate(&mut self, start: isize, end: isize, offset: isize) {
        with_array!(self, items => generic::rotate(Some(&mut items[..]), start, end, offset));
    }

    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, random: &mut R) {
        with_array!(self, items => generic::shuffle(Some(&mut items[..]), random));
    }

    /// Finds `target` at or after `from`. A target that cannot be stored in
    /// this array is never found.
    pub fn index_of(&self, target: &Value, from: isize) -> isize {
        with_array!(self, items => index_in(items, target, from))
    }

    pub fn last_index_of(&self, target: &Value, from: isize) -> isize {
        with_array!(self, items => last_index_in(items, target, from))
    }

    pub fn contains(&self, target: &Value) -> bool {
        self.index_of(target, 0) != INDEX_NOT_FOUND
    }

    pub fn indexes_of(&self, target: &Value, from: isize) -> IndexBitSet {
        with_array!(self, items => indexes_in(items, target, from))
    }

    pub fn remove_at(&self, index: isize) -> Result<Self> {
        Ok(map_array!(self, items => generic::remove_at(Some(&items[..]), index)?))
    }

    pub fn remove_indices(&self, indices: &[isize]) -> Result<Self> {
        Ok(map_array!(self, items => generic::remove_indices(Some(&items[..]), indices)?.unwrap_or_default()))
    }

    pub fn remove_bits(&self, removed: &IndexBitSet) -> Result<Self> {
        Ok(map_array!(self, items => generic::remove_bits(Some(&items[..]), removed)?.unwrap_or_default()))
    }

    /// Removes the first element equal to `value`; without a match the result
    /// is a deep clone.
    pub fn remove_value(&self, value: &Value) -> Self {
        let Ok(index) = usize::try_from(self.index_of(value, 0)) else {
            return self.deep_clone();
        };
        map_array!(self, items => mutate::without(&items[..], index))
    }

    pub fn remove_all_occurrences(&self, value: &Value) -> Self {
        let matches = self.indexes_of(value, 0);
        if matches.is_empty() {
            return self.deep_clone();
        }
        map_array!(self, items => mutate::remove_runs(&items[..], &matches))
    }

    /// Splices the elements of `elements` in at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`ArrayError::IncompatibleTypes`] if `elements` cannot be
    /// stored in this array, or [`ArrayError::IndexOutOfRange`] unless
    /// `0 <= index <= len`.
    pub fn insert_at(&self, index: isize, elements: &Array) -> Result<Self> {
        Ok(map_array!(self, items => insert_converted(items, index, elements)?))
    }

    /// Checks natural non-decreasing order.
    ///
    /// # Errors
    ///
    /// Fails with [`ArrayError::NoDefaultComparator`] for `Value` arrays of two
    /// or more elements.
    pub fn is_sorted(&self) -> Result<bool> {
        if self.len() < 2 {
            return Ok(true);
        }
        let element_type = self.element_type();
        if !element_type.has_natural_order() {
            tracing::debug!(%element_type, "no natural ordering");
            return Err(ArrayError::NoDefaultComparator(element_type));
        }
        with_array!(self, items => generic::is_sorted_by(Some(&items[..]), Some(Element::natural_cmp)))
    }

    pub fn to_string_array(&self, null_placeholder: &str) -> Vec<String> {
        if self.is_empty() {
            return EMPTY_STRING_ARRAY;
        }
        self.values()
            .map(|value| match value {
                Value::Null => null_placeholder.to_owned(),
                other => other.to_string(),
            })
            .collect()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        zip_array!(self, other, (a, b) => same_items(a, b), _ => false)
    }
}

impl Eq for Array {}

impl Hash for Array {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element_type().hash(state);
        with_array!(self, items => hash_items(items, state));
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.values().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: Element> From<Vec<T>> for Array {
    fn from(items: Vec<T>) -> Self {
        T::wrap(items)
    }
}

/// Converts every element of `source` for storage in an array of `T`.
///
/// Primitive targets only take arrays of the identical type; string and value
/// targets take whatever converts element by element.
pub(crate) fn stored_items<T: Element>(source: &Array) -> Result<Vec<T>> {
    let incompatible = || {
        tracing::debug!(stored = %source.element_type(), array = %T::TYPE, "incompatible element types");
        ArrayError::IncompatibleTypes {
            stored: source.element_type(),
            array: T::TYPE,
        }
    };
    if T::TYPE.is_primitive() && source.element_type() != T::TYPE {
        return Err(incompatible());
    }
    source
        .values()
        .map(|value| T::from_value(&value).ok_or_else(incompatible))
        .collect()
}

pub(crate) fn stored_element<T: Element>(value: &Value) -> Result<T> {
    T::from_value(value).ok_or_else(|| {
        tracing::debug!(stored = %value.type_name(), array = %T::TYPE, "incompatible element");
        ArrayError::IncompatibleTypes {
            stored: value.element_type(),
            array: T::TYPE,
        }
    })
}

fn type_of<T: Element>(_items: &[T]) -> ElementType {
    T::TYPE
}

fn index_in<T: Element>(items: &[T], target: &Value, from: isize) -> isize {
    match T::from_value(target) {
        Some(target) => search::index_where(Some(items), from, |item| item.same(&target)),
        None => INDEX_NOT_FOUND,
    }
}

fn last_index_in<T: Element>(items: &[T], target: &Value, from: isize) -> isize {
    match T::from_value(target) {
        Some(target) => search::last_index_where(Some(items), from, |item| item.same(&target)),
        None => INDEX_NOT_FOUND,
    }
}

fn indexes_in<T: Element>(items: &[T], target: &Value, from: isize) -> IndexBitSet {
    match T::from_value(target) {
        Some(target) => search::indexes_where(Some(items), from, |item| item.same(&target)),
        None => IndexBitSet::new(),
    }
}

fn insert_converted<T: Element>(items: &[T], index: isize, elements: &Array) -> Result<Vec<T>> {
    let extra: Vec<T> = stored_items(elements)?;
    Ok(generic::insert_at(Some(items), index, &extra)?.unwrap_or_default())
}

fn same_items<T: Element>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same(y))
}

fn hash_items<T: Element, H: Hasher>(items: &[T], state: &mut H) {
    items.len().hash(state);
    for item in items {
        item.hash_element(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_element_type_and_len() {
        assert_eq!(Array::Int(vec![1, 2]).element_type(), ElementType::Int);
        assert_eq!(Array::strings(["a"]).element_type(), ElementType::Str);
        assert_eq!(Array::empty(ElementType::Double), Array::Double(vec![]));
        assert_eq!(Array::Bool(vec![true]).len(), 1);
        assert!(Array::Value(vec![]).is_empty());
    }

    #[test]
    fn test_get_boxes_elements() {
        let data = Array::Str(vec![Some(Arc::from("a")), None]);
        assert_eq!(data.get(0), Some(Value::from("a")));
        assert_eq!(data.get(1), Some(Value::Null));
        assert_eq!(data.get(2), None);
        assert_eq!(Array::Byte(vec![-3]).get(0), Some(Value::Int(-3)));
        assert_eq!(Array::Float(vec![0.5]).get(0), Some(Value::Float(0.5)));
    }

    #[test]
    fn test_subarray_keeps_variant() {
        let data = Array::Char(vec!['a', 'b', 'c']);
        assert_eq!(data.subarray(1, 10), Ok(Array::Char(vec!['b', 'c'])));
        assert_eq!(data.subarray(2, 2), Ok(Array::Char(vec![])));
        assert!(data.subarray(2, 1).is_err());
    }

    #[test]
    fn test_in_place_transforms() {
        let mut data = Array::Long(vec![1, 2, 3, 4, 5]);
        data.rotate(0, 5, 2);
        assert_eq!(data, Array::Long(vec![4, 5, 1, 2, 3]));
        data.reverse(0, 5);
        assert_eq!(data, Array::Long(vec![3, 2, 1, 5, 4]));
        data.swap_range(0, 3, 2);
        assert_eq!(data, Array::Long(vec![5, 4, 1, 3, 2]));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut data = Array::Int((0..20).collect());
        data.shuffle(&mut StdRng::seed_from_u64(3));
        let Array::Int(mut items) = data else {
            panic!("variant changed");
        };
        items.sort_unstable();
        assert_eq!(items, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_search_converts_target() {
        let data = Array::Short(vec![5, 7, 5]);
        assert_eq!(data.index_of(&Value::Int(5), 0), 0);
        assert_eq!(data.index_of(&Value::Int(5), 1), 2);
        assert_eq!(data.last_index_of(&Value::Int(5), 1), 0);
        assert_eq!(data.last_index_of(&Value::Int(5), -1), INDEX_NOT_FOUND);
        // Out of range for i16, and the wrong kind entirely.
        assert_eq!(data.index_of(&Value::Int(70_000), 0), INDEX_NOT_FOUND);
        assert!(!data.contains(&Value::from("5")));
        assert_eq!(data.indexes_of(&Value::Int(5), 0).iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_search_null_in_strings() {
        let data = Array::Str(vec![Some(Arc::from("a")), None]);
        assert_eq!(data.index_of(&Value::Null, 0), 1);
        assert!(!Array::Int(vec![0]).contains(&Value::Null));
    }

    #[test]
    fn test_search_nan_in_doubles() {
        let data = Array::Double(vec![1.0, f64::NAN]);
        assert_eq!(data.index_of(&Value::Float(f64::NAN), 0), 1);
    }

    #[test]
    fn test_removals_keep_variant() {
        let data = Array::Int(vec![10, 20, 30, 40, 50]);
        assert_eq!(data.remove_at(0), Ok(Array::Int(vec![20, 30, 40, 50])));
        assert_eq!(data.remove_indices(&[1, 3]), Ok(Array::Int(vec![10, 30, 50])));

        let bits: IndexBitSet = [0, 4].into_iter().collect();
        assert_eq!(data.remove_bits(&bits), Ok(Array::Int(vec![20, 30, 40])));

        let err = data.remove_at(5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    }

    #[test]
    fn test_remove_value_and_all_occurrences() {
        let data = Array::strings(["a", "b", "a"]);
        assert_eq!(data.remove_value(&Value::from("a")), Array::strings(["b", "a"]));
        assert_eq!(data.remove_all_occurrences(&Value::from("a")), Array::strings(["b"]));
        assert_eq!(data.remove_value(&Value::from("z")), data);
    }

    #[test]
    fn test_remove_value_by_value_equality() {
        let nested = Value::from(Array::Int(vec![1]));
        let data = Array::Value(vec![Value::Int(1), nested.clone(), Value::Null, nested.clone()]);
        assert_eq!(
            data.remove_value(&Value::from(Array::Int(vec![1]))),
            Array::Value(vec![Value::Int(1), Value::Null, nested])
        );
        assert_eq!(
            data.remove_all_occurrences(&Value::from(Array::Int(vec![1]))),
            Array::Value(vec![Value::Int(1), Value::Null])
        );

        let floats = Array::Double(vec![f64::NAN, 1.0, f64::NAN, -0.0]);
        assert_eq!(
            floats.remove_all_occurrences(&Value::Float(f64::NAN)),
            Array::Double(vec![1.0, -0.0])
        );
        assert_eq!(floats.remove_value(&Value::Float(0.0)), floats);
        assert_eq!(
            floats.remove_value(&Value::Float(-0.0)),
            Array::Double(vec![f64::NAN, 1.0, f64::NAN])
        );
    }

    #[test]
    fn test_remove_value_without_match_deep_clones() {
        let nested = Value::from(Array::Int(vec![1]));
        let data = Array::Value(vec![nested]);
        let copy = data.remove_all_occurrences(&Value::Int(9));
        assert_eq!(copy, data);

        let (Array::Value(original), Array::Value(copied)) = (&data, &copy) else {
            panic!("expected value arrays");
        };
        match (&original[0], &copied[0]) {
            (Value::Array(a), Value::Array(b)) => assert!(!Arc::ptr_eq(a, b)),
            _ => panic!("expected nested arrays"),
        }
    }

    #[test]
    fn test_insert_at() {
        let data = Array::Int(vec![1, 2, 3]);
        assert_eq!(
            data.insert_at(1, &Array::Int(vec![9, 9])),
            Ok(Array::Int(vec![1, 9, 9, 2, 3]))
        );
        assert_eq!(data.insert_at(7, &Array::Int(vec![])), Ok(data.clone()));
        assert_eq!(
            data.insert_at(4, &Array::Int(vec![0])).map_err(|e| e.kind()),
            Err(ErrorKind::IndexOutOfRange)
        );
    }

    #[test]
    fn test_insert_at_storage_rules() {
        let ints = Array::Int(vec![1]);
        assert_eq!(
            ints.insert_at(0, &Array::Long(vec![2])),
            Err(ArrayError::IncompatibleTypes {
                stored: ElementType::Long,
                array: ElementType::Int,
            })
        );

        let values = Array::Value(vec![Value::Int(1)]);
        assert_eq!(
            values.insert_at(1, &Array::strings(["s"])),
            Ok(Array::Value(vec![Value::Int(1), Value::from("s")]))
        );

        let strings = Array::strings(["a"]);
        let boxed_strings = Array::Value(vec![Value::from("b"), Value::Null]);
        assert_eq!(
            strings.insert_at(1, &boxed_strings),
            Ok(Array::Str(vec![Some(Arc::from("a")), Some(Arc::from("b")), None]))
        );
        assert!(strings.insert_at(0, &Array::Value(vec![Value::Int(1)])).is_err());
    }

    #[test]
    fn test_is_sorted() {
        assert_eq!(Array::Int(vec![1, 2, 2]).is_sorted(), Ok(true));
        assert_eq!(Array::Double(vec![2.0, 1.0]).is_sorted(), Ok(false));
        assert_eq!(Array::Str(vec![None, Some(Arc::from("a"))]).is_sorted(), Ok(true));
        assert_eq!(Array::Bool(vec![false, true]).is_sorted(), Ok(true));
        assert_eq!(Array::Value(vec![Value::Int(1)]).is_sorted(), Ok(true));
        assert_eq!(
            Array::Value(vec![Value::Int(1), Value::Int(2)]).is_sorted(),
            Err(ArrayError::NoDefaultComparator(ElementType::Value))
        );
    }

    #[test]
    fn test_to_string_array() {
        let data = Array::Str(vec![Some(Arc::from("a")), None]);
        assert_eq!(data.to_string_array("-"), vec!["a".to_string(), "-".to_string()]);
        assert_eq!(Array::Double(vec![1.0]).to_string_array("-"), vec!["1.0".to_string()]);
        assert_eq!(Array::Int(vec![]).to_string_array("-"), EMPTY_STRING_ARRAY);
    }

    #[test]
    fn test_equality_and_display() {
        assert_eq!(Array::Float(vec![f32::NAN]), Array::Float(vec![f32::NAN]));
        assert_ne!(Array::Int(vec![1]), Array::Long(vec![1]));
        assert_eq!(Array::Str(vec![None]).to_string(), "[null]");
        assert_eq!(Array::from(vec![1i8, 2]), Array::Byte(vec![1, 2]));
    }

    #[test]
    fn test_f32_conversion_is_exact() {
        assert_eq!(f32::from_value(&Value::Float(0.5)), Some(0.5));
        assert_eq!(f32::from_value(&Value::Float(0.1)), None);
        assert!(f32::from_value(&Value::Float(f64::NAN)).is_some_and(f32::is_nan));
    }
}
