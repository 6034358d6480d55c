use core::fmt;

/// Runtime descriptor of an [`Array`](super::Array)'s element type.
///
/// Two arrays have the same type only when their descriptors are equal;
/// there is no notion of one type being assignable to another here, so `Str`
/// and `Value` are different even though a `Value` array can hold strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementType {
    Bool,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Str,
    Value,
}

impl ElementType {
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Bool => "bool",
            ElementType::Byte => "i8",
            ElementType::Short => "i16",
            ElementType::Char => "char",
            ElementType::Int => "i32",
            ElementType::Long => "i64",
            ElementType::Float => "f32",
            ElementType::Double => "f64",
            ElementType::Str => "str",
            ElementType::Value => "value",
        }
    }

    /// Primitive arrays cannot hold absent elements and only accept elements
    /// copied from an array of the very same type.
    pub fn is_primitive(self) -> bool {
        !matches!(self, ElementType::Str | ElementType::Value)
    }

    /// Whether the elements have a natural ordering usable without a comparator.
    pub fn has_natural_order(self) -> bool {
        self != ElementType::Value
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
