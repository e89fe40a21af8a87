use std::fmt;

use super::{NativeFunction, ObjectRef, ObjectValue, ValueType};

/// A runtime value presented for signature matching. `Int` and `Float` are
/// distinct kinds and never coerce into each other.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Array(Vec<Value>),
    Function(NativeFunction),
    Object(ObjectRef),
}

impl Default for Value {
    fn default() -> Self {
        Self::Nil
    }
}

impl Value {
    pub fn int(value: impl Into<i64>) -> Self {
        Self::Int(value.into())
    }

    pub fn float(value: impl Into<f64>) -> Self {
        Self::Float(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn array(values: impl Into<Vec<Value>>) -> Self {
        Self::Array(values.into())
    }

    pub fn object(value: ObjectValue) -> Self {
        Self::Object(ObjectRef::from(value))
    }

    pub fn function(func: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self::Function(NativeFunction::new(func))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Arrays always iterate; objects iterate when their class does.
    pub fn is_iterable(&self) -> bool {
        match self {
            Self::Array(_) => true,
            Self::Object(object) => object.class().is_iterable(),
            _ => false,
        }
    }

    pub fn unwrap_int(self) -> i64 {
        if let Self::Int(num) = self {
            return num;
        }
        panic!("Called unwrap_int() on a {:?}", self)
    }

    pub fn unwrap_string(self) -> String {
        if let Self::Str(str) = self {
            return str;
        }
        panic!("Called unwrap_string() on a {:?}", self)
    }

    pub fn unwrap_object(self) -> ObjectRef {
        if let Self::Object(object) = self {
            return object;
        }
        panic!("Called unwrap_object() on a {:?}", self)
    }

    pub fn type_of(&self) -> ValueType {
        match self {
            Self::Nil => ValueType::Nil,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::Str(_) => ValueType::Str,
            Self::Bool(_) => ValueType::Bool,
            Self::Array(_) => ValueType::Array,
            Self::Function(_) => ValueType::Function,
            Self::Object(_) => ValueType::Object,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => fmt::Display::fmt("null", f),
            Self::Int(num) => fmt::Display::fmt(num, f),
            Self::Float(num) => fmt::Display::fmt(num, f),
            Self::Str(str) => fmt::Debug::fmt(str, f),
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::Array(values) => {
                f.write_str("[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(value, f)?;
                }
                f.write_str("]")
            }
            Self::Function(func) => fmt::Debug::fmt(func, f),
            Self::Object(object) => fmt::Debug::fmt(object, f),
        }
    }
}


#[cfg(test)]
impl quickcheck::Arbitrary for Value {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Objects need a class registry, so the generator covers every
        // registry-free variant; object matching is tested directly.
        match u8::arbitrary(g) % 7 {
            0 => Value::Nil,
            1 => Value::Int(i64::arbitrary(g)),
            2 => Value::Float(f64::arbitrary(g)),
            3 => Value::Str(String::arbitrary(g)),
            4 => Value::Bool(bool::arbitrary(g)),
            5 => Value::Array(
                Vec::<i64>::arbitrary(g)
                    .into_iter()
                    .map(Value::Int)
                    .collect(),
            ),
            6 => Value::function(|_| Value::Nil),
            _ => unreachable!(),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Value::Nil => quickcheck::empty_shrinker(),
            Value::Int(num) => {
                Box::new(std::iter::once(Value::Nil).chain(num.shrink().map(Value::Int)))
            }
            Value::Float(num) => {
                Box::new(std::iter::once(Value::Nil).chain(num.shrink().map(Value::Float)))
            }
            Value::Str(str) => {
                Box::new(std::iter::once(Value::Nil).chain(str.shrink().map(Value::Str)))
            }
            Value::Bool(b) => {
                Box::new(std::iter::once(Value::Nil).chain(b.shrink().map(Value::Bool)))
            }
            Value::Array(values) => {
                Box::new(std::iter::once(Value::Nil).chain(values.shrink().map(Value::Array)))
            }
            Value::Function(_) | Value::Object(_) => Box::new(std::iter::once(Value::Nil)),
        }
    }
}
