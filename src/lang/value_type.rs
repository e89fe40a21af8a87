#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueType {
    Nil,
    Int,
    Float,
    Str,
    Bool,
    Array,
    Function,
    Object,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => "null",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Function => "fun",
            Self::Object => "obj",
        }
        .fmt(f)
    }
}
