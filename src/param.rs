use std::{fmt, str::FromStr};

use crate::{
    error::{InvalidSignatureError, UnknownTypeError},
    lang::{ClassRef, ClassRegistry},
};

/// One parameter descriptor of a signature. The set is closed: validity of a
/// descriptor is a property of the type, with two exceptions that still need
/// a runtime check — resolving a class name (`instance_of`) and parsing a
/// textual tag (`FromStr`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int,
    Float,
    Str,
    Bool,
    Array,
    Obj,
    Fun,
    Null,
    /// Wildcard: accepts any single value, including null and functions.
    Any,
    /// Accepts arrays and instances of iterable classes.
    Iterable,
    /// Positional marker: zero or more further arguments of any type. Valid
    /// only as the last descriptor of a signature.
    VarLen,
    /// Accepts instances of the class or of any strict subclass.
    InstanceOf(ClassRef),
}

impl Param {
    /// Builds an instance-of descriptor from a class name, resolving it
    /// against the registry right away. An unresolvable name is an error
    /// here, never later at match time.
    pub fn instance_of(registry: &ClassRegistry, class: &str) -> Result<Param, UnknownTypeError> {
        registry
            .resolve(class)
            .map(Param::InstanceOf)
            .ok_or_else(|| UnknownTypeError(class.to_string()))
    }

    /// Instance-of by identity, for a class handle already in hand.
    pub fn of_class(class: &ClassRef) -> Param {
        Param::InstanceOf(class.clone())
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => "int".fmt(f),
            Self::Float => "float".fmt(f),
            Self::Str => "str".fmt(f),
            Self::Bool => "bool".fmt(f),
            Self::Array => "array".fmt(f),
            Self::Obj => "obj".fmt(f),
            Self::Fun => "fun".fmt(f),
            Self::Null => "null".fmt(f),
            Self::Any => "mixed".fmt(f),
            Self::Iterable => "iterable".fmt(f),
            Self::VarLen => "var-len".fmt(f),
            Self::InstanceOf(class) => write!(f, "instanceOf({})", class),
        }
    }
}

impl FromStr for Param {
    type Err = InvalidSignatureError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "str" => Ok(Self::Str),
            "bool" => Ok(Self::Bool),
            "array" => Ok(Self::Array),
            "obj" => Ok(Self::Obj),
            "fun" => Ok(Self::Fun),
            "null" => Ok(Self::Null),
            "mixed" => Ok(Self::Any),
            "iterable" => Ok(Self::Iterable),
            "var-len" => Ok(Self::VarLen),
            _ => Err(InvalidSignatureError::UnknownTag(tag.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Param;
    use crate::{
        error::{InvalidSignatureError, UnknownTypeError},
        lang::ClassRegistry,
    };

    const TAGGED: [Param; 11] = [
        Param::Int,
        Param::Float,
        Param::Str,
        Param::Bool,
        Param::Array,
        Param::Obj,
        Param::Fun,
        Param::Null,
        Param::Any,
        Param::Iterable,
        Param::VarLen,
    ];

    #[test]
    fn every_tag_round_trips_through_display() {
        for param in TAGGED {
            let parsed: Param = param.to_string().parse().unwrap();
            assert_eq!(parsed, param);
        }
    }

    #[test]
    fn unknown_tag_is_a_signature_error() {
        let res: Result<Param, _> = "tested".parse();
        assert_eq!(
            res,
            Err(InvalidSignatureError::UnknownTag("tested".to_string()))
        );
    }

    #[test]
    fn instance_of_a_defined_class_carries_its_handle() {
        let mut registry = ClassRegistry::new();
        let shape = registry.define("Shape");
        let param = Param::instance_of(&registry, "Shape").unwrap();
        assert_eq!(param, Param::InstanceOf(shape));
    }

    #[test]
    fn instance_of_an_undefined_class_is_an_error() {
        let registry = ClassRegistry::new();
        let res = Param::instance_of(&registry, "Shape");
        assert_eq!(res, Err(UnknownTypeError("Shape".to_string())));
    }

    #[test]
    fn unknown_type_error_names_the_class() {
        let registry = ClassRegistry::new();
        let err = Param::instance_of(&registry, "Shape").unwrap_err();
        insta::assert_snapshot!(err, @"class Shape is not defined");
    }

    #[test]
    fn instance_of_display_names_the_class() {
        let mut registry = ClassRegistry::new();
        let shape = registry.define("Shape");
        insta::assert_snapshot!(Param::of_class(&shape), @"instanceOf(Shape)");
    }
}
