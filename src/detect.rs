use std::{fmt, str::FromStr};

use crate::{error::InvalidSignatureError, lang::Value, param::Param};

/// A validated, immutable signature. Construction checks the declaration
/// once; after that the detector is a pure predicate over argument lists and
/// can be reused and shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureDetector {
    params: Vec<Param>,
}

impl SignatureDetector {
    pub fn of(params: impl IntoIterator<Item = Param>) -> Result<Self, InvalidSignatureError> {
        let params: Vec<_> = params.into_iter().collect();
        let misplaced = params
            .iter()
            .position(|param| param == &Param::VarLen)
            .map_or(false, |idx| idx + 1 != params.len());
        if misplaced {
            return Err(InvalidSignatureError::MisplacedVarLen);
        }
        Ok(Self { params })
    }

    /// Builds a detector from a comma-separated list of textual tags, e.g.
    /// `"int, str, var-len"`. Blank input is the empty signature. Class-bound
    /// descriptors have no textual form; use `Param::instance_of`.
    pub fn parse(src: &str) -> Result<Self, InvalidSignatureError> {
        if src.trim().is_empty() {
            return Self::of([]);
        }
        src.split(',')
            .map(str::trim)
            .map(Param::from_str)
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::of)
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Decides whether the argument list conforms to the signature. A
    /// mismatch of any kind, arity included, is a plain `false`.
    pub fn detect(&self, args: &[Value]) -> bool {
        match self.params.split_last() {
            Some((Param::VarLen, fixed)) => {
                args.len() >= fixed.len() && matches_pairwise(fixed, &args[..fixed.len()])
            }
            _ => self.params.len() == args.len() && matches_pairwise(&self.params, args),
        }
    }

    /// Invokes the callable with the arguments, in original order, iff they
    /// match. `None` means "not invoked" and stays distinguishable from a
    /// callable that returns a null-like value of its own.
    pub fn execute_when<R>(&self, args: &[Value], call: impl FnOnce(&[Value]) -> R) -> Option<R> {
        if self.detect(args) {
            Some(call(args))
        } else {
            None
        }
    }
}

fn matches_pairwise(params: &[Param], args: &[Value]) -> bool {
    params
        .iter()
        .zip(args)
        .all(|(param, value)| matches_one(param, value))
}

fn matches_one(param: &Param, value: &Value) -> bool {
    match param {
        Param::Int => value.is_int(),
        Param::Float => value.is_float(),
        Param::Str => value.is_str(),
        Param::Bool => value.is_bool(),
        Param::Array => value.is_array(),
        Param::Obj => value.is_object(),
        Param::Fun => value.is_function(),
        Param::Null => value.is_nil(),
        Param::Any => true,
        Param::Iterable => value.is_iterable(),
        // A trailing var-len is stripped off in detect; a lone one accepts
        // anything either way.
        Param::VarLen => true,
        Param::InstanceOf(class) => match value {
            Value::Object(object) => {
                object.class() == class || object.class().is_subclass_of(class)
            }
            _ => false,
        },
    }
}

impl fmt::Display for SignatureDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (idx, param) in self.params.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(param, f)?;
        }
        f.write_str(")")
    }
}
