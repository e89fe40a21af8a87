use thiserror::Error;

/// Raised when `Param::instance_of` is given a class name that the registry
/// cannot resolve. Detected at descriptor-construction time, never at match
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("class {0} is not defined")]
pub struct UnknownTypeError(pub String);

/// Raised when a signature declaration is malformed. A failed match is a
/// normal boolean outcome and never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSignatureError {
    #[error("type {0} is not defined")]
    UnknownTag(String),
    #[error("variable-arity marker must be the last parameter")]
    MisplacedVarLen,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverloadError {
    #[error("{0}")]
    UnknownType(#[from] UnknownTypeError),
    #[error("{0}")]
    InvalidSignature(#[from] InvalidSignatureError),
}
