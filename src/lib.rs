#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod detect;
pub mod error;
pub mod lang;
pub mod param;

pub use detect::SignatureDetector;
pub use error::{InvalidSignatureError, OverloadError, UnknownTypeError};
pub use param::Param;
