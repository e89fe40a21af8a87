use std::{fmt, hash::Hash, sync::Arc};

use super::Value;

pub type InnerFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value. Identity is pointer identity: two functions compare
/// equal only when they refer to the same underlying closure.
#[derive(Clone)]
pub struct NativeFunction(Arc<InnerFn>);

impl NativeFunction {
    pub fn new(func: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(func))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        self.0(args)
    }

    pub fn addr(&self) -> *const InnerFn {
        Arc::as_ptr(&self.0)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function: {:p}", Arc::as_ptr(&self.0))
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for NativeFunction {}

impl Hash for NativeFunction {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::NativeFunction;
    use crate::lang::Value;

    #[test]
    fn a_function_is_equal_only_to_itself() {
        let func = NativeFunction::new(|_| Value::Nil);
        let other = NativeFunction::new(|_| Value::Nil);
        assert_eq!(func, func.clone());
        assert_ne!(func, other);
    }

    #[test]
    fn calling_passes_args_through() {
        let func = NativeFunction::new(|args| args.first().cloned().unwrap_or(Value::Nil));
        assert_eq!(func.call(&[Value::int(42)]), Value::int(42));
        assert_eq!(func.call(&[]), Value::Nil);
    }
}
