use std::{collections::HashMap, fmt, sync::Arc};

use super::{ClassRef, Value};

/// An instance of a registered class: a class handle plus named fields.
/// Built up by the caller, then frozen into an `ObjectRef`.
#[derive(Debug, Clone)]
pub struct ObjectValue {
    class: ClassRef,
    fields: HashMap<String, Value>,
}

#[derive(Clone)]
pub struct ObjectRef(Arc<ObjectValue>);

impl ObjectValue {
    pub fn new(class: ClassRef) -> Self {
        Self {
            class,
            fields: HashMap::new(),
        }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    pub fn empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&Value::Nil)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }
}

impl std::ops::Index<&str> for ObjectValue {
    type Output = Value;

    fn index(&self, field: &str) -> &Self::Output {
        self.get(field)
    }
}

impl ObjectRef {
    pub fn class(&self) -> &ClassRef {
        self.0.class()
    }

    pub fn get(&self, field: &str) -> &Value {
        self.0.get(field)
    }

    pub fn addr(&self) -> *const ObjectValue {
        Arc::as_ptr(&self.0)
    }
}

impl From<ObjectValue> for ObjectRef {
    fn from(object: ObjectValue) -> Self {
        Self(Arc::new(object))
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:p}", self.class().name(), self.addr())
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ObjectRef {}

#[cfg(test)]
mod test {
    use super::{ObjectRef, ObjectValue};
    use crate::lang::{ClassRegistry, Value};

    #[test]
    fn new_object_is_empty() {
        let mut registry = ClassRegistry::new();
        let object = ObjectValue::new(registry.define("Shape"));
        assert!(object.empty());
    }

    #[test]
    fn missing_field_reads_as_nil() {
        let mut registry = ClassRegistry::new();
        let object = ObjectValue::new(registry.define("Shape"));
        assert_eq!(object.get("width"), &Value::Nil);
    }

    #[quickcheck]
    fn set_field_can_be_read_back(field: String, num: i64) {
        let mut registry = ClassRegistry::new();
        let mut object = ObjectValue::new(registry.define("Shape"));
        object.set(field.clone(), Value::int(num));
        assert_eq!(object[field.as_str()], Value::int(num));
    }

    #[test]
    fn refs_compare_by_identity_not_content() {
        let mut registry = ClassRegistry::new();
        let class = registry.define("Shape");
        let first = ObjectRef::from(ObjectValue::new(class.clone()));
        let second = ObjectRef::from(ObjectValue::new(class));
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }
}
