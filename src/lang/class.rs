use std::{collections::HashMap, fmt, hash::Hash, sync::Arc};

#[derive(Debug)]
pub struct ClassDef {
    name: String,
    parent: Option<ClassRef>,
    iterable: bool,
}

/// A handle to a registered class. Carries its own ancestry, so subtype
/// queries after registration never go back to the registry. Identity is
/// pointer identity: two separately registered classes are distinct even
/// when their names collide.
#[derive(Clone)]
pub struct ClassRef(Arc<ClassDef>);

impl ClassRef {
    fn new(name: impl Into<String>, parent: Option<ClassRef>, iterable: bool) -> Self {
        Self(Arc::new(ClassDef {
            name: name.into(),
            parent,
            iterable,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<&ClassRef> {
        self.0.parent.as_ref()
    }

    pub fn is_iterable(&self) -> bool {
        self.0.iterable
    }

    /// Strict subtyping: a class is not a subclass of itself.
    pub fn is_subclass_of(&self, other: &ClassRef) -> bool {
        let mut current = self.parent();
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.parent();
        }
        false
    }
}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.0.name)
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.name, f)
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ClassRef {}

impl Hash for ClassRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

/// The runtime's type registry: a read-mostly map from class names to class
/// handles, owned and populated by the caller before signatures are built.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, ClassRef>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: impl Into<String>) -> ClassRef {
        self.insert(ClassRef::new(name, None, false))
    }

    /// Defines a class whose instances support sequential iteration.
    pub fn define_iterable(&mut self, name: impl Into<String>) -> ClassRef {
        self.insert(ClassRef::new(name, None, true))
    }

    /// Defines a subclass. Iterability is inherited from the parent.
    pub fn define_subclass(&mut self, name: impl Into<String>, parent: &ClassRef) -> ClassRef {
        let iterable = parent.is_iterable();
        self.insert(ClassRef::new(name, Some(parent.clone()), iterable))
    }

    pub fn resolve(&self, name: &str) -> Option<ClassRef> {
        self.classes.get(name).cloned()
    }

    fn insert(&mut self, class: ClassRef) -> ClassRef {
        self.classes.insert(class.name().to_string(), class.clone());
        class
    }
}

#[cfg(test)]
mod test {
    use super::ClassRegistry;

    #[test]
    fn resolving_a_defined_class_yields_the_same_handle() {
        let mut registry = ClassRegistry::new();
        let shape = registry.define("Shape");
        assert_eq!(registry.resolve("Shape"), Some(shape));
    }

    #[test]
    fn resolving_an_undefined_class_yields_nothing() {
        let registry = ClassRegistry::new();
        assert_eq!(registry.resolve("Shape"), None);
    }

    #[test]
    fn classes_with_the_same_name_are_distinct_handles() {
        let mut registry = ClassRegistry::new();
        let first = registry.define("Shape");
        let second = registry.define("Shape");
        assert_ne!(first, second);
    }

    #[test]
    fn subclassing_is_strict_and_transitive() {
        let mut registry = ClassRegistry::new();
        let shape = registry.define("Shape");
        let rect = registry.define_subclass("Rect", &shape);
        let square = registry.define_subclass("Square", &rect);

        assert!(rect.is_subclass_of(&shape));
        assert!(square.is_subclass_of(&rect));
        assert!(square.is_subclass_of(&shape));

        assert!(!shape.is_subclass_of(&shape));
        assert!(!shape.is_subclass_of(&rect));
        assert!(!rect.is_subclass_of(&square));
    }

    #[test]
    fn unrelated_classes_are_not_subclasses() {
        let mut registry = ClassRegistry::new();
        let shape = registry.define("Shape");
        let color = registry.define("Color");
        assert!(!color.is_subclass_of(&shape));
        assert!(!shape.is_subclass_of(&color));
    }

    #[test]
    fn iterability_is_inherited() {
        let mut registry = ClassRegistry::new();
        let collection = registry.define_iterable("Collection");
        let list = registry.define_subclass("List", &collection);
        let plain = registry.define("Plain");

        assert!(collection.is_iterable());
        assert!(list.is_iterable());
        assert!(!plain.is_iterable());
    }
}
