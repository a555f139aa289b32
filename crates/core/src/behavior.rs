//! User-supplied behaviors attached to a struct type.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::StructResult;
use crate::instance::Instance;
use crate::slots::Draft;
use crate::value::Value;

/// An extra method: read access to the receiver plus call arguments.
pub type Method = Arc<dyn Fn(&Instance, &[Value]) -> StructResult<Value> + Send + Sync>;

/// Post-construction hook, run once per instance before it is locked.
pub type AfterInitialize = Arc<dyn Fn(&mut Draft<'_>) -> StructResult<()> + Send + Sync>;

#[derive(Clone, Default)]
pub struct Behaviors {
    methods: HashMap<String, Method>,
    after_initialize: Option<AfterInitialize>,
}

impl Behaviors {
    /// Add a method, replacing any earlier one of the same name.
    pub fn insert_method<F>(&mut self, name: impl Into<String>, method: F)
    where
        F: Fn(&Instance, &[Value]) -> StructResult<Value> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
    }

    pub fn set_after_initialize<F>(&mut self, hook: F)
    where
        F: Fn(&mut Draft<'_>) -> StructResult<()> + Send + Sync + 'static,
    {
        self.after_initialize = Some(Arc::new(hook));
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn after_initialize(&self) -> Option<&AfterInitialize> {
        self.after_initialize.as_ref()
    }

    /// Sorted method names.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl core::fmt::Debug for Behaviors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Behaviors")
            .field("methods", &self.method_names())
            .field("after_initialize", &self.after_initialize.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_methods_replace_earlier_ones() {
        let mut behaviors = Behaviors::default();
        behaviors.insert_method("size", |_, _| Ok(Value::Int(1)));
        behaviors.insert_method("size", |_, _| Ok(Value::Int(2)));
        behaviors.insert_method("area", |_, _| Ok(Value::Nil));

        assert_eq!(behaviors.method_names(), vec!["area", "size"]);
        assert!(behaviors.after_initialize().is_none());
    }

    #[test]
    fn debug_lists_method_names() {
        let mut behaviors = Behaviors::default();
        behaviors.insert_method("b", |_, _| Ok(Value::Nil));
        behaviors.set_after_initialize(|_| Ok(()));
        assert_eq!(
            format!("{behaviors:?}"),
            r#"Behaviors { methods: ["b"], after_initialize: true }"#
        );
    }
}
