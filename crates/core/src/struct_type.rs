//! Struct types: the factory and the constructors it produces.

use std::collections::HashMap;
use std::sync::Arc;

use crate::behavior::Behaviors;
use crate::config::StructOptions;
use crate::error::{StructError, StructResult};
use crate::field::FieldName;
use crate::instance::Instance;
use crate::slots::{Draft, Slots};
use crate::value::{Mapping, Value};

/// A reusable template for immutable instances with a fixed, ordered field list.
///
/// Cloning is cheap and yields a handle to the same type. Two separately
/// defined types are unrelated even when their field names match, and their
/// instances never compare equal.
#[derive(Clone)]
pub struct StructType {
    inner: Arc<TypeInner>,
}

struct TypeInner {
    name: String,
    fields: Vec<FieldName>,
    index: HashMap<FieldName, usize>,
    behaviors: Behaviors,
    options: StructOptions,
}

impl StructType {
    /// Define a type with no extra behaviors and default options.
    pub fn define<I, S>(name: impl Into<String>, fields: I) -> StructResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::builder(name).fields(fields).build()
    }

    pub fn builder(name: impl Into<String>) -> StructTypeBuilder {
        StructTypeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldName] {
        &self.inner.fields
    }

    pub fn width(&self) -> usize {
        self.inner.fields.len()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.inner.index.get(name).copied()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.inner.index.contains_key(name)
    }

    pub fn behaviors(&self) -> &Behaviors {
        &self.inner.behaviors
    }

    pub fn options(&self) -> &StructOptions {
        &self.inner.options
    }

    /// True when both handles refer to the same definition.
    pub fn same_type(&self, other: &StructType) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Positional form: values bind to fields in declaration order.
    ///
    /// Missing trailing values become `Nil` and surplus values are dropped
    /// without being pulled from the iterator, unless the type was defined
    /// with strict validation. A strict arity error reports at most
    /// `width + 1` values given.
    pub fn from_fields<I>(&self, values: I) -> StructResult<Instance>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let width = self.width();
        let mut bound = Vec::with_capacity(width);
        let mut given = 0;
        // One value past the width is enough to detect surplus input.
        for value in values.into_iter().take(width + 1) {
            if given < width {
                bound.push(value.into());
            }
            given += 1;
        }

        if self.options().is_strict() && given != width {
            return Err(StructError::arity(self.name(), width, given));
        }

        bound.resize(width, Value::Nil);
        self.finish(bound)
    }

    /// Mapping form: each field takes the entry under its name, or `Nil`.
    ///
    /// Undeclared keys are ignored unless the type was defined with strict
    /// validation.
    pub fn from_mapping(&self, mapping: &Mapping) -> StructResult<Instance> {
        if self.options().is_strict() {
            if let Some(key) = mapping.keys().find(|k| !self.has_field(k)) {
                return Err(StructError::unknown_field(self.name(), key.as_str()));
            }
        }

        let bound = self
            .fields()
            .iter()
            .map(|f| mapping.get(f.as_str()).cloned().unwrap_or_default())
            .collect();
        self.finish(bound)
    }

    /// Run the post-construction hook (if any), then lock.
    fn finish(&self, values: Vec<Value>) -> StructResult<Instance> {
        let mut draft = Draft::new(self, Slots::new(values));
        if let Some(hook) = self.behaviors().after_initialize() {
            tracing::trace!(struct_type = %self.name(), "running after_initialize");
            hook(&mut draft)?;
        }
        let slots = draft.into_slots().freeze();
        Ok(Instance::new(self.clone(), slots))
    }
}

impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other)
    }
}

impl Eq for StructType {}

impl core::fmt::Debug for StructType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StructType")
            .field("name", &self.name())
            .field("fields", &self.fields())
            .field("behaviors", self.behaviors())
            .field("options", self.options())
            .finish()
    }
}

/// Collects the field list, behaviors and options for a new [`StructType`].
#[derive(Debug)]
pub struct StructTypeBuilder {
    name: String,
    fields: Vec<String>,
    behaviors: Behaviors,
    options: StructOptions,
}

impl StructTypeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            behaviors: Behaviors::default(),
            options: StructOptions::default(),
        }
    }

    pub fn field(mut self, name: impl AsRef<str>) -> Self {
        self.fields.push(name.as_ref().to_string());
        self
    }

    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fields
            .extend(names.into_iter().map(|n| n.as_ref().to_string()));
        self
    }

    /// Add an extra method. A method named like a field shadows that field's
    /// reader in [`Instance::call`].
    pub fn method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> StructResult<Value> + Send + Sync + 'static,
    {
        self.behaviors.insert_method(name, method);
        self
    }

    pub fn after_initialize<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Draft<'_>) -> StructResult<()> + Send + Sync + 'static,
    {
        self.behaviors.set_after_initialize(hook);
        self
    }

    pub fn options(mut self, options: StructOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate every field name and produce the type.
    ///
    /// All names are checked before failing, so the error lists each invalid
    /// or duplicated name at once.
    pub fn build(self) -> StructResult<StructType> {
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut index = HashMap::with_capacity(self.fields.len());
        let mut rejected = Vec::new();

        for raw in &self.fields {
            match FieldName::parse(raw) {
                Some(field) if !index.contains_key(&field) => {
                    index.insert(field.clone(), fields.len());
                    fields.push(field);
                }
                _ => rejected.push(raw.clone()),
            }
        }

        if !rejected.is_empty() {
            tracing::warn!(struct_type = %self.name, rejected = ?rejected, "struct type rejected");
            return Err(StructError::configuration(self.name, rejected));
        }

        tracing::debug!(
            struct_type = %self.name,
            fields = fields.len(),
            methods = self.behaviors.method_names().len(),
            "struct type defined"
        );

        Ok(StructType {
            inner: Arc::new(TypeInner {
                name: self.name,
                fields,
                index,
                behaviors: self.behaviors,
                options: self.options,
            }),
        })
    }
}
