//! Locked struct instances.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{StructError, StructResult};
use crate::field::FieldName;
use crate::slots::Frozen;
use crate::struct_type::StructType;
use crate::value::{Mapping, Value};

/// An immutable value holding one [`Value`] per field of its [`StructType`].
///
/// Instances compare and hash by their field values, in declaration order.
/// Cloning shares the underlying storage.
#[derive(Clone)]
pub struct Instance {
    ty: StructType,
    slots: Arc<Frozen>,
}

impl Instance {
    pub(crate) fn new(ty: StructType, slots: Frozen) -> Self {
        Self {
            ty,
            slots: Arc::new(slots),
        }
    }

    pub fn struct_type(&self) -> &StructType {
        &self.ty
    }

    /// Reader for a declared field. `None` if the type has no such field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.ty.field_index(field).map(|i| &self.slots.values()[i])
    }

    /// Reader for an attribute computed by `after_initialize`.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.slots.attr(name)
    }

    /// Field values in declaration order, borrowed.
    pub fn values(&self) -> &[Value] {
        self.slots.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.ty.fields().iter().zip(self.slots.values())
    }

    /// Invoke an extra method, falling back to the field reader of that name.
    pub fn call(&self, method: &str, args: &[Value]) -> StructResult<Value> {
        if let Some(m) = self.ty.behaviors().method(method) {
            return m(self, args);
        }
        self.get(method)
            .cloned()
            .ok_or_else(|| StructError::unknown_method(self.ty.name(), method))
    }

    /// Attempt to write a field. Instances are locked, so this always fails
    /// with [`StructError::ImmutabilityViolation`].
    pub fn set(&self, name: &str, _value: impl Into<Value>) -> StructResult<()> {
        self.slots.write(&self.ty, name)
    }

    /// Functional update: a new instance with `overrides` laid over this one.
    ///
    /// The result goes through mapping-form construction, so the
    /// `after_initialize` hook runs again.
    pub fn merge(&self, overrides: &Mapping) -> StructResult<Instance> {
        let mut merged = self.to_mapping();
        merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.ty.from_mapping(&merged)
    }

    /// Fresh field-name to value snapshot.
    pub fn to_mapping(&self) -> Mapping {
        self.iter()
            .map(|(field, value)| (field.to_string(), value.clone()))
            .collect()
    }

    /// Fresh copy of the field values in declaration order.
    pub fn to_values(&self) -> Vec<Value> {
        self.slots.values().to_vec()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.ty.same_type(&other.ty) && self.values() == other.values()
    }
}

impl Eq for Instance {}

impl Hash for Instance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values().hash(state);
    }
}

/// Renders `<TypeName v1,v2,...>` with each value in its inspect form.
impl core::fmt::Display for Instance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<{} ", self.ty.name())?;
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value:?}")?;
        }
        f.write_str(">")
    }
}

impl core::fmt::Debug for Instance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}
