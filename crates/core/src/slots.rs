//! Field storage, in its open (draft) and frozen states.
//!
//! Values are bound into open [`Slots`], the `after_initialize` hook gets a
//! [`Draft`] over them, and [`Slots::freeze`] then produces [`Frozen`] storage.
//! `Frozen` has no mutable path: every write is refused with
//! [`StructError::ImmutabilityViolation`].

use std::collections::BTreeMap;

use crate::error::{StructError, StructResult};
use crate::field::is_identifier;
use crate::struct_type::StructType;
use crate::value::Value;

#[derive(Debug)]
pub(crate) struct Slots {
    values: Vec<Value>,
    attrs: BTreeMap<String, Value>,
}

impl Slots {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self {
            values,
            attrs: BTreeMap::new(),
        }
    }

    /// Write a declared field, or record an extra attribute for any other
    /// identifier-shaped name.
    fn write(&mut self, ty: &StructType, name: &str, value: Value) -> StructResult<()> {
        match ty.field_index(name) {
            Some(i) => self.values[i] = value,
            None if is_identifier(name) => {
                self.attrs.insert(name.to_string(), value);
            }
            None => return Err(StructError::invalid_attribute(ty.name(), name)),
        }
        Ok(())
    }

    pub(crate) fn freeze(self) -> Frozen {
        Frozen {
            values: self.values.into_boxed_slice(),
            attrs: self.attrs,
        }
    }
}

/// Locked storage held by every [`Instance`](crate::Instance).
#[derive(Debug)]
pub(crate) struct Frozen {
    values: Box<[Value]>,
    attrs: BTreeMap<String, Value>,
}

impl Frozen {
    pub(crate) fn values(&self) -> &[Value] {
        &self.values
    }

    pub(crate) fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub(crate) fn write(&self, ty: &StructType, name: &str) -> StructResult<()> {
        Err(StructError::immutable(ty.name(), name))
    }
}

/// Mutable view handed to `after_initialize`.
///
/// This is the only place field values can change after binding. Names that
/// are not declared fields are kept as extra attributes, readable later through
/// [`Instance::attr`](crate::Instance::attr).
pub struct Draft<'a> {
    ty: &'a StructType,
    slots: Slots,
}

impl<'a> Draft<'a> {
    pub(crate) fn new(ty: &'a StructType, slots: Slots) -> Self {
        Self { ty, slots }
    }

    pub fn struct_type(&self) -> &StructType {
        self.ty
    }

    /// Current value of a declared field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.ty.field_index(field).map(|i| &self.slots.values[i])
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.slots.attrs.get(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> StructResult<()> {
        self.slots.write(self.ty, name, value.into())
    }

    pub(crate) fn into_slots(self) -> Slots {
        self.slots
    }
}

impl core::fmt::Debug for Draft<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Draft")
            .field("type", &self.ty.name())
            .field("values", &self.slots.values)
            .field("attrs", &self.slots.attrs)
            .finish()
    }
}
