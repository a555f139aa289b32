//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. [`Instance`] is the crate's value object; the trait also
//! lets callers write code generic over hand-written value types.

use crate::error::StructResult;
use crate::instance::Instance;
use crate::value::{Mapping, Value};

/// Immutable, compared-by-value objects that can be flattened and rebuilt.
///
/// ## Immutability
///
/// Once created a value object never changes. To "modify" one, derive a new
/// value with [`ValueObject::with`]. Implementations must stay `Send + Sync`
/// so locked values can be shared across threads without synchronization.
///
/// ## Equality and hashing
///
/// `Eq` and `Hash` must agree: equal values hash equally, which makes value
/// objects usable as `HashMap`/`HashSet` keys.
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug + Send + Sync {
    /// Field values in a stable order.
    fn to_values(&self) -> Vec<Value>;

    /// Field-name to value snapshot.
    fn to_mapping(&self) -> Mapping;

    /// A new value with `overrides` applied; `self` is untouched.
    fn with(&self, overrides: &Mapping) -> StructResult<Self>;
}

impl ValueObject for Instance {
    fn to_values(&self) -> Vec<Value> {
        Instance::to_values(self)
    }

    fn to_mapping(&self) -> Mapping {
        Instance::to_mapping(self)
    }

    fn with(&self, overrides: &Mapping) -> StructResult<Self> {
        self.merge(overrides)
    }
}
