//! `immutable-struct-core` — immutable value-object types defined at runtime.
//!
//! A [`StructType`] is defined from an ordered list of field names (plus
//! optional extra methods and an `after_initialize` hook) and mints locked
//! [`Instance`]s, either positionally or from a [`Mapping`]:
//!
//! ```
//! use immutable_struct_core::{mapping, StructType, Value};
//!
//! let person = StructType::define("Person", ["name", "email"])?;
//! let adam = person.from_fields(["Adam", "adam@example.com"])?;
//! let alias = adam.merge(&mapping! { "email" => "alias@example.com" })?;
//!
//! assert_eq!(alias.get("name"), Some(&Value::from("Adam")));
//! assert_eq!(adam.to_string(), r#"<Person "Adam","adam@example.com">"#);
//! # Ok::<(), immutable_struct_core::StructError>(())
//! ```

pub mod behavior;
pub mod config;
pub mod error;
pub mod field;
pub mod instance;
mod slots;
pub mod struct_type;
pub mod value;
pub mod value_object;

pub use behavior::Behaviors;
pub use config::{StructOptions, Validation};
pub use error::{StructError, StructResult};
pub use field::FieldName;
pub use instance::Instance;
pub use slots::Draft;
pub use struct_type::{StructType, StructTypeBuilder};
pub use value::{Mapping, Value};
pub use value_object::ValueObject;
