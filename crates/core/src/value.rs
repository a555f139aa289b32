//! Dynamically-typed field values.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Field-name to value mapping used by mapping-form construction and `merge`.
pub type Mapping = BTreeMap<String, Value>;

/// A single field value.
///
/// `Nil` doubles as the "absent" sentinel for fields that were not supplied.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Symbol(String),
    List(Vec<Value>),
}

impl Value {
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Text of a `Str` or `Symbol`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

// Zeroes and NaNs collapse to one bit pattern each so Eq and Hash stay consistent.
fn float_key(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => float_key(*a) == float_key(*b),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(v) => float_key(*v).hash(state),
            Self::Str(s) | Self::Symbol(s) => s.hash(state),
            Self::List(items) => items.hash(state),
        }
    }
}

/// Inspect form: strings quoted, symbols prefixed with `:`.
impl core::fmt::Debug for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Symbol(s) => write!(f, ":{s}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Plain form: strings and symbols render bare, nil renders empty.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Nil => Ok(()),
            Self::Str(s) | Self::Symbol(s) => f.write_str(s),
            other => write!(f, "{other:?}"),
        }
    }
}

macro_rules! impl_value_from {
    ($($t:ty => $variant:ident via $conv:expr),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant($conv(value))
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Bool via core::convert::identity,
    i64 => Int via core::convert::identity,
    i32 => Int via i64::from,
    u32 => Int via i64::from,
    f64 => Float via core::convert::identity,
    String => Str via core::convert::identity,
    &str => Str via str::to_string,
    &String => Str via String::clone,
);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

/// Build a [`Mapping`] from `key => value` pairs.
///
/// ```
/// use immutable_struct_core::{mapping, Value};
///
/// let m = mapping! { "name" => "Ada", "age" => 36 };
/// assert_eq!(m["age"], Value::Int(36));
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Mapping::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut m = $crate::Mapping::new();
        $(
            m.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        m
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: &Value) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn debug_uses_inspect_form() {
        assert_eq!(format!("{:?}", Value::Nil), "nil");
        assert_eq!(format!("{:?}", Value::from("A")), "\"A\"");
        assert_eq!(format!("{:?}", Value::from(42)), "42");
        assert_eq!(format!("{:?}", Value::from(1.0)), "1.0");
        assert_eq!(format!("{:?}", Value::symbol("ok")), ":ok");
        assert_eq!(
            format!("{:?}", Value::from(vec![Value::from(1), Value::from("a")])),
            "[1, \"a\"]"
        );
    }

    #[test]
    fn display_uses_plain_form() {
        assert_eq!(Value::from("A").to_string(), "A");
        assert_eq!(Value::symbol("ok").to_string(), "ok");
        assert_eq!(Value::Nil.to_string(), "");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn signed_zeroes_are_equal_and_hash_alike() {
        let pos = Value::Float(0.0);
        let neg = Value::Float(-0.0);
        assert_eq!(pos, neg);
        assert_eq!(hash_of(&pos), hash_of(&neg));
    }

    #[test]
    fn nan_is_reflexive() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_eq!(hash_of(&nan), hash_of(&Value::Float(-f64::NAN)));
    }

    #[test]
    fn variants_never_cross_compare() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::from("a"), Value::symbol("a"));
        assert_ne!(Value::Nil, Value::from(false));
    }

    #[test]
    fn accessors_match_only_their_variant() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(1).as_bool(), None);
        assert_eq!(Value::from(2.5).as_float(), Some(2.5));
        assert_eq!(Value::from(2).as_float(), None);
        assert_eq!(Value::from(7).as_int(), Some(7));
        assert_eq!(Value::symbol("s").as_str(), Some("s"));

        let list = Value::from(vec![1, 2]);
        assert_eq!(list.as_list(), Some(&[Value::Int(1), Value::Int(2)][..]));
        assert_eq!(Value::from("12").as_list(), None);
    }

    #[test]
    fn option_none_converts_to_nil() {
        assert!(Value::from(None::<i64>).is_nil());
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn mapping_macro_builds_owned_keys() {
        let m = mapping! { "a" => 1, "b" => "two" };
        assert_eq!(m.len(), 2);
        assert_eq!(m["b"].as_str(), Some("two"));
        assert!(mapping!().is_empty());
    }
}
