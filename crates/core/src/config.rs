//! Construction options for struct types.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`StructOptions::from_env`].
pub const VALIDATION_ENV: &str = "IMMUTABLE_STRUCT_VALIDATION";

/// How strictly constructors check their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Missing keys and short argument lists become `Nil`; extras are ignored.
    #[default]
    Permissive,
    /// Positional arity must match exactly and mapping keys must be declared.
    Strict,
}

impl FromStr for Validation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown validation mode `{other}`")),
        }
    }
}

/// Per-type options, fixed when the type is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructOptions {
    pub validation: Validation,
}

impl StructOptions {
    pub fn strict() -> Self {
        Self {
            validation: Validation::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.validation == Validation::Strict
    }

    /// Read options from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        match std::env::var(VALIDATION_ENV) {
            Ok(raw) => Self::from_env_value(&raw),
            Err(_) => Self::default(),
        }
    }

    fn from_env_value(raw: &str) -> Self {
        match raw.parse::<Validation>() {
            Ok(validation) => Self { validation },
            Err(e) => {
                tracing::warn!(var = VALIDATION_ENV, error = %e, "ignoring invalid setting; using permissive");
                Self::default()
            }
        }
    }
}
