//! Rule option declarations and validation.
//!
//! Rules declare their options with [`OptionDecl`]. Before a rule runs, the
//! caller-supplied values from config are checked against those declarations
//! and merged with defaults into [`ResolvedOptions`]. Rules then read typed
//! values; a type or bounds problem surfaces as an [`OptionError`] before any
//! traversal starts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Primitive kind of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionKind {
    /// Any finite number.
    Number,
    /// Whole number.
    Integer,
    /// List of strings.
    StringArray,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Integer => write!(f, "integer"),
            Self::StringArray => write!(f, "string array"),
        }
    }
}

/// A resolved option value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Whole number.
    Integer(i64),
    /// Any finite number.
    Number(f64),
    /// List of strings.
    StringArray(Vec<String>),
}

impl OptionValue {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Integer(_) => OptionKind::Integer,
            Self::Number(_) => OptionKind::Number,
            Self::StringArray(_) => OptionKind::StringArray,
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringArray(value)
    }
}

/// Option validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionError {
    /// Config sets an option the rule does not declare.
    #[error("unknown option `{name}`")]
    Unknown {
        /// Option name.
        name: String,
    },

    /// Value has the wrong primitive type.
    #[error("option `{name}` expects {expected}, found {found}")]
    TypeMismatch {
        /// Option name.
        name: String,
        /// Declared kind.
        expected: OptionKind,
        /// Type of the supplied value.
        found: String,
    },

    /// Value is below the declared minimum.
    #[error("option `{name}` must be at least {minimum}, got {value}")]
    BelowMinimum {
        /// Option name.
        name: String,
        /// Declared minimum.
        minimum: f64,
        /// Supplied value.
        value: f64,
    },

    /// Value is above the declared maximum.
    #[error("option `{name}` must be at most {maximum}, got {value}")]
    AboveMaximum {
        /// Option name.
        name: String,
        /// Declared maximum.
        maximum: f64,
        /// Supplied value.
        value: f64,
    },

    /// Rule asked for a scalar option that has neither a value nor a default.
    #[error("option `{name}` has no value and no default")]
    Missing {
        /// Option name.
        name: String,
    },
}

/// Declaration of one named rule option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDecl {
    /// Option name as used in config.
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// What the option controls.
    pub description: &'static str,
    /// Primitive kind.
    pub kind: OptionKind,
    /// Value used when config does not set one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<OptionValue>,
    /// Inclusive lower bound for numeric kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numeric kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

impl OptionDecl {
    fn new(
        name: &'static str,
        title: &'static str,
        description: &'static str,
        kind: OptionKind,
    ) -> Self {
        Self {
            name,
            title,
            description,
            kind,
            default_value: None,
            minimum: None,
            maximum: None,
        }
    }

    /// Declares a number option.
    #[must_use]
    pub fn number(name: &'static str, title: &'static str, description: &'static str) -> Self {
        Self::new(name, title, description, OptionKind::Number)
    }

    /// Declares an integer option.
    #[must_use]
    pub fn integer(name: &'static str, title: &'static str, description: &'static str) -> Self {
        Self::new(name, title, description, OptionKind::Integer)
    }

    /// Declares a string array option.
    #[must_use]
    pub fn string_array(
        name: &'static str,
        title: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, title, description, OptionKind::StringArray)
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Validates a raw config value against this declaration.
    ///
    /// Integers are accepted for number options, and floats without a
    /// fractional part for integer options.
    ///
    /// # Errors
    ///
    /// Returns an error on type mismatch or when a bound is violated.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn coerce(&self, raw: &toml::Value) -> Result<OptionValue, OptionError> {
        let mismatch = || OptionError::TypeMismatch {
            name: self.name.to_string(),
            expected: self.kind,
            found: raw.type_str().to_string(),
        };

        let value = match (self.kind, raw) {
            (OptionKind::Number, toml::Value::Integer(i)) => OptionValue::Number(*i as f64),
            (OptionKind::Number, toml::Value::Float(f)) if f.is_finite() => {
                OptionValue::Number(*f)
            }
            (OptionKind::Integer, toml::Value::Integer(i)) => OptionValue::Integer(*i),
            (OptionKind::Integer, toml::Value::Float(f)) if f.is_finite() && f.fract() == 0.0 => {
                OptionValue::Integer(*f as i64)
            }
            (OptionKind::StringArray, toml::Value::Array(items)) => OptionValue::StringArray(
                items
                    .iter()
                    .map(|item| item.as_str().map(String::from))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(mismatch)?,
            ),
            _ => return Err(mismatch()),
        };

        self.check_bounds(&value)?;
        Ok(value)
    }

    #[allow(clippy::cast_precision_loss)]
    fn check_bounds(&self, value: &OptionValue) -> Result<(), OptionError> {
        let number = match value {
            OptionValue::Integer(i) => *i as f64,
            OptionValue::Number(n) => *n,
            OptionValue::StringArray(_) => return Ok(()),
        };
        if let Some(minimum) = self.minimum {
            if number < minimum {
                return Err(OptionError::BelowMinimum {
                    name: self.name.to_string(),
                    minimum,
                    value: number,
                });
            }
        }
        if let Some(maximum) = self.maximum {
            if number > maximum {
                return Err(OptionError::AboveMaximum {
                    name: self.name.to_string(),
                    maximum,
                    value: number,
                });
            }
        }
        Ok(())
    }
}

/// Effective option values for one rule invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOptions {
    values: BTreeMap<String, OptionValue>,
}

impl ResolvedOptions {
    /// Creates an empty set of options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges config overrides with declared defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is undeclared or fails validation.
    pub fn resolve(
        decls: &[OptionDecl],
        overrides: &BTreeMap<String, toml::Value>,
    ) -> Result<Self, OptionError> {
        if let Some(name) = overrides
            .keys()
            .find(|key| !decls.iter().any(|decl| decl.name == key.as_str()))
        {
            return Err(OptionError::Unknown { name: name.clone() });
        }

        let mut values = BTreeMap::new();
        for decl in decls {
            let value = match overrides.get(decl.name) {
                Some(raw) => decl.coerce(raw)?,
                None => match &decl.default_value {
                    Some(default) => default.clone(),
                    None => continue,
                },
            };
            values.insert(decl.name.to_string(), value);
        }
        Ok(Self { values })
    }

    /// Returns the raw value of an option, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Reads an integer option.
    ///
    /// # Errors
    ///
    /// Returns an error if the option is unset or not an integer.
    pub fn integer(&self, name: &str) -> Result<i64, OptionError> {
        match self.values.get(name) {
            Some(OptionValue::Integer(i)) => Ok(*i),
            Some(other) => Err(Self::mismatch(name, OptionKind::Integer, other)),
            None => Err(OptionError::Missing {
                name: name.to_string(),
            }),
        }
    }

    /// Reads a number option. Integer values widen to `f64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the option is unset or not numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn number(&self, name: &str) -> Result<f64, OptionError> {
        match self.values.get(name) {
            Some(OptionValue::Number(n)) => Ok(*n),
            Some(OptionValue::Integer(i)) => Ok(*i as f64),
            Some(other) => Err(Self::mismatch(name, OptionKind::Number, other)),
            None => Err(OptionError::Missing {
                name: name.to_string(),
            }),
        }
    }

    /// Reads a string array option. An unset list is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the option holds a non-array value.
    pub fn string_array(&self, name: &str) -> Result<&[String], OptionError> {
        match self.values.get(name) {
            Some(OptionValue::StringArray(items)) => Ok(items),
            Some(other) => Err(Self::mismatch(name, OptionKind::StringArray, other)),
            None => Ok(&[]),
        }
    }

    fn mismatch(name: &str, expected: OptionKind, found: &OptionValue) -> OptionError {
        OptionError::TypeMismatch {
            name: name.to_string(),
            expected,
            found: found.kind().to_string(),
        }
    }
}
