//! Design tokens for the style system
//!
//! Tokens are the atomic named values of a design vocabulary:
//! - Colors
//! - Spacing (margins, padding)
//! - Border radii
//!
//! Style declarations reference tokens by name; unresolved names fall back
//! to the literal value so token tables never need to be exhaustive.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single style property value.
///
/// Declarations and resolved styles are untyped at the property level:
/// a value is a bool, a number, or a string (which may be a token name,
/// a raw color, or any literal the renderer understands).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    Str(String),
}

impl StyleValue {
    /// The token name carried by this value, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

// Display is part of the cache-key contract: inline overrides are keyed
// by `property=value`, so formatting must be stable across calls.
impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Complete set of design tokens for one theme.
///
/// Maps keep declaration order. Tokens are immutable once a schema is
/// built; swapping tokens means building a new schema and handing it to
/// the resolution context (see `ResolutionContext::set_schema`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    /// Named colors, e.g. `"accent" -> "#7287fd"`.
    pub colors: IndexMap<String, String>,
    /// Named spacing steps; values may be numbers or strings (`"50%"`).
    pub spacing: IndexMap<String, StyleValue>,
    /// Named border radii in logical pixels.
    pub border_radii: IndexMap<String, f64>,
}

impl ThemeTokens {
    /// Look up a color token by name.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Look up a spacing token by name.
    pub fn spacing(&self, name: &str) -> Option<&StyleValue> {
        self.spacing.get(name)
    }

    /// Look up a border-radius token by name.
    pub fn radius(&self, name: &str) -> Option<f64> {
        self.border_radii.get(name).copied()
    }
}
