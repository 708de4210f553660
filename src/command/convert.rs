//! Parameter value conversion.
//!
//! A pure mapping from one textual token (possibly absent) to a typed
//! [`ParamValue`] for one of the closed set of [`ParamType`] targets.

use crate::error::{HandbaseError, Result};

/// Target type of a parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Str,
    Bool,
    I32,
    I64,
}

impl ParamType {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ParamType::Str => "string",
            ParamType::Bool => "boolean",
            ParamType::I32 => "32-bit integer",
            ParamType::I64 => "64-bit integer",
        }
    }
}

/// A converted parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Bool(bool),
    I32(i32),
    I64(i64),
}

/// Convert a textual token into a typed value.
///
/// `token` is `None` when the flag appeared without a value token.
///
/// Conversion rules:
/// - string: identity; an absent token becomes the empty string
/// - boolean: absent, blank, or case-insensitive `"true"` is `true`;
///   every other non-blank token is `false` (presence/true-biased, not a
///   strict boolean parse)
/// - integers: strict textual parse; non-numeric or out-of-range input
///   fails with [`HandbaseError::TypeConversion`]
pub fn convert(token: Option<&str>, target: ParamType) -> Result<ParamValue> {
    match target {
        ParamType::Str => Ok(ParamValue::Str(token.unwrap_or("").to_string())),
        ParamType::Bool => {
            let value = match token {
                None => true,
                Some(t) if t.trim().is_empty() => true,
                Some(t) => t.eq_ignore_ascii_case("true"),
            };
            Ok(ParamValue::Bool(value))
        }
        ParamType::I32 => {
            let t = token.unwrap_or("");
            t.parse::<i32>()
                .map(ParamValue::I32)
                .map_err(|_| conversion_error(t, target))
        }
        ParamType::I64 => {
            let t = token.unwrap_or("");
            t.parse::<i64>()
                .map(ParamValue::I64)
                .map_err(|_| conversion_error(t, target))
        }
    }
}

fn conversion_error(token: &str, target: ParamType) -> HandbaseError {
    HandbaseError::TypeConversion {
        token: token.to_string(),
        target: target.name(),
    }
}
