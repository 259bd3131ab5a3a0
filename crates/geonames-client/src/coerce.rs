//! Normalisation of caller input into wire-safe values
//!
//! Coercion never fails. Unusable input becomes a sentinel, and callers
//! validate by comparing against [`EMPTY_ADDRESS`] / [`EMPTY_COORDINATE`].

use std::fmt;

/// Placeholder for empty or blank query text
pub const EMPTY_ADDRESS: &str = "";

/// Placeholder for a missing, zero or non-numeric coordinate
pub const EMPTY_COORDINATE: f64 = 0.0;

/// A coordinate as supplied by a caller
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateInput {
    Number(f64),
    Text(String),
    Missing,
}

impl From<f64> for CoordinateInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for CoordinateInput {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for CoordinateInput {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for CoordinateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CoordinateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<CoordinateInput>> From<Option<T>> for CoordinateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Stringify query text, substituting [`EMPTY_ADDRESS`] when it is blank
pub fn coerce_text(input: impl fmt::Display) -> String {
    let text = input.to_string();
    if text.trim().is_empty() {
        EMPTY_ADDRESS.to_string()
    } else {
        text
    }
}

/// Convert a coordinate to `f64`, substituting [`EMPTY_COORDINATE`] when unusable
///
/// A `,` decimal separator is accepted. The whole text must parse: a numeric
/// prefix followed by other characters (`"51.2abc"`) is unusable.
pub fn coerce_coordinate(input: impl Into<CoordinateInput>) -> f64 {
    let value = match input.into() {
        CoordinateInput::Number(n) => n,
        CoordinateInput::Text(text) => text
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .unwrap_or(f64::NAN),
        CoordinateInput::Missing => EMPTY_COORDINATE,
    };

    if value.is_finite() {
        value
    } else {
        EMPTY_COORDINATE
    }
}

pub fn is_empty_address(text: &str) -> bool {
    text == EMPTY_ADDRESS
}

pub fn is_empty_coordinate(value: f64) -> bool {
    value == EMPTY_COORDINATE
}
