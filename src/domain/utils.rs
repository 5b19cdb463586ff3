//! Argument resolution and formatting for UUID generation

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::GenerateError;

pub const DEFAULT_COUNT: usize = 1;
pub const MAX_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub uppercase: bool,
    pub hyphens: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            uppercase: false,
            hyphens: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateParams {
    pub count: usize,
    pub format: FormatOptions,
}

pub fn resolve_params(arguments: &Map<String, Value>) -> Result<GenerateParams, GenerateError> {
    Ok(GenerateParams {
        count: resolve_count(arguments.get("count"))?,
        format: FormatOptions {
            uppercase: resolve_uppercase(arguments.get("uppercase"))?,
            hyphens: resolve_hyphens(arguments.get("hyphens")),
        },
    })
}

/// Missing or falsy counts mean one; anything else is rounded up and
/// clamped to `1..=MAX_COUNT`.
pub fn resolve_count(value: Option<&Value>) -> Result<usize, GenerateError> {
    let requested = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(DEFAULT_COUNT),
        Some(Value::Number(number)) => number
            .as_f64()
            .filter(|value| !value.is_nan())
            .ok_or(GenerateError::InvalidCount)?,
        Some(_) => return Err(GenerateError::InvalidCount),
    };

    Ok(requested.ceil().clamp(1.0, MAX_COUNT as f64) as usize)
}

pub fn resolve_uppercase(value: Option<&Value>) -> Result<bool, GenerateError> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(GenerateError::InvalidUppercase),
    }
}

pub fn resolve_hyphens(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::Bool(false)))
}

pub fn format_uuid(uuid: &Uuid, options: FormatOptions) -> String {
    let formatted = if options.hyphens {
        uuid.hyphenated().to_string()
    } else {
        uuid.simple().to_string()
    };

    if options.uppercase {
        formatted.to_ascii_uppercase()
    } else {
        formatted
    }
}
