//! Value checks applied when an option accepts a value.
use std::path::Path;
use thiserror::Error;

use crate::api::CustomValidator;
use crate::model::{DefaultValue, ValueMode, ValueType};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ValueError {
    #[error("Option '{0}' requires a value.")]
    ValueRequired(String),

    #[error("Option '{name}' cannot accept '{value}' as type '{value_type}'.")]
    InvalidType {
        name: String,
        value: String,
        value_type: String,
    },

    #[error("Option '{name}' cannot accept '{value}' (expected one of {choices:?}).")]
    InvalidValue {
        name: String,
        value: String,
        choices: Vec<String>,
    },
}

/// Resolve the raw value against the option's default.
///
/// An omitted (empty) value falls back to the default, or to the first choice of an enum default.
/// A supplied value must be one of the choices of an enum default.
pub(crate) fn resolve_default(
    name: &str,
    mode: ValueMode,
    default: Option<&DefaultValue>,
    raw: &str,
) -> Result<String, ValueError> {
    if !mode.takes_value() {
        return Ok(raw.to_string());
    }

    match (default, raw.is_empty()) {
        (Some(default), true) => Ok(default.fallback().to_string()),
        (None, true) => match mode {
            ValueMode::Required => Err(ValueError::ValueRequired(name.to_string())),
            _ => Ok(String::default()),
        },
        (Some(DefaultValue::Choices(choices)), false) => {
            if choices.iter().any(|choice| choice == raw) {
                Ok(raw.to_string())
            } else {
                Err(ValueError::InvalidValue {
                    name: name.to_string(),
                    value: raw.to_string(),
                    choices: choices.clone(),
                })
            }
        }
        (Some(DefaultValue::Scalar(_)) | None, false) => Ok(raw.to_string()),
    }
}

/// Check a (resolved) value against the declared type.
pub(crate) fn check_type(
    value_type: &ValueType,
    validator: Option<&CustomValidator>,
    value: &str,
) -> bool {
    match value_type {
        ValueType::String => true,
        ValueType::Integer => is_integer(value),
        ValueType::Number => is_numeric(value),
        ValueType::DirRead => {
            let path = Path::new(value);
            path.is_dir() && accessible(path, Access::Read)
        }
        ValueType::DirWrite => {
            let path = Path::new(value);
            path.is_dir() && accessible(path, Access::Write)
        }
        ValueType::FileRead => {
            let path = Path::new(value);
            path.is_file() && accessible(path, Access::Read)
        }
        ValueType::FileWrite => {
            let path = Path::new(value);

            if path.is_file() {
                accessible(path, Access::Write)
            } else if path.exists() || value.is_empty() {
                // An existing directory is never a writable file.
                false
            } else {
                // Not created yet; the enclosing directory decides.
                let parent = match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };
                parent.is_dir() && accessible(parent, Access::Write)
            }
        }
        ValueType::Custom(code) => match validator {
            Some(validator) => validator(value, code),
            None => false,
        },
    }
}

/// Whether the value is a numeric string: an optionally signed decimal, with optional fraction and exponent.
/// Surrounding whitespace is allowed.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();

    if trimmed.is_empty() || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    // Restricting the alphabet excludes the float spellings "inf" and "NaN".
    trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && trimmed.parse::<f64>().is_ok()
}

/// Whether the value is a numeric string that equals its own integer truncation (ex: `12`, `1.0`, `1e3`).
pub fn is_integer(value: &str) -> bool {
    if !is_numeric(value) {
        return false;
    }

    match value.trim().parse::<f64>() {
        Ok(number) => number.is_finite() && number.fract() == 0.0,
        Err(_) => false,
    }
}

#[derive(Debug, Clone, Copy)]
enum Access {
    Read,
    Write,
}

#[cfg(unix)]
fn accessible(path: &Path, access: Access) -> bool {
    use nix::unistd::AccessFlags;

    let flags = match access {
        Access::Read => AccessFlags::R_OK,
        Access::Write => AccessFlags::W_OK,
    };
    nix::unistd::access(path, flags).is_ok()
}

#[cfg(not(unix))]
fn accessible(path: &Path, access: Access) -> bool {
    match (std::fs::metadata(path), access) {
        (Ok(_), Access::Read) => true,
        (Ok(metadata), Access::Write) => !metadata.permissions().readonly(),
        (Err(_), _) => false,
    }
}
