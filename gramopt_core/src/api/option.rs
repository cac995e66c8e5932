use std::fmt;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{CustomValidator, Rules};
use crate::model::{DefaultValue, Value, ValueMode, ValueType};
use crate::validate::{self, ValueError};

/// One registered option: its identity, rules, and the value accumulated from the command line.
#[derive(Clone)]
pub struct CliOption {
    name: String,
    synonyms: Vec<String>,
    value_type: ValueType,
    required: bool,
    mode: ValueMode,
    default: Option<DefaultValue>,
    validator: Option<CustomValidator>,
    help: Option<String>,
    value: Option<Value>,
}

impl CliOption {
    /// Create an option from its rules.
    /// Unset rules take the defaults: string type, not required, no value, no default, no synonyms.
    pub fn new(name: impl Into<String>, rules: Rules) -> Self {
        let Rules {
            value_type,
            required,
            mode,
            default,
            synonyms,
            validator,
            help,
        } = rules;

        Self {
            name: name.into(),
            synonyms: synonyms.unwrap_or_default(),
            value_type: value_type.unwrap_or_default(),
            required: required.unwrap_or(false),
            mode: mode.unwrap_or_default(),
            default,
            validator,
            help,
            value: None,
        }
    }

    /// The primary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The synonyms, in declaration order.
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    /// The primary name followed by every synonym.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }

    /// The declared value type.
    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// Whether the option takes no value, an optional value, or a required value.
    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    /// The default, or the enum choices, of the value.
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// The help text.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Whether the option must appear on the command line.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the option takes a value (optional or required).
    pub fn need_value(&self) -> bool {
        self.mode.takes_value()
    }

    /// Whether the option's value may not be omitted.
    pub fn is_value_required(&self) -> bool {
        matches!(self.mode, ValueMode::Required)
    }

    /// The accumulated value, or `None` if the option has not been set.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Clear the accumulated value.
    pub fn reset_value(&mut self) {
        self.value = None;
    }

    /// Accept a value for this option.
    ///
    /// When `separator` is present in `raw`, each (trimmed) piece is accepted individually.
    /// Otherwise the value is resolved against the default/enum, checked against the type, and accumulated:
    /// the first value is stored as [`Value::Single`], repeats promote the storage to [`Value::Multiple`].
    pub(crate) fn set_value(&mut self, raw: &str, separator: Option<char>) -> Result<(), ValueError> {
        if let Some(separator) = separator {
            if raw.contains(separator) {
                for piece in raw.split(separator) {
                    self.set_value(piece.trim(), None)?;
                }

                return Ok(());
            }
        }

        let value = validate::resolve_default(&self.name, self.mode, self.default.as_ref(), raw)?;

        // A flag carries no typed value, and neither does an optional value that was omitted.
        let checked = !self.need_value() || (value.is_empty() && !self.is_value_required());

        if !checked && !validate::check_type(&self.value_type, self.validator.as_ref(), &value) {
            return Err(ValueError::InvalidType {
                name: self.name.clone(),
                value,
                value_type: self.value_type.to_string(),
            });
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Option '{}' accepted value '{value}'.", self.name);
        }

        self.value = Some(match self.value.take() {
            None => Value::Single(value),
            Some(existing) => existing.push(value),
        });

        Ok(())
    }
}

impl fmt::Debug for CliOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliOption")
            .field("name", &self.name)
            .field("synonyms", &self.synonyms)
            .field("value_type", &self.value_type)
            .field("required", &self.required)
            .field("mode", &self.mode)
            .field("default", &self.default)
            .field("value", &self.value)
            .finish()
    }
}
