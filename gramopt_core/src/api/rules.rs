use std::fmt;
use std::sync::Arc;

use crate::model::{DefaultValue, ValueMode, ValueType};

/// Checks a value against a custom type: `(value, type_code) -> accepted`.
pub type CustomValidator = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// The rules describing one option.
///
/// Every field is optional; an unset field falls back to the option default
/// (string type, not required, no value, no default, no synonyms).
/// Rules are layered via [`Rules::overlay`], where the fields set on the upper layer win.
///
/// ### Example
/// ```
/// # use gramopt_core as gramopt;
/// use gramopt::{Rules, ValueMode, ValueType};
///
/// let rules = Rules::new()
///     .value_type(ValueType::Integer)
///     .mode(ValueMode::Required)
///     .synonyms(["count"])
///     .help("How many times to repeat.");
/// ```
#[derive(Clone, Default)]
pub struct Rules {
    pub(crate) value_type: Option<ValueType>,
    pub(crate) required: Option<bool>,
    pub(crate) mode: Option<ValueMode>,
    pub(crate) default: Option<DefaultValue>,
    pub(crate) synonyms: Option<Vec<String>>,
    pub(crate) validator: Option<CustomValidator>,
    pub(crate) help: Option<String>,
}

impl Rules {
    /// Create empty rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the value type.
    pub fn value_type(mut self, value_type: impl Into<ValueType>) -> Self {
        self.value_type.replace(value_type.into());
        self
    }

    /// Declare whether the option must appear on the command line.
    pub fn required(mut self, required: bool) -> Self {
        self.required.replace(required);
        self
    }

    /// Declare whether the option takes a value.
    pub fn mode(mut self, mode: ValueMode) -> Self {
        self.mode.replace(mode);
        self
    }

    /// Declare the default (or enum choices) for the value.
    pub fn default_value(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default.replace(default.into());
        self
    }

    /// Declare the synonyms, replacing any previously declared.
    pub fn synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms
            .replace(synonyms.into_iter().map(Into::into).collect());
        self
    }

    /// Declare the validator used for custom value types.
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        self.validator.replace(Arc::new(validator));
        self
    }

    /// Document the option.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help.replace(help.into());
        self
    }

    /// Layer `upper` on top of these rules: each field set in `upper` replaces the field here.
    pub fn overlay(&self, upper: &Rules) -> Rules {
        Rules {
            value_type: upper.value_type.clone().or_else(|| self.value_type.clone()),
            required: upper.required.or(self.required),
            mode: upper.mode.or(self.mode),
            default: upper.default.clone().or_else(|| self.default.clone()),
            synonyms: upper.synonyms.clone().or_else(|| self.synonyms.clone()),
            validator: upper.validator.clone().or_else(|| self.validator.clone()),
            help: upper.help.clone().or_else(|| self.help.clone()),
        }
    }
}

/// Validators compare by identity: rules are equal only when they share the same validator.
impl PartialEq for Rules {
    fn eq(&self, other: &Self) -> bool {
        let same_validator = match (&self.validator, &other.validator) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };

        same_validator
            && self.value_type == other.value_type
            && self.required == other.required
            && self.mode == other.mode
            && self.default == other.default
            && self.synonyms == other.synonyms
            && self.help == other.help
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("value_type", &self.value_type)
            .field("required", &self.required)
            .field("mode", &self.mode)
            .field("default", &self.default)
            .field("synonyms", &self.synonyms)
            .field("validator", &self.validator.as_ref().map(|_| ".."))
            .field("help", &self.help)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_upper_wins() {
        let shared = Rules::new()
            .value_type("i")
            .default_value("1")
            .help("shared");
        let fragment = Rules::new()
            .required(true)
            .mode(ValueMode::Optional)
            .default_value("2");

        let rules = shared.overlay(&fragment);

        assert_eq!(rules.value_type, Some(ValueType::Integer));
        assert_eq!(rules.required, Some(true));
        assert_eq!(rules.mode, Some(ValueMode::Optional));
        assert_eq!(rules.default, Some(DefaultValue::from("2")));
        assert_eq!(rules.help.as_deref(), Some("shared"));
        assert!(rules.synonyms.is_none());
    }

    #[test]
    fn overlay_keeps_validator() {
        let shared = Rules::new().validator(|value, _| value == "ok");
        let rules = shared.overlay(&Rules::new().value_type("custom"));

        let validator = rules.validator.unwrap();
        assert!(validator("ok", "custom"));
        assert!(!validator("nope", "custom"));
    }

    #[test]
    fn equality() {
        let shared = Rules::new().help("x").validator(|_, _| true);

        assert_eq!(Rules::new(), Rules::default());
        assert_eq!(Rules::new().help("x"), Rules::new().help("x"));
        assert_ne!(Rules::new().help("x"), Rules::new().help("y"));
        assert_eq!(shared, shared.clone());
        assert_ne!(shared, Rules::new().help("x").validator(|_, _| true));
        assert_ne!(shared, Rules::new().help("x"));
    }

    #[test]
    fn debug_hides_validator() {
        assert_eq!(
            format!("{:?}", Rules::new().validator(|_, _| true)),
            "Rules { value_type: None, required: None, mode: None, default: None, synonyms: None, validator: Some(\"..\"), help: None }"
        );
    }
}
