use std::fmt;

/// The declared type of an option's value.
///
/// Grammar codes: `s` string, `i` integer, `n` number, `d` readable directory, `D` writable directory,
/// `f` readable file, `F` writable file.
/// Any other code is a custom type, checked by the option's [`CustomValidator`](crate::CustomValidator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    /// `s`: any string.
    #[default]
    String,
    /// `i`: a numeric string equal to its integer truncation.
    Integer,
    /// `n`: any numeric string.
    Number,
    /// `d`: an existing, readable directory.
    DirRead,
    /// `D`: an existing, writable directory.
    DirWrite,
    /// `f`: an existing, readable file.
    FileRead,
    /// `F`: a writable file, or a file that may be created in a writable directory.
    FileWrite,
    /// Any other code, routed to the custom validator.
    Custom(String),
}

impl ValueType {
    /// Resolve a grammar type code.
    /// The empty code is a string.
    pub fn from_code(code: &str) -> Self {
        match code {
            "" | "s" => ValueType::String,
            "i" => ValueType::Integer,
            "n" => ValueType::Number,
            "d" => ValueType::DirRead,
            "D" => ValueType::DirWrite,
            "f" => ValueType::FileRead,
            "F" => ValueType::FileWrite,
            other => ValueType::Custom(other.to_string()),
        }
    }

    /// The grammar type code.
    pub fn code(&self) -> &str {
        match self {
            ValueType::String => "s",
            ValueType::Integer => "i",
            ValueType::Number => "n",
            ValueType::DirRead => "d",
            ValueType::DirWrite => "D",
            ValueType::FileRead => "f",
            ValueType::FileWrite => "F",
            ValueType::Custom(code) => code,
        }
    }
}

impl From<&str> for ValueType {
    fn from(code: &str) -> Self {
        ValueType::from_code(code)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Whether an option takes a value at all, and if so whether it may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueMode {
    /// A flag: no value is taken.
    #[default]
    None,
    /// `::` - a value may follow.
    Optional,
    /// `:` - a value must follow.
    Required,
}

impl ValueMode {
    /// Resolve the value mode from the number of value markers in a definition.
    pub(crate) fn from_markers(count: usize) -> Self {
        match count {
            0 => ValueMode::None,
            1 => ValueMode::Required,
            _ => ValueMode::Optional,
        }
    }

    /// Whether this mode takes a value (optional or required).
    pub fn takes_value(&self) -> bool {
        !matches!(self, ValueMode::None)
    }
}

impl fmt::Display for ValueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The default declared for an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefaultValue {
    /// Substituted when the value is omitted.
    Scalar(String),
    /// An enum constraint: only these values are accepted, and the first is substituted when the value is omitted.
    Choices(Vec<String>),
}

impl DefaultValue {
    /// The value substituted for an omitted value.
    pub fn fallback(&self) -> &str {
        match self {
            DefaultValue::Scalar(value) => value,
            DefaultValue::Choices(choices) => choices.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Split a raw default on the value separator, producing choices only when the separator is present.
    pub(crate) fn parse(raw: &str, value_separator: char) -> Self {
        if raw.contains(value_separator) {
            DefaultValue::Choices(raw.split(value_separator).map(str::to_string).collect())
        } else {
            DefaultValue::Scalar(raw.to_string())
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Scalar(value.to_string())
    }
}

impl From<Vec<&str>> for DefaultValue {
    fn from(values: Vec<&str>) -> Self {
        DefaultValue::Choices(values.into_iter().map(str::to_string).collect())
    }
}

/// The value accumulated by an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// The option was set once.
    Single(String),
    /// The option was set repeatedly, in command line order.
    Multiple(Vec<String>),
}

impl Value {
    /// The most recently set value.
    pub fn last(&self) -> &str {
        match self {
            Value::Single(value) => value,
            Value::Multiple(values) => values.last().map(String::as_str).unwrap_or(""),
        }
    }

    /// All values, in command line order.
    pub fn all(&self) -> Vec<&str> {
        match self {
            Value::Single(value) => vec![value.as_str()],
            Value::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    pub(crate) fn push(self, value: String) -> Self {
        match self {
            Value::Single(first) => Value::Multiple(vec![first, value]),
            Value::Multiple(mut values) => {
                values.push(value);
                Value::Multiple(values)
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Single(value.to_string())
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Value::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::Single(value) if value == other)
    }
}
