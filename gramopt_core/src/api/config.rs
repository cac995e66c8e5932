use crate::constant::*;

/// Configuration of the definition grammar characters and of the parse behaviour.
///
/// ### Example
/// ```
/// # use gramopt_core as gramopt;
/// use gramopt::{Config, GetOpt};
///
/// let config = Config::default()
///     .option_separator(';')
///     .reset(false);
/// let getopt = GetOpt::with_config(config).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) reset: bool,
    pub(crate) option_separator: char,
    pub(crate) synonyms_separator: char,
    pub(crate) value_separator: char,
    pub(crate) required_option_char: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset: true,
            option_separator: OPTION_SEPARATOR,
            synonyms_separator: SYNONYMS_SEPARATOR,
            value_separator: VALUE_SEPARATOR,
            required_option_char: REQUIRED_OPTION_CHAR,
        }
    }
}

impl Config {
    /// Whether every option value is cleared at the start of each parse (default `true`).
    /// Disable to accumulate values across parses of multiple argument sources.
    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    /// The character separating option definitions (default `,`).
    pub fn option_separator(mut self, separator: char) -> Self {
        self.option_separator = separator;
        self
    }

    /// The character separating an option's name from its synonyms (default `|`).
    pub fn synonyms_separator(mut self, separator: char) -> Self {
        self.synonyms_separator = separator;
        self
    }

    /// The character separating enum defaults, and multiple values on the command line (default `|`).
    pub fn value_separator(mut self, separator: char) -> Self {
        self.value_separator = separator;
        self
    }

    /// The character marking an option as required (default `#`).
    pub fn required_option_char(mut self, marker: char) -> Self {
        self.required_option_char = marker;
        self
    }

    /// Check that the grammar stays unambiguous.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let configured = [
            ("option separator", self.option_separator),
            ("synonyms separator", self.synonyms_separator),
            ("value separator", self.value_separator),
            ("required option char", self.required_option_char),
        ];

        for (label, c) in configured {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                return Err(format!("the {label} '{c}' cannot be a word or whitespace character"));
            }

            if [BRACKET_OPEN, BRACKET_CLOSE, DEFAULT_MARKER, OPTION_PREFIX].contains(&c)
                || VALUE_MARKERS.contains(&c)
            {
                return Err(format!("the {label} '{c}' is reserved by the grammar"));
            }
        }

        // The synonyms and value separators never meet (names vs. bracket bodies), so they may coincide.
        let distinct = [(0, 1), (0, 2), (0, 3), (1, 3), (2, 3)];

        for (i, j) in distinct {
            let (left_label, left) = configured[i];
            let (right_label, right) = configured[j];

            if left == right {
                return Err(format!(
                    "the {left_label} and {right_label} must differ (both are '{left}')"
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn default_valid() {
        let config = Config::default();
        assert!(config.reset);
        assert_eq!(config.option_separator, ',');
        assert_eq!(config.synonyms_separator, '|');
        assert_eq!(config.value_separator, '|');
        assert_eq!(config.required_option_char, '#');
        config.validate().unwrap();
    }

    #[test]
    fn custom_valid() {
        Config::default()
            .option_separator(';')
            .synonyms_separator('/')
            .value_separator('^')
            .required_option_char('!')
            .validate()
            .unwrap();
    }

    #[rstest]
    #[case(Config::default().option_separator('a'), "word")]
    #[case(Config::default().option_separator(' '), "word")]
    #[case(Config::default().required_option_char(':'), "reserved")]
    #[case(Config::default().synonyms_separator('['), "reserved")]
    #[case(Config::default().value_separator('='), "reserved")]
    #[case(Config::default().option_separator('-'), "reserved")]
    #[case(Config::default().option_separator('|'), "must differ")]
    #[case(Config::default().required_option_char(','), "must differ")]
    #[case(Config::default().value_separator('#'), "must differ")]
    fn invalid(#[case] config: Config, #[case] expected: &str) {
        let message = config.validate().unwrap_err();
        assert_contains!(message, expected);
    }
}
