use crate::api::Rules;
use crate::constant::{DEFAULT_MARKER, VALUE_MARKERS};
use crate::grammar::scanner::{is_word, Scanner};
use crate::grammar::{DefinitionError, Grammar};
use crate::model::{DefaultValue, ValueMode, ValueType};

// At most `::` (optional value).
const MAX_VALUE_MARKERS: usize = 2;

/// The decomposition of one option definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Fragment {
    name: String,
    synonyms: Vec<String>,
    required: bool,
    mode: ValueMode,
    value_type: Option<ValueType>,
    default: Option<DefaultValue>,
}

impl Fragment {
    pub(super) fn parse(text: &str, grammar: &Grammar) -> Result<Self, DefinitionError> {
        let mut scanner = Scanner::new(text);

        let names = scanner.take_while(|c| is_word(c) || c == grammar.synonyms_separator);
        if names.is_empty() {
            return Err(DefinitionError::invalid(text, "missing option name"));
        }

        let mut names = names.split(grammar.synonyms_separator).map(str::to_string);
        let name = names.next().unwrap_or_default();
        let synonyms: Vec<String> = names.collect();

        if name.is_empty() || synonyms.iter().any(String::is_empty) {
            return Err(DefinitionError::invalid(text, "empty option name"));
        }

        let required = scanner.eat(grammar.required_option_char);

        let mut markers = 0;
        while markers < MAX_VALUE_MARKERS && VALUE_MARKERS.iter().any(|&m| scanner.eat(m)) {
            markers += 1;
        }
        let mode = ValueMode::from_markers(markers);

        let mut value_type = None;
        let mut default = None;

        // Only an option taking a value may declare its type & default.
        if mode.takes_value() {
            let body = scanner
                .bracket()
                .map_err(|_| DefinitionError::invalid(text, "unclosed '['"))?;

            if let Some(body) = body {
                let (code, raw_default) = match body.split_once(DEFAULT_MARKER) {
                    Some((code, raw_default)) => (code, Some(raw_default)),
                    None => (body, None),
                };

                if !code.is_empty() {
                    value_type.replace(ValueType::from_code(code));
                }

                if let Some(raw_default) = raw_default {
                    if raw_default.is_empty() {
                        return Err(DefinitionError::invalid(text, "empty default"));
                    }

                    default.replace(parse_default(raw_default, grammar.value_separator));
                }
            }
        }

        if !scanner.is_done() {
            return Err(DefinitionError::invalid(
                text,
                format!("unexpected '{}'", scanner.rest()),
            ));
        }

        Ok(Self {
            name,
            synonyms,
            required,
            mode,
            value_type,
            default,
        })
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    /// The option's rules: this fragment layered over the `shared` rules.
    ///
    /// The fragment declares every field of the grammar, even when left out of the definition
    /// (an unbracketed type is a string, an unbracketed default is none).
    /// Only the validator & help text come from `shared`.
    pub(super) fn rules(&self, shared: &Rules) -> Rules {
        let mut rules = shared.overlay(
            &Rules::new()
                .synonyms(self.synonyms.clone())
                .required(self.required)
                .mode(self.mode)
                .value_type(self.value_type.clone().unwrap_or_default()),
        );
        rules.default = self.default.clone();
        rules
    }
}

/// A quoted default is taken literally; otherwise the value separator declares enum choices.
fn parse_default(raw: &str, value_separator: char) -> DefaultValue {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return DefaultValue::Scalar(raw[1..raw.len() - 1].to_string());
        }
    }

    DefaultValue::parse(raw, value_separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(text: &str) -> Result<Fragment, DefinitionError> {
        Fragment::parse(text, &Grammar::default())
    }

    fn fragment(
        name: &str,
        synonyms: Vec<&str>,
        required: bool,
        mode: ValueMode,
        value_type: Option<ValueType>,
        default: Option<DefaultValue>,
    ) -> Fragment {
        Fragment {
            name: name.to_string(),
            synonyms: synonyms.into_iter().map(str::to_string).collect(),
            required,
            mode,
            value_type,
            default,
        }
    }

    #[rstest]
    #[case("h", fragment("h", vec![], false, ValueMode::None, None, None))]
    #[case("help|h", fragment("help", vec!["h"], false, ValueMode::None, None, None))]
    #[case("user|username|u:[s]", fragment("user", vec!["username", "u"], false, ValueMode::Required, Some(ValueType::String), None))]
    #[case("user|u=", fragment("user", vec!["u"], false, ValueMode::Required, None, None))]
    #[case("x::[i]", fragment("x", vec![], false, ValueMode::Optional, Some(ValueType::Integer), None))]
    #[case("u#:[i]", fragment("u", vec![], true, ValueMode::Required, Some(ValueType::Integer), None))]
    #[case("d#=[n]", fragment("d", vec![], true, ValueMode::Required, Some(ValueType::Number), None))]
    #[case("y#::[i=12]", fragment("y", vec![], true, ValueMode::Optional, Some(ValueType::Integer), Some(DefaultValue::from("12"))))]
    #[case("c#::[f=config.php]", fragment("c", vec![], true, ValueMode::Optional, Some(ValueType::FileRead), Some(DefaultValue::from("config.php"))))]
    #[case("y:[=2014|2015]", fragment("y", vec![], false, ValueMode::Required, None, Some(DefaultValue::from(vec!["2014", "2015"]))))]
    #[case("i#:[s=a|b|c]", fragment("i", vec![], true, ValueMode::Required, Some(ValueType::String), Some(DefaultValue::from(vec!["a", "b", "c"]))))]
    #[case("q::[=\"wow,wow2\"]", fragment("q", vec![], false, ValueMode::Optional, None, Some(DefaultValue::from("wow,wow2"))))]
    #[case("q::[='a|b']", fragment("q", vec![], false, ValueMode::Optional, None, Some(DefaultValue::from("a|b"))))]
    #[case("k:[]", fragment("k", vec![], false, ValueMode::Required, None, None))]
    #[case("e:[email]", fragment("e", vec![], false, ValueMode::Required, Some(ValueType::Custom("email".to_string())), None))]
    #[case("o:=", fragment("o", vec![], false, ValueMode::Optional, None, None))]
    #[case("dry_run", fragment("dry_run", vec![], false, ValueMode::None, None, None))]
    fn parse_valid(#[case] text: &str, #[case] expected: Fragment) {
        assert_eq!(parse(text).unwrap(), expected);
    }

    #[rstest]
    #[case("#:")]
    #[case(":[i]")]
    #[case("|u")]
    #[case("user|")]
    #[case("a||b")]
    #[case("x:::")]
    #[case("x[i]")]
    #[case("x:[i")]
    #[case("x:[i=]")]
    #[case("x:[i]y")]
    #[case("dry-run")]
    #[case("x##")]
    fn parse_invalid(#[case] text: &str) {
        assert_matches!(parse(text), Err(DefinitionError::InvalidDefinition { fragment, .. }) => {
            assert_eq!(fragment, text);
        });
    }

    #[test]
    fn rules() {
        let rules = parse("user|u#::[i=1|2]").unwrap().rules(&Rules::default());

        assert_eq!(rules.synonyms, Some(vec!["u".to_string()]));
        assert_eq!(rules.required, Some(true));
        assert_eq!(rules.mode, Some(ValueMode::Optional));
        assert_eq!(rules.value_type, Some(ValueType::Integer));
        assert_eq!(rules.default, Some(DefaultValue::from(vec!["1", "2"])));
    }

    #[test]
    fn rules_undeclared() {
        let rules = parse("v").unwrap().rules(&Rules::default());

        assert_eq!(rules.synonyms, Some(vec![]));
        assert_eq!(rules.required, Some(false));
        assert_eq!(rules.mode, Some(ValueMode::None));
        assert_eq!(rules.value_type, Some(ValueType::String));
        assert_eq!(rules.default, None);
    }

    #[rstest]
    #[case("a::")]
    #[case("a::[]")]
    #[case("a:")]
    fn rules_shared_grammar_fields(#[case] text: &str) {
        let fragment = parse(text).unwrap();
        let shared = Rules::new()
            .value_type(ValueType::Integer)
            .default_value(vec!["x", "y"])
            .required(true)
            .synonyms(["alpha"])
            .help("shared help");

        let rules = fragment.rules(&shared);

        assert_eq!(rules.value_type, Some(ValueType::String));
        assert_eq!(rules.default, None);
        assert_eq!(rules.required, Some(false));
        assert_eq!(rules.synonyms, Some(vec![]));
        assert_eq!(rules.help, Some("shared help".to_string()));
    }
}
