use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{CliOption, Config, OptionFactory, Rules};
use crate::grammar::{compile, DefinitionError, Definitions, Grammar};
use crate::matcher::{MatchError, ParsedArgs, TokenMatcher};
use crate::registry::{OptionRegistry, RegistryError};
use crate::validate::ValueError;

/// The errors of defining options and of parsing a command line.
///
/// The first error aborts the call that raised it.
/// Options registered before a definition error remain registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetOptError {
    /// A name or synonym is already taken by a registered option.
    #[error("Cannot duplicate the option '{0}'.")]
    DuplicateOption(String),

    /// A definition fragment does not follow the definition grammar.
    #[error("Invalid option definition '{fragment}': {reason}.")]
    InvalidDefinition {
        /// The offending fragment.
        fragment: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The [`Config`] characters make the definition grammar ambiguous.
    #[error("Invalid config: {0}.")]
    InvalidConfig(String),

    /// A command line token names an unregistered option.
    #[error("Option '{0}' does not exist.")]
    UnknownOption(String),

    /// A value-required option is the last token, or is followed by another option.
    #[error("Option '{0}' requires a value, but none was provided.")]
    MissingValue(String),

    /// A required option never received a value.
    #[error("Option '{0}' is required.")]
    MissingRequiredOption(String),

    /// A value-required option received an empty value, and has no default.
    #[error("Option '{0}' requires a value.")]
    ValueRequired(String),

    /// A value fails the option's type check.
    #[error("Option '{name}' cannot accept '{value}' as type '{value_type}'.")]
    InvalidType {
        /// The option's primary name.
        name: String,
        /// The rejected value.
        value: String,
        /// The declared type code.
        value_type: String,
    },

    /// A value is not one of the option's enum choices.
    #[error("Option '{name}' cannot accept '{value}' (expected one of {choices:?}).")]
    InvalidValue {
        /// The option's primary name.
        name: String,
        /// The rejected value.
        value: String,
        /// The declared choices.
        choices: Vec<String>,
    },
}

impl From<RegistryError> for GetOptError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::DuplicateOption(name) => GetOptError::DuplicateOption(name),
            RegistryError::UnknownOption(name) => GetOptError::UnknownOption(name),
        }
    }
}

impl From<DefinitionError> for GetOptError {
    fn from(error: DefinitionError) -> Self {
        match error {
            DefinitionError::InvalidDefinition { fragment, reason } => {
                GetOptError::InvalidDefinition { fragment, reason }
            }
            DefinitionError::DuplicateOption(name) => GetOptError::DuplicateOption(name),
        }
    }
}

impl From<ValueError> for GetOptError {
    fn from(error: ValueError) -> Self {
        match error {
            ValueError::ValueRequired(name) => GetOptError::ValueRequired(name),
            ValueError::InvalidType {
                name,
                value,
                value_type,
            } => GetOptError::InvalidType {
                name,
                value,
                value_type,
            },
            ValueError::InvalidValue {
                name,
                value,
                choices,
            } => GetOptError::InvalidValue {
                name,
                value,
                choices,
            },
        }
    }
}

impl From<MatchError> for GetOptError {
    fn from(error: MatchError) -> Self {
        match error {
            MatchError::UnknownOption(name) => GetOptError::UnknownOption(name),
            MatchError::MissingValue(name) => GetOptError::MissingValue(name),
            MatchError::MissingRequiredOption(name) => GetOptError::MissingRequiredOption(name),
            MatchError::Value(error) => GetOptError::from(error),
        }
    }
}

/// The getopt style command line parser.
///
/// Options are defined in a compact grammar (see [`Definitions`]), or one at a time via [`GetOpt::set_opt`].
/// A `GetOpt` keeps its options between calls; by default each parse starts by clearing every option's value.
///
/// ### Example
/// ```
/// # use gramopt_core as gramopt;
/// use gramopt::{GetOpt, Rules};
///
/// let mut getopt = GetOpt::new();
/// let parsed = getopt
///     .get_opt(&["-qo", "output.txt", "input.txt"], "quiet|q,o::", &Rules::default())
///     .unwrap();
///
/// assert_eq!(parsed.get("quiet").unwrap(), &"");
/// assert_eq!(parsed.get("o").unwrap(), &"output.txt");
/// assert_eq!(parsed.positionals(), &["input.txt".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct GetOpt {
    config: Config,
    registry: OptionRegistry,
    compiled: Vec<(Definitions, Rules)>,
}

impl GetOpt {
    /// Create a parser with the default [`Config`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the `config` characters and behaviour.
    ///
    /// Fails with [`GetOptError::InvalidConfig`] when the characters would make the grammar ambiguous.
    pub fn with_config(config: Config) -> Result<Self, GetOptError> {
        config.validate().map_err(GetOptError::InvalidConfig)?;

        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Construct every subsequently registered option via `factory`.
    ///
    /// ### Example
    /// ```
    /// # use gramopt_core as gramopt;
    /// use gramopt::{CliOption, GetOpt, Rules};
    ///
    /// let mut getopt = GetOpt::new().with_factory(|name: &str, rules: Rules| {
    ///     CliOption::new(name, Rules::new().help("Undocumented.").overlay(&rules))
    /// });
    /// getopt.define("verbose|v", &Rules::default()).unwrap();
    ///
    /// assert_eq!(getopt.get("v").unwrap().help(), Some("Undocumented."));
    /// ```
    pub fn with_factory(mut self, factory: impl OptionFactory + 'static) -> Self {
        self.registry = OptionRegistry::new(Box::new(factory));
        self.compiled.clear();
        self
    }

    /// Register the option `name` directly from its `rules`, outside the definition grammar.
    ///
    /// Fails with [`GetOptError::DuplicateOption`] if the name or a synonym is taken; the existing option stays untouched.
    ///
    /// ### Example
    /// ```
    /// # use gramopt_core as gramopt;
    /// use gramopt::{GetOpt, Rules, ValueMode, ValueType};
    ///
    /// let mut getopt = GetOpt::new();
    /// getopt
    ///     .set_opt("count", Rules::new().value_type(ValueType::Integer).mode(ValueMode::Required))
    ///     .unwrap()
    ///     .set_opt("verbose", Rules::new().synonyms(["v"]))
    ///     .unwrap();
    ///
    /// let parsed = getopt.parse(&["--count", "3", "-v"]).unwrap();
    /// assert_eq!(parsed.get("count").unwrap(), &"3");
    /// ```
    pub fn set_opt(&mut self, name: &str, rules: Rules) -> Result<&mut Self, GetOptError> {
        self.registry.register(name, rules)?;
        Ok(self)
    }

    /// Compile and register the option `definitions`, each layered over the `shared` rules.
    ///
    /// Empty definitions register nothing, and neither do definitions this parser already compiled with equal
    /// `shared` rules (validators are equal only when they are the same `Arc`).
    /// The same definitions with other shared rules are compiled again, and so fail with
    /// [`GetOptError::DuplicateOption`] rather than ignoring the new rules.
    pub fn define(
        &mut self,
        definitions: impl Into<Definitions>,
        shared: &Rules,
    ) -> Result<&mut Self, GetOptError> {
        let definitions = definitions.into();

        let compiled = self
            .compiled
            .iter()
            .any(|(done, rules)| done == &definitions && rules == shared);

        if definitions.is_empty() || compiled {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Skipping compilation of {definitions:?}.");
            }

            return Ok(self);
        }

        compile(
            &mut self.registry,
            &definitions,
            shared,
            &Grammar::from(&self.config),
        )?;
        self.compiled.push((definitions, shared.clone()));
        Ok(self)
    }

    /// Define the options, then match them against the command line `argv` (excluding the program name).
    ///
    /// Unless disabled via [`Config::reset`], every option value is cleared first.
    ///
    /// ### Example
    /// ```
    /// # use gramopt_core as gramopt;
    /// use gramopt::{GetOpt, GetOptError, Rules, Value};
    ///
    /// let mut getopt = GetOpt::new();
    /// let definitions = "user|u=,o::,i#:[s=a|b|c],quiet|q";
    ///
    /// let parsed = getopt
    ///     .get_opt(&["--user=phossa", "-ib", "-i", "c", "wow"], definitions, &Rules::default())
    ///     .unwrap();
    /// assert_eq!(parsed.get("user").unwrap(), &"phossa");
    /// assert_eq!(parsed.get("i").unwrap(), &Value::from(vec!["b", "c"]));
    /// assert_eq!(parsed.positionals(), &["wow".to_string()]);
    ///
    /// let error = getopt.get_opt(&["-q"], definitions, &Rules::default()).unwrap_err();
    /// assert_eq!(error, GetOptError::MissingRequiredOption("i".to_string()));
    /// ```
    pub fn get_opt<S: AsRef<str>>(
        &mut self,
        argv: &[S],
        definitions: impl Into<Definitions>,
        shared: &Rules,
    ) -> Result<ParsedArgs, GetOptError> {
        if self.config.reset {
            self.registry.reset_all();
        }

        self.define(definitions, shared)?;

        let parsed =
            TokenMatcher::new(&mut self.registry, self.config.value_separator).consume(argv)?;
        Ok(parsed)
    }

    /// Match the already defined options against the command line `argv`.
    pub fn parse<S: AsRef<str>>(&mut self, argv: &[S]) -> Result<ParsedArgs, GetOptError> {
        self.get_opt(argv, Definitions::default(), &Rules::default())
    }

    /// The option registered under `name` (primary name or synonym).
    pub fn get(&self, name: &str) -> Result<&CliOption, GetOptError> {
        Ok(self.registry.lookup(name)?)
    }

    /// Every registered option, in registration order.
    pub fn options(&self) -> impl Iterator<Item = &CliOption> {
        self.registry.options()
    }
}
