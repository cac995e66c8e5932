use indexmap::IndexMap;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::{LONG_PREFIX, OPTION_PREFIX, STDIN, TERMINATOR};
use crate::matcher::model::{Cursor, ParsedArgs};
use crate::model::ValueMode;
use crate::registry::{OptionRegistry, RegistryError};
use crate::validate::ValueError;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Option '{0}' does not exist.")]
    UnknownOption(String),

    #[error("Option '{0}' requires a value, but none was provided.")]
    MissingValue(String),

    #[error("Option '{0}' is required.")]
    MissingRequiredOption(String),

    #[error(transparent)]
    Value(#[from] ValueError),
}

impl From<RegistryError> for MatchError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::UnknownOption(name) => MatchError::UnknownOption(name),
            RegistryError::DuplicateOption(_) => {
                unreachable!("internal error - matching never registers an option")
            }
        }
    }
}

/// How much of the current token an option consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Consumed {
    /// Only the option's own name; the rest of a short option cluster remains.
    Name,
    /// The whole token.
    Token,
}

/// Matches command line tokens against the registered options, getopt style.
///
/// Supported syntax:
/// * `--name`, `--name value`, `--name=value`
/// * `-n`, `-n value`, `-nvalue`
/// * clusters of short options: `-xyz` (`x` & `y` taking no value, or the rest of the cluster is their value)
/// * `--` ends option matching: every later token is positional
/// * `-` is positional (stdin)
#[derive(Debug)]
pub(crate) struct TokenMatcher<'r> {
    registry: &'r mut OptionRegistry,
    value_separator: char,
    positionals: Vec<String>,
}

impl<'r> TokenMatcher<'r> {
    pub(crate) fn new(registry: &'r mut OptionRegistry, value_separator: char) -> Self {
        Self {
            registry,
            value_separator,
            positionals: Vec::default(),
        }
    }

    /// Match every token, then collect the option values.
    /// The first error aborts matching.
    pub(crate) fn consume<S: AsRef<str>>(mut self, tokens: &[S]) -> Result<ParsedArgs, MatchError> {
        let mut cursor = Cursor::new(tokens);

        while let Some(token) = cursor.next() {
            if token == TERMINATOR {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminator '{token}', the remaining tokens are positional.");
                }

                self.positionals.extend(cursor.drain().map(str::to_string));
                break;
            } else if token == STDIN {
                self.positionals.push(token.to_string());
            } else if token.starts_with(OPTION_PREFIX) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matching option token '{token}'.");
                }

                self.match_option(token, &mut cursor)?;
            } else {
                self.positionals.push(token.to_string());
            }
        }

        self.close()
    }

    fn match_option<S: AsRef<str>>(
        &mut self,
        token: &str,
        cursor: &mut Cursor<'_, S>,
    ) -> Result<(), MatchError> {
        // 1. Find a 'long' option, such as:
        //  --user
        //  --user ..
        //  --user=..
        // 2. Find 'short' option(s), such as (both -q and -o are example short options):
        //  -o
        //  -o ..
        //  -o..
        //  -qo
        //  -qo ..
        //  -qo..
        if let Some(long) = token.strip_prefix(LONG_PREFIX) {
            self.match_option_long(split_equals_delimiter(long), cursor)
        } else {
            self.match_option_short(&token[OPTION_PREFIX.len_utf8()..], cursor)
        }
    }

    fn match_option_long<S: AsRef<str>>(
        &mut self,
        (option_name, single_argument): (&str, Option<&str>),
        cursor: &mut Cursor<'_, S>,
    ) -> Result<(), MatchError> {
        match single_argument {
            Some(value) => {
                let separator = self.value_separator;
                self.registry
                    .lookup_mut(option_name)?
                    .set_value(value, Some(separator))?;
                Ok(())
            }
            None => self.resolve(option_name, None, cursor).map(|_| ()),
        }
    }

    fn match_option_short<S: AsRef<str>>(
        &mut self,
        cluster: &str,
        cursor: &mut Cursor<'_, S>,
    ) -> Result<(), MatchError> {
        for (index, single) in cluster.char_indices() {
            let tail = &cluster[index + single.len_utf8()..];
            let tail = if tail.is_empty() { None } else { Some(tail) };

            if self.resolve(&single.to_string(), tail, cursor)? == Consumed::Token {
                break;
            }
        }

        Ok(())
    }

    /// Set the option `name` from the tokens.
    ///
    /// `tail` is the rest of a short option cluster following `name`, if any.
    /// A value taking option consumes the tail as its value, or else the next token.
    /// An optional value never consumes a next token that looks like an option; that token is given back.
    fn resolve<S: AsRef<str>>(
        &mut self,
        name: &str,
        tail: Option<&str>,
        cursor: &mut Cursor<'_, S>,
    ) -> Result<Consumed, MatchError> {
        let separator = Some(self.value_separator);
        let option = self.registry.lookup_mut(name)?;

        match option.mode() {
            ValueMode::None => {
                option.set_value("", separator)?;
                Ok(Consumed::Name)
            }
            ValueMode::Optional => {
                match tail {
                    Some(tail) => option.set_value(tail, separator)?,
                    None => match cursor.next() {
                        None => option.set_value("", separator)?,
                        Some(next) if next.starts_with(OPTION_PREFIX) => {
                            // Not a value; the next scan matches it as an option.
                            cursor.back();
                            option.set_value("", separator)?;
                        }
                        Some(next) => option.set_value(next, separator)?,
                    },
                }

                Ok(Consumed::Token)
            }
            ValueMode::Required => {
                if let Some(tail) = tail {
                    option.set_value(tail, separator)?;
                    return Ok(Consumed::Token);
                }

                match cursor.next() {
                    Some(next) if !next.starts_with(OPTION_PREFIX) => {
                        option.set_value(next, separator)?;
                        Ok(Consumed::Token)
                    }
                    Some(_) | None => Err(MatchError::MissingValue(name.to_string())),
                }
            }
        }
    }

    fn close(self) -> Result<ParsedArgs, MatchError> {
        let mut values = IndexMap::default();

        for option in self.registry.options() {
            match option.value() {
                Some(value) => {
                    values.insert(option.name().to_string(), value.clone());
                }
                None if option.is_required() => {
                    return Err(MatchError::MissingRequiredOption(
                        option.name().to_string(),
                    ));
                }
                None => {}
            }
        }

        Ok(ParsedArgs {
            values,
            positionals: self.positionals,
        })
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}
