//! Compilation of option definitions into registered options.
//!
//! A definition string is split into fragments, one per option, and each fragment is decomposed into the option's
//! names, required marker, value mode, type, and default:
//! ```text
//! name[|synonym]*[#][:|::][[type][=default[|default2...]]]
//! ```
//! A string containing an option separator (`,`) or a synonym separator (`|`) is split on the option separator.
//! Otherwise it is a gnu-style run of single letter options (ex: `hd:o::`).
mod fragment;
mod scanner;
mod split;

use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{Config, Rules};
use crate::registry::{OptionRegistry, RegistryError};
use fragment::Fragment;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DefinitionError {
    #[error("Invalid option definition '{fragment}': {reason}.")]
    InvalidDefinition { fragment: String, reason: String },

    #[error("Cannot duplicate the option '{0}'.")]
    DuplicateOption(String),
}

impl DefinitionError {
    pub(super) fn invalid(fragment: &str, reason: impl Into<String>) -> Self {
        DefinitionError::InvalidDefinition {
            fragment: fragment.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<RegistryError> for DefinitionError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::DuplicateOption(name) => DefinitionError::DuplicateOption(name),
            RegistryError::UnknownOption(_) => {
                unreachable!("internal error - registration never looks up an option")
            }
        }
    }
}

/// Option definitions: either a single string in the definition grammar, or a list of pre-split fragments.
///
/// ### Example
/// ```
/// # use gramopt_core as gramopt;
/// use gramopt::Definitions;
///
/// let text = Definitions::from("help|h,d#:[d],c#::[f=config.php]");
/// let list = Definitions::from(["help|h", "d#:[d]", "c#::[f=config.php]"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Definitions {
    /// A definition string, split into fragments before compilation.
    Text(String),
    /// Fragments, one per option.
    List(Vec<String>),
}

impl Definitions {
    /// Whether there is nothing to compile.
    pub fn is_empty(&self) -> bool {
        match self {
            Definitions::Text(text) => text.trim().is_empty(),
            Definitions::List(fragments) => fragments.iter().all(|f| f.trim().is_empty()),
        }
    }
}

impl Default for Definitions {
    fn default() -> Self {
        Definitions::Text(String::default())
    }
}

impl From<&str> for Definitions {
    fn from(text: &str) -> Self {
        Definitions::Text(text.to_string())
    }
}

impl From<String> for Definitions {
    fn from(text: String) -> Self {
        Definitions::Text(text)
    }
}

impl From<&[&str]> for Definitions {
    fn from(fragments: &[&str]) -> Self {
        Definitions::List(fragments.iter().map(|f| f.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Definitions {
    fn from(fragments: [&str; N]) -> Self {
        Definitions::List(fragments.iter().map(|f| f.to_string()).collect())
    }
}

impl From<Vec<&str>> for Definitions {
    fn from(fragments: Vec<&str>) -> Self {
        Definitions::List(fragments.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Definitions {
    fn from(fragments: Vec<String>) -> Self {
        Definitions::List(fragments)
    }
}

/// The configurable characters of the definition grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Grammar {
    pub(crate) option_separator: char,
    pub(crate) synonyms_separator: char,
    pub(crate) value_separator: char,
    pub(crate) required_option_char: char,
}

impl From<&Config> for Grammar {
    fn from(config: &Config) -> Self {
        Self {
            option_separator: config.option_separator,
            synonyms_separator: config.synonyms_separator,
            value_separator: config.value_separator,
            required_option_char: config.required_option_char,
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::from(&Config::default())
    }
}

/// Compile the definitions, registering one option per fragment.
///
/// The rules of each fragment are layered over the `shared` rules.
/// Compilation stops at the first malformed fragment or duplicate name; options registered before that remain.
/// Returns the number of options registered.
pub(crate) fn compile(
    registry: &mut OptionRegistry,
    definitions: &Definitions,
    shared: &Rules,
    grammar: &Grammar,
) -> Result<usize, DefinitionError> {
    let fragments = match definitions {
        Definitions::Text(text) => split::split_definitions(text, grammar)?,
        Definitions::List(fragments) => fragments
            .iter()
            .map(|fragment| fragment.trim().to_string())
            .filter(|fragment| !fragment.is_empty())
            .collect(),
    };

    for text in &fragments {
        let fragment = Fragment::parse(text, grammar)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Compiled definition '{text}' into {fragment:?}.");
        }

        registry.register(fragment.name(), fragment.rules(shared))?;
    }

    Ok(fragments.len())
}
