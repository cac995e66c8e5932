use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{CliOption, DefaultFactory, OptionFactory, Rules};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum RegistryError {
    #[error("Cannot duplicate the option '{0}'.")]
    DuplicateOption(String),

    #[error("Option '{0}' does not exist.")]
    UnknownOption(String),
}

/// The registered options, each reachable by its primary name and every synonym.
///
/// Options live once in `options`; `index` maps every name to the option's position, so that a value set
/// through any synonym is visible through all of them.
pub(crate) struct OptionRegistry {
    options: Vec<CliOption>,
    index: HashMap<String, usize>,
    factory: Box<dyn OptionFactory>,
}

impl fmt::Debug for OptionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionRegistry")
            .field("options", &self.options)
            .finish()
    }
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new(Box::new(DefaultFactory))
    }
}

impl OptionRegistry {
    pub(crate) fn new(factory: Box<dyn OptionFactory>) -> Self {
        Self {
            options: Vec::default(),
            index: HashMap::default(),
            factory,
        }
    }

    /// Create an option via the factory and register it under all of its names.
    /// If any name is taken, nothing is registered.
    pub(crate) fn register(&mut self, name: &str, rules: Rules) -> Result<&CliOption, RegistryError> {
        let option = self.factory.create(name, rules);
        let mut names: Vec<&str> = Vec::default();

        for candidate in option.names() {
            if self.index.contains_key(candidate) || names.contains(&candidate) {
                return Err(RegistryError::DuplicateOption(candidate.to_string()));
            }

            names.push(candidate);
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering option '{}' under {names:?}.", option.name());
        }

        let position = self.options.len();
        for registered in names {
            self.index.insert(registered.to_string(), position);
        }

        self.options.push(option);
        Ok(&self.options[position])
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<&CliOption, RegistryError> {
        match self.index.get(name) {
            Some(position) => Ok(&self.options[*position]),
            None => Err(RegistryError::UnknownOption(name.to_string())),
        }
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> Result<&mut CliOption, RegistryError> {
        match self.index.get(name) {
            Some(position) => Ok(&mut self.options[*position]),
            None => Err(RegistryError::UnknownOption(name.to_string())),
        }
    }

    /// Clear the value of every option.
    pub(crate) fn reset_all(&mut self) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Resetting {} option(s).", self.options.len());
        }

        for option in self.options.iter_mut() {
            option.reset_value();
        }
    }

    /// Every distinct option, in registration order.
    pub(crate) fn options(&self) -> impl Iterator<Item = &CliOption> {
        self.options.iter()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.options.len()
    }
}
