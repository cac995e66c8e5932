use indexmap::IndexMap;

use crate::model::Value;

/// The outcome of matching a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub(crate) values: IndexMap<String, Value>,
    pub(crate) positionals: Vec<String>,
}

impl ParsedArgs {
    /// The value of every option that was set, keyed by primary name, in registration order.
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    /// The tokens not consumed as options or option values, in command line order.
    /// Includes everything after `--`, and the stdin marker `-`.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// The value of the option `name` (primary name only).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether the option `name` (primary name only) was set.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Split into the option values and the positionals.
    pub fn into_parts(self) -> (IndexMap<String, Value>, Vec<String>) {
        (self.values, self.positionals)
    }
}

/// An index cursor over the command line tokens.
///
/// The most recently taken token may be given back, so that a peeked option is seen again by the next scan.
#[derive(Debug)]
pub(crate) struct Cursor<'t, S> {
    tokens: &'t [S],
    position: usize,
}

impl<'t, S: AsRef<str>> Cursor<'t, S> {
    pub(crate) fn new(tokens: &'t [S]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub(crate) fn next(&mut self) -> Option<&'t str> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token.as_ref())
    }

    /// Give back the most recently taken token.
    pub(crate) fn back(&mut self) {
        self.position = self
            .position
            .checked_sub(1)
            .expect("internal error - cannot give back before the first token");
    }

    /// Take every remaining token.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = &'t str> {
        let remaining = &self.tokens[self.position..];
        self.position = self.tokens.len();
        remaining.iter().map(AsRef::as_ref)
    }
}
