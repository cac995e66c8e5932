pub(crate) const OPTION_SEPARATOR: char = ',';
pub(crate) const SYNONYMS_SEPARATOR: char = '|';
pub(crate) const VALUE_SEPARATOR: char = '|';
pub(crate) const REQUIRED_OPTION_CHAR: char = '#';

// Characters with a fixed meaning in the definition grammar and on the command line.
pub(crate) const VALUE_MARKERS: [char; 2] = [':', '='];
pub(crate) const BRACKET_OPEN: char = '[';
pub(crate) const BRACKET_CLOSE: char = ']';
pub(crate) const DEFAULT_MARKER: char = '=';
pub(crate) const OPTION_PREFIX: char = '-';
pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const TERMINATOR: &str = "--";
pub(crate) const STDIN: &str = "-";
