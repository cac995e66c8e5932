use crate::constant::{BRACKET_CLOSE, BRACKET_OPEN, VALUE_MARKERS};
use crate::grammar::scanner::{is_word, Scanner};
use crate::grammar::{DefinitionError, Grammar};

/// Split a definition string into per-option fragments.
///
/// Bracketed `[..]` spans are atomic: separators inside them never split.
/// If, outside of brackets, the text contains an option or synonym separator, it is split on the option separator
/// (blank fragments are dropped).
/// Otherwise it is read as a run of single letter options (ex: `hd#:[d]o::`).
pub(super) fn split_definitions(
    text: &str,
    grammar: &Grammar,
) -> Result<Vec<String>, DefinitionError> {
    let stripped = strip_brackets(text)?;

    if stripped.contains(grammar.option_separator) || stripped.contains(grammar.synonyms_separator)
    {
        Ok(split_long(text, grammar.option_separator))
    } else {
        split_short(text, grammar)
    }
}

fn strip_brackets(text: &str) -> Result<String, DefinitionError> {
    let mut stripped = String::with_capacity(text.len());
    let mut scanner = Scanner::new(text);

    while let Some(c) = scanner.peek() {
        if c == BRACKET_OPEN {
            scanner
                .bracket()
                .map_err(|_| DefinitionError::invalid(text, "unclosed '['"))?;
        } else {
            stripped.push(c);
            scanner.bump();
        }
    }

    Ok(stripped)
}

fn split_long(text: &str, separator: char) -> Vec<String> {
    let mut fragments = Vec::default();
    let mut current = String::default();
    let mut bracketed = false;

    for c in text.chars() {
        match c {
            BRACKET_OPEN if !bracketed => bracketed = true,
            BRACKET_CLOSE if bracketed => bracketed = false,
            c if c == separator && !bracketed => {
                fragments.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }

        current.push(c);
    }

    fragments.push(current);
    fragments
        .into_iter()
        .map(|fragment| fragment.trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

fn split_short(text: &str, grammar: &Grammar) -> Result<Vec<String>, DefinitionError> {
    let mut fragments = Vec::default();
    let mut scanner = Scanner::new(text);

    loop {
        scanner.take_while(char::is_whitespace);
        let start = scanner.position();

        match scanner.bump() {
            None => break,
            Some(c) if is_word(c) => {}
            Some(_) => {
                return Err(DefinitionError::invalid(
                    &text[start..],
                    "expected a single letter option",
                ));
            }
        }

        scanner.eat(grammar.required_option_char);
        let markers = scanner.take_while(|c| VALUE_MARKERS.contains(&c));

        if !markers.is_empty() {
            scanner
                .bracket()
                .map_err(|_| DefinitionError::invalid(&text[start..], "unclosed '['"))?;
        }

        // Over-long marker runs are left for the fragment parser to reject.
        fragments.push(text[start..scanner.position()].to_string());
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn split(text: &str) -> Result<Vec<String>, DefinitionError> {
        split_definitions(text, &Grammar::default())
    }

    #[rstest]
    #[case("hi:o:v::", vec!["h", "i:", "o:", "v::"])]
    #[case("hi:o#:v::", vec!["h", "i:", "o#:", "v::"])]
    #[case("hd#:[d]c#::[f=config.php]o::q::[=\"wow,wow2\"]", vec!["h", "d#:[d]", "c#::[f=config.php]", "o::", "q::[=\"wow,wow2\"]"])]
    #[case("x::[=a|b]", vec!["x::[=a|b]"])]
    #[case("h v", vec!["h", "v"])]
    #[case("", vec![])]
    fn short(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split(text).unwrap(), expected);
    }

    #[rstest]
    #[case("user|u=", vec!["user|u="])]
    #[case("user|u=,o::,i#:[s=a|b|c],quiet|q", vec!["user|u=", "o::", "i#:[s=a|b|c]", "quiet|q"])]
    #[case("help|h,d#:[d],c#::[f=config.php],o::,q::[=\"wow,wow2\"]", vec!["help|h", "d#:[d]", "c#::[f=config.php]", "o::", "q::[=\"wow,wow2\"]"])]
    #[case("a, b ,,c,", vec!["a", "b", "c"])]
    #[case("h,", vec!["h"])]
    fn long(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split(text).unwrap(), expected);
    }

    #[test]
    fn short_invalid() {
        assert_matches!(split("h!v"), Err(DefinitionError::InvalidDefinition { fragment, .. }) => {
            assert_eq!(fragment, "!v");
        });
    }

    #[test]
    fn unclosed_bracket() {
        assert_matches!(
            split("h,d#:[d"),
            Err(DefinitionError::InvalidDefinition { .. })
        );
        assert_matches!(split("hd:[d"), Err(DefinitionError::InvalidDefinition { .. }));
    }

    #[test]
    fn custom_separator() {
        let grammar = Grammar {
            option_separator: ';',
            ..Grammar::default()
        };

        assert_eq!(
            split_definitions("user|u;v", &grammar).unwrap(),
            vec!["user|u", "v"]
        );
        assert_eq!(split_definitions("a;b", &grammar).unwrap(), vec!["a", "b"]);
        assert_eq!(split_definitions("ab", &grammar).unwrap(), vec!["a", "b"]);
    }
}
