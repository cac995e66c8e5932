use crate::api::{CliOption, Rules};

/// Behaviour to construct the option registered under a name.
///
/// Inject a factory (via [`GetOpt::with_factory`](crate::GetOpt::with_factory)) to adjust every option at registration,
/// for example to attach a shared validator or help text.
/// Any `Fn(&str, Rules) -> CliOption` is a factory.
pub trait OptionFactory {
    /// Create the option `name` from its rules.
    fn create(&self, name: &str, rules: Rules) -> CliOption;
}

/// The factory used unless another is injected: [`CliOption::new`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl OptionFactory for DefaultFactory {
    fn create(&self, name: &str, rules: Rules) -> CliOption {
        CliOption::new(name, rules)
    }
}

impl<F> OptionFactory for F
where
    F: Fn(&str, Rules) -> CliOption,
{
    fn create(&self, name: &str, rules: Rules) -> CliOption {
        self(name, rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factory() {
        let option = DefaultFactory.create("user", Rules::new().synonyms(["u"]));
        assert_eq!(option.name(), "user");
        assert_eq!(option.synonyms(), &["u".to_string()]);
    }

    #[test]
    fn closure_factory() {
        let factory = |name: &str, rules: Rules| CliOption::new(name, rules.help("Help message"));
        let option = factory.create("user", Rules::new());
        assert_eq!(option.help(), Some("Help message"));
    }
}
