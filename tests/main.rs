use gramopt::{GetOpt, GetOptError, ParsedArgs, Rules, Value, ValueType};
use rstest::rstest;

#[macro_use]
extern crate assert_matches;

fn get_opt(getopt: &mut GetOpt, argv: &[&str], definitions: &str) -> Result<ParsedArgs, GetOptError> {
    getopt.get_opt(argv, definitions, &Rules::default())
}

#[rstest]
#[case("hi:o:v::")]
#[case("user|u=,o::,quiet|q")]
#[case("help|h,d:[d],c::[f=config.php]")]
fn empty_argv(#[case] definitions: &str) {
    let mut getopt = GetOpt::new();
    let argv: &[&str] = &[];

    let parsed = getopt
        .get_opt(argv, definitions, &Rules::default())
        .unwrap();

    assert!(parsed.values().is_empty());
    assert!(parsed.positionals().is_empty());
}

#[test]
fn gnu_style() {
    let mut getopt = GetOpt::new();
    let definitions = "hi:o:v::";

    let parsed = get_opt(&mut getopt, &["-h", "test"], definitions).unwrap();
    assert_eq!(parsed.get("h"), Some(&Value::from("")));
    assert_eq!(parsed.values().len(), 1);
    assert_eq!(parsed.positionals(), &["test".to_string()]);

    let parsed = get_opt(&mut getopt, &["-i", "test"], definitions).unwrap();
    assert_eq!(parsed.get("i"), Some(&Value::from("test")));
    assert!(parsed.positionals().is_empty());

    assert_eq!(
        get_opt(&mut getopt, &["-o"], definitions).unwrap_err(),
        GetOptError::MissingValue("o".to_string())
    );

    let parsed = get_opt(&mut getopt, &["-v"], definitions).unwrap();
    assert_eq!(parsed.get("v"), Some(&Value::from("")));

    let parsed = get_opt(&mut getopt, &["-v", "bingo"], definitions).unwrap();
    assert_eq!(parsed.get("v"), Some(&Value::from("bingo")));
    assert_eq!(parsed.values().len(), 1);
}

#[test]
fn missing_required() {
    let mut getopt = GetOpt::new();

    assert_eq!(
        get_opt(&mut getopt, &["-i", "file.php"], "hi:o#:v::").unwrap_err(),
        GetOptError::MissingRequiredOption("o".to_string())
    );
}

#[rstest]
#[case(vec!["--user=phossa"])]
#[case(vec!["-u", "phossa"])]
fn synonyms(#[case] argv: Vec<&str>) {
    let mut getopt = GetOpt::new();
    get_opt(&mut getopt, &["--user=first"], "user|u=").unwrap();

    let parsed = getopt.parse(&argv).unwrap();

    assert_eq!(parsed.values().len(), 1);
    assert_eq!(parsed.get("user"), Some(&Value::from("phossa")));
    assert_eq!(getopt.get("u").unwrap().value(), Some(&Value::from("phossa")));
}

#[test]
fn clustered() {
    let mut getopt = GetOpt::new();

    let parsed = get_opt(
        &mut getopt,
        &["--user=phossa", "-qo", "output.txt", "-ib", "-i", "c", "wow"],
        "user|u=,o::,i#:[s=a|b|c],quiet|q",
    )
    .unwrap();

    let values: Vec<(&str, &Value)> = parsed
        .values()
        .iter()
        .map(|(name, value)| (name.as_str(), value))
        .collect();
    assert_eq!(
        values,
        vec![
            ("user", &Value::from("phossa")),
            ("o", &Value::from("output.txt")),
            ("i", &Value::from(vec!["b", "c"])),
            ("quiet", &Value::from("")),
        ]
    );
    assert_eq!(parsed.positionals(), &["wow".to_string()]);
}

#[test]
fn type_mismatch() {
    let mut getopt = GetOpt::new();
    let definitions = "d#:[i],c#::[i=2|3|4]";

    assert_matches!(
        get_opt(&mut getopt, &["-d", "two", "-c"], definitions),
        Err(GetOptError::InvalidType { name, value, value_type }) => {
            assert_eq!(name, "d");
            assert_eq!(value, "two");
            assert_eq!(value_type, "i");
        }
    );
    assert_matches!(
        get_opt(&mut getopt, &["-d", "2", "-c", "5"], definitions),
        Err(GetOptError::InvalidValue { name, value, .. }) => {
            assert_eq!(name, "c");
            assert_eq!(value, "5");
        }
    );

    let parsed = get_opt(&mut getopt, &["-d", "2", "-c"], definitions).unwrap();
    assert_eq!(parsed.get("c"), Some(&Value::from("2")));
}

#[test]
fn idempotent() {
    let mut getopt = GetOpt::new();
    let argv = ["--user=phossa", "-qo", "output.txt", "-ib", "-i", "c", "wow"];
    let definitions = "user|u=,o::,i#:[s=a|b|c],quiet|q";

    let first = get_opt(&mut getopt, &argv, definitions).unwrap();
    let second = get_opt(&mut getopt, &argv, definitions).unwrap();

    assert_eq!(first, second);
}

#[test]
fn duplicate() {
    let mut getopt = GetOpt::new();
    getopt.define("user|u=[s=nobody]", &Rules::default()).unwrap();

    assert_eq!(
        getopt
            .set_opt("user", Rules::new().value_type(ValueType::Integer))
            .unwrap_err(),
        GetOptError::DuplicateOption("user".to_string())
    );
    assert_eq!(
        getopt.define("name|u:", &Rules::default()).unwrap_err(),
        GetOptError::DuplicateOption("u".to_string())
    );

    let original = getopt.get("user").unwrap();
    assert_eq!(original.value_type(), &ValueType::String);
    assert_eq!(original.synonyms(), &["u".to_string()]);
    assert_matches!(getopt.get("name"), Err(GetOptError::UnknownOption(_)));
}

#[test]
fn terminator_and_stdin() {
    let mut getopt = GetOpt::new();

    let parsed = get_opt(&mut getopt, &["-", "-v", "--", "-h", "--"], "hv").unwrap();

    assert_eq!(parsed.get("v"), Some(&Value::from("")));
    assert!(!parsed.contains("h"));
    assert_eq!(
        parsed.positionals(),
        &["-".to_string(), "-h".to_string(), "--".to_string()]
    );
}

#[test]
fn list_definitions() {
    let mut getopt = GetOpt::new();

    let parsed = getopt
        .get_opt(
            &["-q", "-x", "-d", "1.5"],
            ["h", "d#=[n]", "x::[=wow|wow2]", r#"q::[="wow,wow2"]"#],
            &Rules::default(),
        )
        .unwrap();

    assert_eq!(parsed.get("d"), Some(&Value::from("1.5")));
    assert_eq!(parsed.get("x"), Some(&Value::from("wow")));
    assert_eq!(parsed.get("q"), Some(&Value::from("wow,wow2")));
}

#[test]
fn custom_type() {
    let mut getopt = GetOpt::new();
    let shared = Rules::new().validator(|value: &str, code: &str| match code {
        "hex" => u64::from_str_radix(value, 16).is_ok(),
        _ => false,
    });
    getopt.define("color|c:[hex]", &shared).unwrap();

    let parsed = getopt.parse(&["-c", "ff00aa"]).unwrap();
    assert_eq!(parsed.get("color"), Some(&Value::from("ff00aa")));
    assert_matches!(
        getopt.parse(&["-c", "purple"]),
        Err(GetOptError::InvalidType { value_type, .. }) => assert_eq!(value_type, "hex")
    );
}

#[test]
fn shared_rules_keep_grammar_fields() {
    let mut getopt = GetOpt::new();
    let shared = Rules::new()
        .value_type(ValueType::Integer)
        .default_value(vec!["x", "y"])
        .help("Shared.");
    getopt.define("a:,b::", &shared).unwrap();

    let parsed = getopt.parse(&["-a", "x", "-b", "z"]).unwrap();

    assert_eq!(parsed.get("a"), Some(&Value::from("x")));
    assert_eq!(parsed.get("b"), Some(&Value::from("z")));
    assert_eq!(getopt.get("b").unwrap().help(), Some("Shared."));
}
