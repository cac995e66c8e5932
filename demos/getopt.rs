use gramopt::{GetOpt, Rules, Value};
use std::env;
use std::process::exit;

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();
    let mut getopt = GetOpt::new();

    let parsed = match getopt.get_opt(
        &argv,
        "help|h,user|u=,o::,count|c:[i=1],level|l::[=low|mid|high],quiet|q",
        &Rules::default(),
    ) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("Parse error: {error}");
            exit(1);
        }
    };

    if parsed.contains("help") {
        println!("usage: getopt [-h] [-u USER] [-o[OUTPUT]] [-c COUNT] [-l[LEVEL]] [-q] [ITEM ...]");
        return;
    }

    for (name, value) in parsed.values() {
        match value {
            Value::Single(value) => println!("{name}: {value:?}"),
            Value::Multiple(_) => println!("{name}: {:?}", value.all()),
        }
    }

    println!("positionals: {:?}", parsed.positionals());
}
