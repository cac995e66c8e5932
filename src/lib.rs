//! `gramopt` is a getopt style command line option parser for Rust.
//!
//! Options are declared in a compact definition grammar, rather than one builder call per option:
//! ```text
//! name[|synonym]*[#][:|::][[type][=default[|default2...]]]
//! ```
//! * `|` separates the option's primary name from its synonyms.
//! * `#` marks an option as required: it must appear on the command line.
//! * `:` (or `=`) declares that a value is required; `::` (or `==`) that a value is optional.
//! Without either, the option is a flag.
//! * `[type=default]` declares the value type and the default.
//! A `|` separated default is an enum: only those values are accepted, and the first is the default.
//!
//! Definitions are separated by `,`.
//! A string without any `,` or `|` is read gnu-style, one letter per option (ex: `hi:o::`).
//!
//! The type codes are `s` string (default), `i` integer, `n` number, `d` readable directory, `D` writable directory,
//! `f` readable file, `F` writable file.
//! Any other code is a custom type, checked by a validator supplied in the option [`Rules`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/getopt.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ getopt --user=phossa -qo output.txt -c 3 input.txt
//! user: "phossa"
//! o: "output.txt"
//! count: "3"
//! quiet: ""
//! positionals: ["input.txt"]
//!
//! $ getopt -qc
//! Parse error: Option 'c' requires a value, but none was provided.
//!
//! $ getopt -l extreme
//! Parse error: Option 'level' cannot accept 'extreme' (expected one of ["low", "mid", "high"]).
//! ```
//!
//! # Command line syntax
//! The command line is matched getopt style:
//! * `--name`, `--name value`, `--name=value`
//! * `-n`, `-n value`, `-nvalue`
//! * `-xyz` clusters short options: `x` and `y` are flags, or else the rest of the cluster is their value.
//! * An optional value never takes a following token that starts with `-`.
//! * `--` ends option matching; every later token is positional.
//! * `-` is positional (stdin).
//!
//! A value containing `|` is split into multiple values, and repeated options accumulate their values into a
//! [`Value::Multiple`].
//!
//! # Programmatic options
//! Options may be registered without the grammar via [`GetOpt::set_opt`].
//! Shared [`Rules`] may be layered under every definition; the definition always decides the grammar fields
//! (names, required, value mode, type and default), so the shared rules contribute the validator and help text.
//! ```
//! use gramopt::{GetOpt, Rules, ValueMode, ValueType};
//!
//! let mut getopt = GetOpt::new();
//! getopt
//!     .set_opt(
//!         "config",
//!         Rules::new()
//!             .synonyms(["c"])
//!             .mode(ValueMode::Required)
//!             .value_type(ValueType::FileRead),
//!     )
//!     .unwrap();
//! getopt
//!     .define("width|w:[i],height|h:[i]", &Rules::new().help("A size, in characters."))
//!     .unwrap();
//!
//! let parsed = getopt.parse(&["-w", "80", "--height=24", "-w", "100"]).unwrap();
//! assert_eq!(parsed.get("width").unwrap().last(), "100");
//! assert_eq!(parsed.get("height").unwrap(), &"24");
//! assert_eq!(getopt.get("h").unwrap().help(), Some("A size, in characters."));
//! assert!(getopt.parse(&["-w", "eighty"]).is_err());
//! ```
pub use gramopt_core::*;
