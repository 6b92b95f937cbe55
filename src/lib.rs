//! `fluentargs` is a callback driven command line option parser for Rust.
//!
//! Options are registered up front, each with a set of names, a value type, and a callback.
//! Parsing the Cli then invokes the callbacks with the typed values, and returns a result describing everything else: errors, options that were not found, options that were not recognized, and left over values.
//! `fluentargs` prioritizes the following concerns:
//! * *Familiar syntax, both POSIX and Windows*:
//! The same option may be specified as `-v`, `--verbose`, or `/verbose`, with the value attached (`-v=1`, `-v:1`) or separate (`-v 1`).
//! * *Type safe values*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Each option declares its type `T` via [`prelude::OptionValue`].
//! * *Forgiving parse*:
//! A bad Cli never panics, and never stops the parse part way.
//! All problems are collected in the [`CommandLineParserResult`].
//! * *Strict setup*:
//! Invalid or conflicting option names are programmer errors, rejected immediately as a [`SetupError`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/record_update.rs")]
//! ```
//!
//! ```console
//! $ record_update -r 10 -v "Mr. Smith" -ab -c- -d -D
//! Updating record 10 to 'Mr. Smith'.
//!   -a: true
//!   -b: true
//!   -c: false
//!   -d: true
//!   -D: true
//!
//! $ record_update -v "Mr. Smith"
//! Option '-r, --record' parse error: option is required but was not specified.
//!
//! $ record_update /?
//! usage: record_update [options]
//!
//! options:
//!  -r, --record   The record to update. (required)
//!  -v, --value    The new value.
//!  --silent       Execute without printing.
//!  -a
//!  -b
//!  -c
//!  -d
//!  -D
//! ```
//!
//! # Setup
//! Start with a [`CommandLineParser`] and `setup` each option.
//! An option is identified by one or more names, each of which is matched according to a [`CaseType`]:
//! * [`CaseType::CaseInsensitive`]: `--Verbose` matches the name `verbose`.
//! * [`CaseType::CaseSensitive`]: only `--verbose` matches the name `verbose`.
//!
//! No two names may conflict, across all options of the parser.
//! Names which differ only by case conflict, unless both are case sensitive.
//!
//! The [`OptionSetup`] then configures the option:
//! * `callback`: receives the converted value.
//! * `capture_additional_arguments`: receives the bare values following the option's value.
//! * `required`: the option must be specified on the Cli.
//! * `set_default`: the value to use when the option is absent, or its value fails to convert.
//! * `with_description`: the text shown in the help message.
//!
//! Finally, [`CommandLineParser::setup_help`] adds the help option, configured via [`HelpSetup`].
//!
//! ### Values
//! The value type `T` must implement [`prelude::OptionValue`].
//! `fluentargs` provides implementations for the following:
//! * `String`: surrounding double quotes are removed.
//! * `bool`: an option without a value is `true`; otherwise `true/false`, `on/off`, `1/0`.
//! * Integers, floats, `char`, and `PathBuf`: via [`std::str::FromStr`].
//! * `chrono::NaiveDateTime`: `2012-02-29T01:01:01`, `2012-02-29 01:01:01`, or a date alone (midnight).
//! * `chrono::NaiveDate`, `chrono::DateTime<FixedOffset>`, and `url::Url`: via [`std::str::FromStr`].
//! * `Option<T>`: `None` when the value is missing or fails to convert.
//! * `Vec<T>`: the value followed by its additional values.
//!
//! For your own types, implement `OptionValue` (see [`parse_from_str`] for types that implement `FromStr`).
//! For enumerations, implement [`prelude::Choices`] and use [`parse_choice`].
//! A variant is then given by its name, ignoring case, or by its number; `Vec<T>` accepts several (`--direction South East`).
//!
//! # Cli Semantics
//! `fluentargs` parses the Cli tokens according to the following set of rules.
//! * An option begins with one of the prefixes `--`, `-`, or `/`.
//! A lone `-` or `/` is a value, not an option.
//! * The value of an option may be attached with `=` or `:`.
//! For example, `--key=123` and `--key:123` are equivalent to `--key 123`.
//! Only the first separator is used, so `--key=a=b` has the value `a=b`.
//! * Otherwise, the value is the next token, as long as it is not itself an option.
//! Negative numbers are values, not options: `--offset -5` gives the value `-5`.
//! * Further values after the option's value are its *additional values*.
//! For example, `--key a b c` gives `key` the value `a` and the additional values `b c`.
//! Values before any option are the result's `additional_values`.
//! * The suffixes `+` and `-` give the values `true` and `false` (`-` and `/` prefixes only).
//! For example, `-b-` is equivalent to `-b false`.
//! * Multi-character keys with the `-` or `/` prefix are stacked single character options.
//! For example, `-abc` is equivalent to `-a -b -c`, and `-ab-` to `-a- -b-`.
//! When not every character is a registered option, the whole key is matched instead (`-record 10`).
//! * The token `--` ends option parsing.
//! Everything following it is a value, no matter its syntax.
//! * When an option is repeated, the first occurrence wins.
//! A stacked key only counts as an occurrence once its stack is matched split.
//!
//! Options which look valid but match no registered name are reported as [`CommandLineParserResult::additional_options_found`], in input order.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing::debug!` events while parsing.
pub use fluentargs_builder::*;
