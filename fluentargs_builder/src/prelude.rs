//! Traits which, typically, may be imported without concern: `use fluentargs::prelude::*`.
use thiserror::Error;

use crate::matcher::ParsedOption;

/// Behaviour to convert a [`ParsedOption`] into a value of the implementing type.
///
/// Implemented for the common primitives, `String`, `PathBuf`, the `chrono` date types, `url::Url`, `Option<T>` and `Vec<T>`.
/// Implement it for your own types to use them with [`CommandLineParser::setup`](crate::CommandLineParser::setup).
///
/// ### Example
/// ```
/// # use fluentargs_builder as fluentargs;
/// use fluentargs::prelude::*;
/// use fluentargs::{parse_from_str, CaseType, CommandLineParser, ParsedOption};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Celsius(f64);
///
/// impl OptionValue for Celsius {
///     fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue> {
///         parse_from_str::<f64>(option).map(Celsius)
///     }
/// }
///
/// let mut temperature = Celsius(0.0);
/// let mut parser = CommandLineParser::new();
/// parser
///     .setup::<Celsius>(CaseType::CaseInsensitive, &["t", "temperature"])
///     .unwrap()
///     .callback(|value| temperature = value);
///
/// let result = parser.parse_tokens(vec!["--temperature", "21.5"].as_slice());
/// drop(parser);
///
/// assert!(!result.has_errors);
/// assert_eq!(temperature, Celsius(21.5));
/// ```
pub trait OptionValue: Sized {
    /// Convert the option as found on the Cli.
    fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue>;
}

/// Behaviour for an enumeration whose variants may be chosen on the Cli, by name or by number.
///
/// Pair it with [`parse_choice`](crate::parse_choice) to implement [`OptionValue`].
/// Names are compared ignoring case.
/// Use `Vec<T>` to accept several variants at once (ex: `--direction South East`).
///
/// ### Example
/// ```
/// # use fluentargs_builder as fluentargs;
/// use fluentargs::prelude::*;
/// use fluentargs::{parse_choice, CaseType, CommandLineParser, ParsedOption};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Direction {
///     North,
///     East,
///     South,
///     West,
/// }
///
/// impl Choices for Direction {
///     const CHOICES: &'static [(&'static str, i64, Self)] = &[
///         ("North", 0, Direction::North),
///         ("East", 1, Direction::East),
///         ("South", 2, Direction::South),
///         ("West", 3, Direction::West),
///     ];
/// }
///
/// impl OptionValue for Direction {
///     fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue> {
///         parse_choice(option)
///     }
/// }
///
/// let mut directions = Vec::default();
/// let mut parser = CommandLineParser::new();
/// parser
///     .setup::<Vec<Direction>>(CaseType::CaseInsensitive, &["d", "direction"])
///     .unwrap()
///     .callback(|values| directions = values);
///
/// let result = parser.parse_tokens(vec!["--direction", "South", "3"].as_slice());
/// drop(parser);
///
/// assert!(!result.has_errors);
/// assert_eq!(directions, vec![Direction::South, Direction::West]);
/// ```
pub trait Choices: Sized + Clone + 'static {
    /// Every variant with its name and number.
    const CHOICES: &'static [(&'static str, i64, Self)];
}

/// The reasons a [`ParsedOption`] cannot be converted by an [`OptionValue`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    /// The option carries no value, but the type requires one.
    #[error("a value is required for {type_name}.")]
    Missing {
        /// The name of the target type.
        type_name: &'static str,
    },
    /// The value is not a valid representation of the type.
    #[error("cannot convert '{token}' to {type_name}.")]
    Conversion {
        /// The rejected value.
        token: String,
        /// The name of the target type.
        type_name: &'static str,
    },
}
